/*
ENSnano, a 3d graphical application for DNA nanostructures.
    Copyright (C) 2021  Nicolas Levy <nicolaspierrelevy@gmail.com> and Nicolas Schabanel <nicolas.schabanel@ens-lyon.fr>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
//! Shape outlines: the occupied offset ranges of each helix of a design.

use super::OutlineError;

/// A half-open interval `[start, end)` of offsets on a helix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(isize, isize)", into = "(isize, isize)")]
pub struct LineInterval {
    pub start: isize,
    pub end: isize,
}

impl LineInterval {
    pub fn new(start: isize, end: isize) -> Result<Self, OutlineError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(OutlineError::InvalidInterval { start, end })
        }
    }

    pub fn contains(&self, position: isize) -> bool {
        self.start <= position && position < self.end
    }
}

impl TryFrom<(isize, isize)> for LineInterval {
    type Error = OutlineError;

    fn try_from((start, end): (isize, isize)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<LineInterval> for (isize, isize) {
    fn from(interval: LineInterval) -> Self {
        (interval.start, interval.end)
    }
}

/// The line segments of one helix.
///
/// Only the first `active_line_count + 1` lines are meaningful, the remaining ones are padding.
/// This models lattices in which alternating rows carry one or two segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "(usize, Vec<LineInterval>)",
    into = "(usize, Vec<LineInterval>)"
)]
pub struct RowDescriptor {
    active_line_count: usize,
    lines: Vec<LineInterval>,
}

impl RowDescriptor {
    pub fn new(active_line_count: usize, lines: Vec<LineInterval>) -> Result<Self, OutlineError> {
        if lines.len() <= active_line_count {
            return Err(OutlineError::MissingLines {
                active_line_count,
                nb_lines: lines.len(),
            });
        }
        Ok(Self {
            active_line_count,
            lines,
        })
    }

    pub fn active_line_count(&self) -> usize {
        self.active_line_count
    }

    /// All the lines of the row, padding included.
    pub fn lines(&self) -> &[LineInterval] {
        &self.lines
    }

    pub fn active_lines(&self) -> &[LineInterval] {
        &self.lines[..=self.active_line_count]
    }

    pub fn contains(&self, position: isize) -> bool {
        self.active_lines().iter().any(|l| l.contains(position))
    }
}

impl TryFrom<(usize, Vec<LineInterval>)> for RowDescriptor {
    type Error = OutlineError;

    fn try_from(
        (active_line_count, lines): (usize, Vec<LineInterval>),
    ) -> Result<Self, Self::Error> {
        Self::new(active_line_count, lines)
    }
}

impl From<RowDescriptor> for (usize, Vec<LineInterval>) {
    fn from(row: RowDescriptor) -> Self {
        (row.active_line_count, row.lines)
    }
}

/// The outline of a shape, one `RowDescriptor` per helix.
///
/// An outline is never empty and is not modified once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RowDescriptor>", into = "Vec<RowDescriptor>")]
pub struct OutlineModel {
    rows: Vec<RowDescriptor>,
}

impl OutlineModel {
    pub fn new(rows: Vec<RowDescriptor>) -> Result<Self, OutlineError> {
        if rows.is_empty() {
            Err(OutlineError::EmptyOutline)
        } else {
            Ok(Self { rows })
        }
    }

    pub fn nb_helices(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[RowDescriptor] {
        &self.rows
    }

    pub fn row(&self, helix: isize) -> Result<&RowDescriptor, OutlineError> {
        usize::try_from(helix)
            .ok()
            .and_then(|h| self.rows.get(h))
            .ok_or(OutlineError::HelixOutOfRange {
                helix,
                nb_helices: self.rows.len(),
            })
    }

    /// Return true iff `position` is in one of the active lines of `helix`.
    pub fn contains(&self, helix: isize, position: isize) -> Result<bool, OutlineError> {
        self.row(helix).map(|row| row.contains(position))
    }

    fn active_lines(&self) -> impl Iterator<Item = &LineInterval> {
        self.rows.iter().flat_map(|row| row.active_lines().iter())
    }

    /// The largest end of an active line, 0 if there are none.
    pub fn max_extent(&self) -> isize {
        self.active_lines().map(|l| l.end).fold(0, isize::max)
    }

    /// The smallest start of an active line, `None` if there are none.
    pub fn min_extent(&self) -> Option<isize> {
        self.active_lines().map(|l| l.start).min()
    }

    /// The middle of the outline, rounded toward its minimum.
    pub fn center(&self) -> Result<isize, OutlineError> {
        let min = self.min_extent().ok_or(OutlineError::EmptyOutline)?;
        let max = self.max_extent();
        Ok((max - min).div_euclid(2) + min)
    }
}

impl TryFrom<Vec<RowDescriptor>> for OutlineModel {
    type Error = OutlineError;

    fn try_from(rows: Vec<RowDescriptor>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<OutlineModel> for Vec<RowDescriptor> {
    fn from(outline: OutlineModel) -> Self {
        outline.rows
    }
}
