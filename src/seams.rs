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
//! Seam locations and the search of the crossover pattern center of a helix.

use super::{OutlineError, OutlineModel};

/// Marker used in design files for helices without seam.
pub const NO_SEAM: &str = "no seam";

/// The seams of a helix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeamEntryRepr", into = "SeamEntryRepr")]
pub enum SeamEntry {
    NoSeam,
    /// Candidate seam positions, the first one anchors the crossover pattern.
    Offsets(Vec<isize>),
}

impl SeamEntry {
    fn first_offset(&self) -> Option<isize> {
        match self {
            Self::NoSeam => None,
            Self::Offsets(offsets) => offsets.first().cloned(),
        }
    }
}

/// Serialized form of a `SeamEntry`.
#[doc(hidden)]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeamEntryRepr {
    Marker(String),
    Offsets(Vec<SeamOffsetRepr>),
}

#[doc(hidden)]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeamOffsetRepr {
    Offset(isize),
    Marker(String),
}

#[derive(Debug)]
pub struct UnknownSeamMarker(String);

impl std::fmt::Display for UnknownSeamMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown seam marker {:?}, expected {:?}", self.0, NO_SEAM)
    }
}

impl TryFrom<SeamEntryRepr> for SeamEntry {
    type Error = UnknownSeamMarker;

    fn try_from(repr: SeamEntryRepr) -> Result<Self, Self::Error> {
        match repr {
            SeamEntryRepr::Marker(m) if m == NO_SEAM => Ok(Self::NoSeam),
            SeamEntryRepr::Marker(m) => Err(UnknownSeamMarker(m)),
            SeamEntryRepr::Offsets(reprs) => {
                let mut offsets = Vec::with_capacity(reprs.len());
                for r in reprs {
                    match r {
                        SeamOffsetRepr::Offset(o) => offsets.push(o),
                        SeamOffsetRepr::Marker(m) if m == NO_SEAM => (),
                        SeamOffsetRepr::Marker(m) => return Err(UnknownSeamMarker(m)),
                    }
                }
                Ok(Self::Offsets(offsets))
            }
        }
    }
}

impl From<SeamEntry> for SeamEntryRepr {
    fn from(entry: SeamEntry) -> Self {
        match entry {
            SeamEntry::NoSeam => Self::Marker(NO_SEAM.to_string()),
            SeamEntry::Offsets(offsets) => {
                Self::Offsets(offsets.into_iter().map(SeamOffsetRepr::Offset).collect())
            }
        }
    }
}

/// The seam entries of a design, indexed by helix like the rows of its outline.
///
/// The seam sequence is sized independently of the outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeamIndex(Vec<SeamEntry>);

impl SeamIndex {
    pub fn new(entries: Vec<SeamEntry>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[SeamEntry] {
        &self.0
    }

    /// The entry designated by a signed index. Negative indices count from the end of the
    /// sequence. Return `None` if `i` is not in `(-len, len)`.
    fn get(&self, i: isize) -> Option<&SeamEntry> {
        let len = self.0.len() as isize;
        if i >= len || i <= -len {
            None
        } else if i < 0 {
            self.0.get((len + i) as usize)
        } else {
            self.0.get(i as usize)
        }
    }

    /// Return the offset anchoring the crossover pattern of `helix`.
    ///
    /// Helix 0 looks for the first helix with a seam in increasing order, any other helix looks
    /// in decreasing order starting from itself. If the search leaves the seam sequence, the
    /// center of `outline` is returned.
    pub fn find_pattern_center(
        &self,
        helix: isize,
        outline: &OutlineModel,
    ) -> Result<isize, OutlineError> {
        let step = if helix == 0 { 1 } else { -1 };
        let mut i = helix;
        while let Some(entry) = self.get(i) {
            if let SeamEntry::Offsets(_) = entry {
                return entry
                    .first_offset()
                    .ok_or(OutlineError::MalformedSeamEntry { helix: i });
            }
            i += step;
        }
        log::debug!(
            "No seam found for helix {}, using the center of the outline",
            helix
        );
        outline.center()
    }

    /// The pattern center of each helix of `outline`.
    pub fn pattern_centers(&self, outline: &OutlineModel) -> Result<Vec<isize>, OutlineError> {
        (0..outline.nb_helices() as isize)
            .map(|h| self.find_pattern_center(h, outline))
            .collect()
    }
}
