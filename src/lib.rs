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
//! Shape outlines and seam patterns of DNA origami designs laid out on a lattice.
//!
//! An outline gives, for each helix, the ranges of offsets occupied by the design. The seams of
//! the design anchor the crossover pattern of each helix. Both are read-only inputs, every
//! query in this crate is a pure computation on them.

#[macro_use]
extern crate serde_derive;

mod design_file;
mod lattice;
mod outline;
mod seams;
mod warnings;
#[cfg(test)]
mod tests;

pub use design_file::*;
pub use lattice::*;
pub use outline::*;
pub use seams::*;
pub use warnings::*;

/// Re-export the sequence tables used alongside outlines when writing staples
pub use ensnano_sequences;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    /// The lattice tag is neither `"hex"` nor `"square"`.
    InvalidLatticeKind(String),
    HelixOutOfRange {
        helix: isize,
        nb_helices: usize,
    },
    /// The outline has no line.
    EmptyOutline,
    /// A seam entry selected by a pattern center search holds no offset.
    MalformedSeamEntry {
        helix: isize,
    },
    InvalidInterval {
        start: isize,
        end: isize,
    },
    /// A row has fewer than `active_line_count + 1` lines.
    MissingLines {
        active_line_count: usize,
        nb_lines: usize,
    },
}

impl std::fmt::Display for OutlineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatticeKind(tag) => write!(
                f,
                "Invalid lattice kind {:?}, must be either \"hex\" or \"square\"",
                tag
            ),
            Self::HelixOutOfRange { helix, nb_helices } => write!(
                f,
                "Helix {} is out of range, the outline has {} helices",
                helix, nb_helices
            ),
            Self::EmptyOutline => write!(f, "The outline is empty"),
            Self::MalformedSeamEntry { helix } => {
                write!(f, "The seam entry of helix {} has no offset", helix)
            }
            Self::InvalidInterval { start, end } => {
                write!(f, "Invalid line [{}, {}), start must be < end", start, end)
            }
            Self::MissingLines {
                active_line_count,
                nb_lines,
            } => write!(
                f,
                "A row with active line count {} needs more than {} lines but has {}",
                active_line_count, active_line_count, nb_lines
            ),
        }
    }
}

impl std::error::Error for OutlineError {}
