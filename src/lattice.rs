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
//! Structural periodicity of the lattices on which helices are laid out.

use super::OutlineError;
use std::str::FromStr;
use strum::{Display, EnumString};

/// The lattice on which the helices of a design are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(try_from = "String", into = "String")]
pub enum LatticeKind {
    /// Honeycomb lattice, 7 lattice units between two crossovers of the same helix pair.
    Hex,
    /// Square lattice, 8 lattice units between two crossovers of the same helix pair.
    Square,
}

/// The periodicities a well formed outline should align to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeConstants {
    /// Repeat unit of the lattice.
    pub periodicity: isize,
    /// Twice the periodicity. A seam placed on a multiple of this value lands on a crossover.
    pub pair_periodicity: isize,
}

impl LatticeKind {
    /// Parse a lattice tag (`"hex"` or `"square"`).
    pub fn from_tag(tag: &str) -> Result<Self, OutlineError> {
        Self::from_str(tag).map_err(|_| OutlineError::InvalidLatticeKind(tag.to_string()))
    }

    pub fn periodicity(&self) -> isize {
        match self {
            Self::Hex => 7,
            Self::Square => 8,
        }
    }

    pub fn constants(&self) -> LatticeConstants {
        let periodicity = self.periodicity();
        LatticeConstants {
            periodicity,
            pair_periodicity: 2 * periodicity,
        }
    }
}

/// Return the constants of the lattice designated by `tag`.
pub fn lattice_constants(tag: &str) -> Result<LatticeConstants, OutlineError> {
    LatticeKind::from_tag(tag).map(|kind| kind.constants())
}

impl TryFrom<String> for LatticeKind {
    type Error = OutlineError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Self::from_tag(&tag)
    }
}

impl From<LatticeKind> for String {
    fn from(kind: LatticeKind) -> Self {
        kind.to_string()
    }
}
