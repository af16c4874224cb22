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
//! Reading and writing the design data consumed by the outline model.

use super::{LatticeKind, OutlineError, OutlineModel, SeamIndex, Warning};
use std::path::Path;

/// The geometric data of a design: its lattice, its shape outline and its seams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineDesign {
    pub lattice: LatticeKind,
    pub outline: OutlineModel,
    #[serde(default, skip_serializing_if = "SeamIndex::is_empty")]
    pub seams: SeamIndex,
}

#[derive(Debug)]
pub enum LoadDesignError {
    IoError(std::io::Error),
    /// The file is not valid json or breaks an invariant of the outline model.
    JsonError(serde_json::Error),
}

impl From<std::io::Error> for LoadDesignError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e)
    }
}

impl From<serde_json::Error> for LoadDesignError {
    fn from(e: serde_json::Error) -> Self {
        Self::JsonError(e)
    }
}

impl std::fmt::Display for LoadDesignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "Could not read design file: {}", e),
            Self::JsonError(e) => write!(f, "Could not parse design: {}", e),
        }
    }
}

impl std::error::Error for LoadDesignError {}

impl OutlineDesign {
    pub fn from_json_str(json_str: &str) -> Result<Self, LoadDesignError> {
        let design: Self = serde_json::from_str(json_str)?;
        log::info!(
            "Loaded outline of {} helices on {} lattice with {} seam entries",
            design.outline.nb_helices(),
            design.lattice,
            design.seams.len()
        );
        Ok(design)
    }

    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadDesignError> {
        let json_str = std::fs::read_to_string(path)?;
        Self::from_json_str(&json_str)
    }

    pub fn to_json_string(&self) -> Result<String, LoadDesignError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<Vec<Warning>, OutlineError> {
        self.outline.validate(self.lattice)
    }

    pub fn find_pattern_center(&self, helix: isize) -> Result<isize, OutlineError> {
        self.seams.find_pattern_center(helix, &self.outline)
    }
}
