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
//! Advisory checks of an outline against the periodicity of its lattice.

use super::{LatticeKind, OutlineError, OutlineModel};

/// An advisory diagnostic on the shape of an outline. Warnings never stop a computation, they
/// are returned to the caller who decides how to display them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The smallest offset of the outline is not 0.
    NonZeroMinimum { min: isize },
    /// The length of the outline is not a multiple of the lattice periodicity.
    NotPeriodicityAligned {
        lattice: LatticeKind,
        periodicity: isize,
        max: isize,
    },
    /// The length of the outline is not a multiple of twice the lattice periodicity, so a seam
    /// placed on the center of the outline would not fall on a crossover.
    SeamNotCrossoverAligned { pair_periodicity: isize, max: isize },
}

impl Warning {
    pub fn message(&self) -> String {
        match self {
            Self::NonZeroMinimum { min } => non_zero_minimum(*min),
            Self::NotPeriodicityAligned {
                lattice,
                periodicity,
                max,
            } => not_periodicity_aligned(*lattice, *periodicity, *max),
            Self::SeamNotCrossoverAligned {
                pair_periodicity,
                max,
            } => seam_not_crossover_aligned(*pair_periodicity, *max),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

fn non_zero_minimum(min: isize) -> String {
    format!(
        "The min value of this outline is {}. To avoid possible errors, make the min value zero",
        min
    )
}

fn not_periodicity_aligned(lattice: LatticeKind, periodicity: isize, max: isize) -> String {
    format!(
        "The design is on a {} lattice but its length is not divisible by {}, \
         as its length is currently {}",
        lattice, periodicity, max
    )
}

fn seam_not_crossover_aligned(pair_periodicity: isize, max: isize) -> String {
    format!(
        "The design length is not divisible by {} as it is currently {}. \
         Therefore a seam placed on the center will not fall on a crossover point",
        pair_periodicity, max
    )
}

impl OutlineModel {
    /// Check that the outline starts at 0 and that its length is aligned with the periodicity of
    /// `lattice`. All checks are run, the warnings are returned in a fixed order.
    pub fn validate(&self, lattice: LatticeKind) -> Result<Vec<Warning>, OutlineError> {
        let min = self.min_extent().ok_or(OutlineError::EmptyOutline)?;
        let max = self.max_extent();
        let constants = lattice.constants();
        log::debug!("outline extent [{}, {}) on {} lattice", min, max, lattice);

        let mut warnings = Vec::new();
        if min != 0 {
            warnings.push(Warning::NonZeroMinimum { min });
        }
        if max.rem_euclid(constants.periodicity) != 0 {
            warnings.push(Warning::NotPeriodicityAligned {
                lattice,
                periodicity: constants.periodicity,
                max,
            });
        }
        if max.rem_euclid(constants.pair_periodicity) != 0 {
            warnings.push(Warning::SeamNotCrossoverAligned {
                pair_periodicity: constants.pair_periodicity,
                max,
            });
        }
        Ok(warnings)
    }
}

/// Validate `outline` against the lattice designated by `lattice_tag`.
///
/// Fails only if the tag is not a known lattice.
pub fn validate_outline(
    outline: &OutlineModel,
    lattice_tag: &str,
) -> Result<Vec<Warning>, OutlineError> {
    let lattice = LatticeKind::from_tag(lattice_tag)?;
    outline.validate(lattice)
}
