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
//! Named DNA sequences and base pairing.

#[macro_use]
extern crate serde_derive;

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// No sequence with this name has been added to the table.
    UnknownSequence(String),
    RangeOutOfBounds {
        name: String,
        start: usize,
        end: usize,
        length: usize,
    },
    /// The range splits a multi-byte character of the sequence.
    NotOnCharBoundary {
        name: String,
        start: usize,
        end: usize,
    },
    /// A letter other than A, T, G or C.
    InvalidBase(char),
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSequence(name) => write!(f, "Sequence {} has not been added", name),
            Self::RangeOutOfBounds {
                name,
                start,
                end,
                length,
            } => write!(
                f,
                "Range {}..{} is out of bounds for sequence {} of length {}",
                start, end, name, length
            ),
            Self::NotOnCharBoundary { name, start, end } => write!(
                f,
                "Range {}..{} splits a non ASCII character of sequence {}",
                start, end, name
            ),
            Self::InvalidBase(c) => write!(f, "Invalid base {:?}, expected one of ATGC", c),
        }
    }
}

impl std::error::Error for SequenceError {}

/// A collection of sequences indexed by their name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceTable(HashMap<String, String, ahash::RandomState>);

impl SequenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sequence to the table, replacing any sequence with the same name.
    pub fn insert<N: Into<String>, S: Into<String>>(&mut self, name: N, sequence: S) {
        let name = name.into();
        if self.0.insert(name.clone(), sequence.into()).is_some() {
            log::info!("Replaced sequence {}", name);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json_str(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// The bases `start..end` of the sequence `name`.
    pub fn sequence(&self, name: &str, start: usize, end: usize) -> Result<&str, SequenceError> {
        let seq = self
            .0
            .get(name)
            .ok_or_else(|| SequenceError::UnknownSequence(name.to_string()))?;
        if start > end || end > seq.len() {
            return Err(out_of_bounds(name, start, end, seq));
        }
        seq.get(start..end)
            .ok_or_else(|| SequenceError::NotOnCharBoundary {
                name: name.to_string(),
                start,
                end,
            })
    }
}

fn out_of_bounds(name: &str, start: usize, end: usize, seq: &str) -> SequenceError {
    SequenceError::RangeOutOfBounds {
        name: name.to_string(),
        start,
        end,
        length: seq.len(),
    }
}

impl<N: Into<String>, S: Into<String>> std::iter::FromIterator<(N, S)> for SequenceTable {
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        let mut ret = Self::new();
        for (name, sequence) in iter {
            ret.insert(name, sequence);
        }
        ret
    }
}

/// The base paired with `c`.
pub fn complement_base(c: char) -> Result<char, SequenceError> {
    match c {
        'A' => Ok('T'),
        'T' => Ok('A'),
        'G' => Ok('C'),
        'C' => Ok('G'),
        c => Err(SequenceError::InvalidBase(c)),
    }
}

/// The sequence of the bases paired with `seq`, in the same order.
pub fn complement(seq: &str) -> Result<String, SequenceError> {
    seq.chars().map(complement_base).collect()
}
