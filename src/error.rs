// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for word construction and factor arithmetic.
//!
//! Every error is a contract violation by the caller (malformed input or bad
//! indices). None of them is transient, so nothing in the crate retries.

use strum_macros::{EnumCount as EnumCountMacro, IntoStaticStr};
use thiserror::Error;

/// Errors raised by the word model, the symmetry predicates and factors.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum WordError {
    /// Word is empty, shorter than four letters, or longer than a configured bound.
    #[error("invalid word: length {length} is outside the accepted range")]
    InvalidWord { length: usize },

    /// Letter outside the alphabet `{u, d, l, r}`.
    #[error("invalid letter {letter:?}: expected one of u, d, l, r")]
    InvalidLetter { letter: char },

    /// Letter index out of range for a linear word.
    #[error("invalid index {index} for a word of length {length}")]
    InvalidIndex { index: isize, length: usize },

    /// Factor bounds out of range or disordered.
    #[error("invalid indices [{start}, {end}] for a word of length {length}")]
    InvalidIndices {
        start: isize,
        end: isize,
        length: usize,
    },

    /// Rotation angle is not a multiple of 90 degrees.
    #[error("invalid angle {degrees}: must be a multiple of 90")]
    InvalidAngle { degrees: i32 },

    /// Attempt to combine factors that do not touch.
    #[error("disjoint factors: first ends at {first_end}, second starts at {second_start}")]
    DisjointFactors {
        first_end: usize,
        second_start: usize,
    },
}

impl WordError {
    /// Stable index of the error kind, used to address rejection counters.
    pub fn kind_index(&self) -> usize {
        match self {
            WordError::InvalidWord { .. } => 0,
            WordError::InvalidLetter { .. } => 1,
            WordError::InvalidIndex { .. } => 2,
            WordError::InvalidIndices { .. } => 3,
            WordError::InvalidAngle { .. } => 4,
            WordError::DisjointFactors { .. } => 5,
        }
    }

    /// Snake-case name of the error kind, e.g. `invalid_angle`.
    pub fn kind_name(&self) -> &'static str {
        self.into()
    }
}

/// Names of the error kinds, indexed by [`WordError::kind_index`].
pub const KIND_NAMES: [&str; 6] = [
    "invalid_word",
    "invalid_letter",
    "invalid_index",
    "invalid_indices",
    "invalid_angle",
    "disjoint_factors",
];

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WordError>;
