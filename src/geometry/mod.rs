// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Words over the directional alphabet.
//!
//! This module contains the typed building blocks of the analysis:
//! - Letter: one of the four unit moves `u`, `d`, `l`, `r`
//! - Rotation: quarter-turn group element acting on letters
//! - Axis: mirror axis for reflections
//! - Word: validated boundary word with linear and circular indexing
//! - Span / Factor: contiguous (possibly wrapping) pieces of a word

pub mod constants;
pub mod factor;
pub mod letter;
pub mod word;

// Re-export for convenience
pub use constants::*;
pub use factor::{Factor, Span};
pub use letter::{Axis, Letter, Rotation};
pub use word::{shift, Indexing, Word};
