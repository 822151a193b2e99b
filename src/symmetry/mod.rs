// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry of words under reversal combined with rotation.
//!
//! ## Module Structure
//!
//! - `drome`: the θ-drome and palindrome predicates
//! - `palindromes`: every palindromic factor of a circular word (Manacher on the doubled word)
//! - `theta_dromes`: every even θ-drome factor of a circular word, by start and by end

pub mod drome;
pub mod palindromes;
pub mod theta_dromes;

pub use drome::{is_palindrome, is_quarter_drome, is_theta_drome, is_theta_drome_degrees};
pub use palindromes::CircularPalindromes;
pub use theta_dromes::ThetaDromes;
