// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! θ-drome and palindrome predicates.
//!
//! A word is a θ-drome when its second half is its first half reversed and
//! turned by θ + 180 degrees. With `h = n / 2` the halves are `w[0..h)` and
//! `w[n-h..n)`; for odd `n` the middle letter belongs to neither half.
//!
//! For θ = 180 the extra turn is a full turn, so a 180-drome is an ordinary
//! palindrome. For θ = 90 the extra turn is 270 degrees: `ulur` is a
//! 90-drome because `ul` reversed is `lu`, and `lu` turned by 270 is `ur`.

use crate::error::Result;
use crate::geometry::{Letter, Rotation};

/// Whether `letters` is a θ-drome for the given rotation.
///
/// The empty word (and any single letter) is trivially a θ-drome.
pub fn is_theta_drome(letters: &[Letter], theta: Rotation) -> bool {
    let n = letters.len();
    let half = n / 2;
    let turn = theta.then(Rotation::HALF);
    let first = &letters[..half];
    let second = &letters[n - half..];
    first
        .iter()
        .rev()
        .zip(second.iter())
        .all(|(&a, &b)| a.rotate(turn) == b)
}

/// Degree-based variant of [`is_theta_drome`]; fails with `InvalidAngle`
/// when `degrees` is not a multiple of 90.
pub fn is_theta_drome_degrees(letters: &[Letter], degrees: i32) -> Result<bool> {
    Ok(is_theta_drome(letters, Rotation::from_degrees(degrees)?))
}

/// Whether `letters` reads the same forwards and backwards.
#[inline]
pub fn is_palindrome(letters: &[Letter]) -> bool {
    is_theta_drome(letters, Rotation::HALF)
}

/// Whether `letters` is a 90-drome of even length, the only kind admitted
/// as a `D` arc of a quarter-turn factorization.
#[inline]
pub fn is_quarter_drome(letters: &[Letter]) -> bool {
    letters.len() % 2 == 0 && is_theta_drome(letters, Rotation::QUARTER)
}
