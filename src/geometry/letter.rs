// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Directional letters and the quarter-turn group acting on them.
//!
//! A boundary word is spelled in four letters, one per axis direction:
//! `u` (0,1), `d` (0,-1), `l` (-1,0) and `r` (1,0). Rotations are counted
//! counter-clockwise in multiples of 90 degrees.
//!
//! # Examples
//!
//! ```
//! use quarter_turn::geometry::{Letter, Rotation};
//!
//! let up = Letter::from_char('u').unwrap();
//! assert_eq!(up.rotate(Rotation::QUARTER), Letter::Left);
//! assert_eq!(up.complement(), Letter::Down);
//! assert_eq!(up.vector(), (0, 1));
//! ```

use crate::error::{Result, WordError};
use crate::geometry::constants::{NLETTERS, QUARTER_TURN, ROTATION_TABLE, UNIT_VECTORS};
use std::fmt;

/// One unit move on the square lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    Up,
    Left,
    Down,
    Right,
}

impl Letter {
    /// Parse a letter, ignoring case.
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            'u' => Ok(Letter::Up),
            'l' => Ok(Letter::Left),
            'd' => Ok(Letter::Down),
            'r' => Ok(Letter::Right),
            _ => Err(WordError::InvalidLetter { letter: c }),
        }
    }

    /// Lowercase spelling of the letter.
    pub fn to_char(self) -> char {
        match self {
            Letter::Up => 'u',
            Letter::Left => 'l',
            Letter::Down => 'd',
            Letter::Right => 'r',
        }
    }

    /// Position in counter-clockwise order starting from up (for table lookups).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit displacement vector `(dx, dy)`.
    #[inline]
    pub fn vector(self) -> (i32, i32) {
        UNIT_VECTORS[self.index()]
    }

    /// Turn the letter counter-clockwise.
    #[inline]
    pub fn rotate(self, rotation: Rotation) -> Self {
        ROTATION_TABLE[self.index()][rotation.quarter_turns()]
    }

    /// Opposite direction (rotation by 180 degrees).
    #[inline]
    pub fn complement(self) -> Self {
        self.rotate(Rotation::HALF)
    }

    /// Mirror the letter across an axis.
    pub fn mirror(self, axis: Axis) -> Self {
        match (axis, self) {
            (Axis::Vertical, Letter::Left) => Letter::Right,
            (Axis::Vertical, Letter::Right) => Letter::Left,
            (Axis::Horizontal, Letter::Up) => Letter::Down,
            (Axis::Horizontal, Letter::Down) => Letter::Up,
            (_, letter) => letter,
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = WordError;

    fn try_from(c: char) -> Result<Self> {
        Letter::from_char(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Mirror axis for reflections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Mirror across the horizontal axis: swaps `u` and `d`.
    Horizontal,
    /// Mirror across the vertical axis: swaps `l` and `r`.
    Vertical,
}

/// An element of Z4: a counter-clockwise rotation by a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rotation(u8);

impl Rotation {
    pub const IDENTITY: Rotation = Rotation(0);
    pub const QUARTER: Rotation = Rotation(1);
    pub const HALF: Rotation = Rotation(2);
    pub const THREE_QUARTERS: Rotation = Rotation(3);

    /// Build a rotation from an angle in degrees.
    ///
    /// Any multiple of 90 is accepted, including negative angles and angles
    /// past a full turn; everything else is `InvalidAngle`.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        if degrees % QUARTER_TURN != 0 {
            return Err(WordError::InvalidAngle { degrees });
        }
        let turns = (degrees / QUARTER_TURN).rem_euclid(NLETTERS as i32);
        Ok(Rotation(turns as u8))
    }

    /// Angle in degrees, normalized to `0..360`.
    pub fn degrees(self) -> i32 {
        self.0 as i32 * QUARTER_TURN
    }

    /// Number of quarter turns, in `0..4`.
    #[inline]
    pub fn quarter_turns(self) -> usize {
        self.0 as usize
    }

    /// Apply `self` then `other`.
    pub fn then(self, other: Rotation) -> Rotation {
        Rotation((self.0 + other.0) % NLETTERS as u8)
    }

    /// The rotation undoing `self`.
    pub fn inverse(self) -> Rotation {
        Rotation((NLETTERS as u8 - self.0) % NLETTERS as u8)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::constants::ALPHABET;

    fn rotate_char(c: char, degrees: i32) -> Result<char> {
        let rotation = Rotation::from_degrees(degrees)?;
        Ok(Letter::from_char(c)?.rotate(rotation).to_char())
    }

    #[test]
    fn test_from_char_is_case_insensitive() {
        assert_eq!(Letter::from_char('U').unwrap(), Letter::Up);
        assert_eq!(Letter::from_char('r').unwrap(), Letter::Right);
    }

    #[test]
    fn test_from_char_rejects_foreign_letters() {
        assert_eq!(
            Letter::from_char('x'),
            Err(WordError::InvalidLetter { letter: 'x' })
        );
        assert!(Letter::try_from('n').is_err());
    }

    #[test]
    fn test_rotate_every_letter() {
        let expected = [
            ('u', ['u', 'l', 'd', 'r']),
            ('l', ['l', 'd', 'r', 'u']),
            ('d', ['d', 'r', 'u', 'l']),
            ('r', ['r', 'u', 'l', 'd']),
        ];
        for (letter, turns) in expected {
            for (k, &target) in turns.iter().enumerate() {
                assert_eq!(rotate_char(letter, k as i32 * 90).unwrap(), target);
            }
        }
    }

    #[test]
    fn test_rotate_rejects_non_quarter_angles() {
        assert_eq!(
            rotate_char('u', 45),
            Err(WordError::InvalidAngle { degrees: 45 })
        );
        assert_eq!(
            Rotation::from_degrees(100),
            Err(WordError::InvalidAngle { degrees: 100 })
        );
    }

    #[test]
    fn test_angles_normalize_modulo_full_turn() {
        assert_eq!(Rotation::from_degrees(450).unwrap(), Rotation::QUARTER);
        assert_eq!(Rotation::from_degrees(-90).unwrap(), Rotation::THREE_QUARTERS);
        assert_eq!(Rotation::from_degrees(360).unwrap(), Rotation::IDENTITY);
        assert_eq!(Rotation::from_degrees(-270).unwrap().degrees(), 90);
    }

    #[test]
    fn test_complement() {
        assert_eq!(Letter::Up.complement(), Letter::Down);
        assert_eq!(Letter::Left.complement(), Letter::Right);
        assert_eq!(Letter::Down.complement(), Letter::Up);
        assert_eq!(Letter::Right.complement(), Letter::Left);
    }

    #[test]
    fn test_group_laws() {
        for a in 0..4 {
            let ra = Rotation(a);
            assert_eq!(ra.then(ra.inverse()), Rotation::IDENTITY);
            for b in 0..4 {
                let rb = Rotation(b);
                for letter in ALPHABET {
                    assert_eq!(letter.rotate(ra).rotate(rb), letter.rotate(ra.then(rb)));
                }
            }
        }
    }

    #[test]
    fn test_mirror() {
        assert_eq!(Letter::Left.mirror(Axis::Vertical), Letter::Right);
        assert_eq!(Letter::Up.mirror(Axis::Vertical), Letter::Up);
        assert_eq!(Letter::Up.mirror(Axis::Horizontal), Letter::Down);
        for letter in ALPHABET {
            assert_eq!(letter.mirror(Axis::Horizontal).mirror(Axis::Horizontal), letter);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Letter::Left), "l");
        assert_eq!(format!("{}", Rotation::HALF), "180°");
    }
}
