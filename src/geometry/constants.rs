// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants for the directional alphabet.
//!
//! The alphabet is the four axis directions of the square lattice. The
//! rotation table is the action of the cyclic group Z4 on those letters,
//! laid out like a group multiplication table: row = letter, column = number
//! of counter-clockwise quarter turns.

use crate::geometry::Letter;

/// Number of letters in the alphabet.
pub const NLETTERS: usize = 4;

/// Shortest word accepted as a boundary word.
///
/// A closed lattice path needs at least four unit moves, so anything shorter
/// has no meaningful symmetry analysis.
pub const MIN_WORD_LENGTH: usize = 4;

/// Degrees in one quarter turn.
pub const QUARTER_TURN: i32 = 90;

/// Letters in counter-clockwise order, starting from up.
pub const ALPHABET: [Letter; NLETTERS] = [Letter::Up, Letter::Left, Letter::Down, Letter::Right];

/// Unit displacement of each letter, indexed by `Letter::index()`.
pub const UNIT_VECTORS: [(i32, i32); NLETTERS] = [(0, 1), (-1, 0), (0, -1), (1, 0)];

/// Rotation table: `ROTATION_TABLE[letter][k]` is `letter` turned by `k * 90` degrees.
///
/// | letter | 0 | 90 | 180 | 270 |
/// |--------|---|----|-----|-----|
/// | u      | u | l  | d   | r   |
/// | l      | l | d  | r   | u   |
/// | d      | d | r  | u   | l   |
/// | r      | r | u  | l   | d   |
pub const ROTATION_TABLE: [[Letter; NLETTERS]; NLETTERS] = [
    [Letter::Up, Letter::Left, Letter::Down, Letter::Right],
    [Letter::Left, Letter::Down, Letter::Right, Letter::Up],
    [Letter::Down, Letter::Right, Letter::Up, Letter::Left],
    [Letter::Right, Letter::Up, Letter::Left, Letter::Down],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_table_first_column_is_identity() {
        for letter in ALPHABET {
            assert_eq!(ROTATION_TABLE[letter.index()][0], letter);
        }
    }

    #[test]
    fn test_rotation_table_matches_vector_rotation() {
        // (x, y) turned a quarter counter-clockwise is (-y, x)
        for letter in ALPHABET {
            let (x, y) = UNIT_VECTORS[letter.index()];
            let turned = ROTATION_TABLE[letter.index()][1];
            assert_eq!(UNIT_VECTORS[turned.index()], (-y, x));
        }
    }

    #[test]
    fn test_rows_are_permutations() {
        for row in ROTATION_TABLE.iter() {
            for letter in ALPHABET {
                assert_eq!(row.iter().filter(|&&l| l == letter).count(), 1);
            }
        }
    }
}
