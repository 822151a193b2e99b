// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Boundary words.
//!
//! A `Word` is an immutable sequence of at least four directional letters.
//! It can be read linearly (fixed first and last letter) or circularly (the
//! closed boundary it traces has no distinguished start, so indices wrap
//! modulo the length). The reading is chosen per call with [`Indexing`].
//!
//! All transformations return new words; none mutates the receiver.
//!
//! # Examples
//!
//! ```
//! use quarter_turn::geometry::{Indexing, Word};
//!
//! let word: Word = "uldr".parse().unwrap();
//! assert_eq!(word.reverse().to_string(), "rdlu");
//! assert_eq!(word.backtrack().to_string(), "lurd");
//! assert_eq!(word.rotate(90).unwrap().to_string(), "ldru");
//! assert_eq!(word.shift(1).to_string(), "ruld");
//! assert_eq!(word.letter(5, Indexing::Circular).unwrap().to_char(), 'l');
//! ```

use crate::error::{Result, WordError};
use crate::geometry::constants::MIN_WORD_LENGTH;
use crate::geometry::{Axis, Factor, Letter, Rotation};
use crate::symmetry::drome;
use std::fmt;
use std::str::FromStr;

/// How index arithmetic treats the ends of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Indexing {
    /// Indices in `0..n`; negative indices count from the end.
    #[default]
    Linear,
    /// Indices wrap modulo `n`.
    Circular,
}

/// A validated boundary word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Parse and validate a word.
    ///
    /// Letters are case-insensitive and stored lowercase. Fails with
    /// `InvalidWord` when shorter than four letters and `InvalidLetter` on the
    /// first letter outside `{u, d, l, r}`.
    pub fn new(text: &str) -> Result<Self> {
        let length = text.chars().count();
        if length < MIN_WORD_LENGTH {
            return Err(WordError::InvalidWord { length });
        }
        let letters = text
            .chars()
            .map(Letter::from_char)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { letters })
    }

    /// Build a word from letters, checking only the length.
    pub fn from_letters(letters: Vec<Letter>) -> Result<Self> {
        if letters.len() < MIN_WORD_LENGTH {
            return Err(WordError::InvalidWord {
                length: letters.len(),
            });
        }
        Ok(Self { letters })
    }

    /// Number of letters.
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a validated word; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters as a slice.
    #[inline]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Letter at `index`.
    ///
    /// Linear indexing accepts `-n..n` (negative counts from the end) and
    /// fails with `InvalidIndex` otherwise. Circular indexing accepts any
    /// integer.
    pub fn letter(&self, index: isize, indexing: Indexing) -> Result<Letter> {
        let n = self.len() as isize;
        let position = match indexing {
            Indexing::Circular => index.rem_euclid(n),
            Indexing::Linear => {
                let position = if index < 0 { n + index } else { index };
                if position < 0 || position >= n {
                    return Err(WordError::InvalidIndex {
                        index,
                        length: self.len(),
                    });
                }
                position
            }
        };
        Ok(self.letters[position as usize])
    }

    /// Letter at a circular position (wraps modulo `n`).
    #[inline]
    pub fn at(&self, position: usize) -> Letter {
        self.letters[position % self.len()]
    }

    /// Turn every letter by `degrees` (a multiple of 90).
    pub fn rotate(&self, degrees: i32) -> Result<Word> {
        Ok(self.rotated(Rotation::from_degrees(degrees)?))
    }

    /// Turn every letter by a rotation.
    pub fn rotated(&self, rotation: Rotation) -> Word {
        self.map(|letter| letter.rotate(rotation))
    }

    /// Replace every letter by its opposite.
    pub fn complement(&self) -> Word {
        self.map(Letter::complement)
    }

    /// Mirror every letter across `axis`.
    pub fn reflect(&self, axis: Axis) -> Word {
        self.map(|letter| letter.mirror(axis))
    }

    /// Letters in reverse order.
    pub fn reverse(&self) -> Word {
        Word {
            letters: self.letters.iter().rev().copied().collect(),
        }
    }

    /// The same path walked backwards: reverse, then complement.
    pub fn backtrack(&self) -> Word {
        Word {
            letters: self.letters.iter().rev().map(|l| l.complement()).collect(),
        }
    }

    /// Rotate the sequence (not the letters) `k` places to the right.
    ///
    /// `shift(-i)` is the word as seen starting from position `i`.
    pub fn shift(&self, k: isize) -> Word {
        Word {
            letters: shift(&self.letters, k),
        }
    }

    /// Linear factor `[i, j]`, both ends inclusive.
    pub fn factor(&self, i: isize, j: isize) -> Result<Factor> {
        Factor::new(self, i, j)
    }

    /// Circular factor of `length` letters starting at `start`.
    pub fn circular_factor(&self, start: usize, length: usize) -> Result<Factor> {
        Factor::circular(self, start, length)
    }

    /// The word written twice, used to turn circular questions into linear ones.
    pub fn doubled(&self) -> Vec<Letter> {
        let mut doubled = Vec::with_capacity(2 * self.len());
        doubled.extend_from_slice(&self.letters);
        doubled.extend_from_slice(&self.letters);
        doubled
    }

    pub fn is_prefix(&self, factor: &[Letter]) -> bool {
        self.letters.starts_with(factor)
    }

    pub fn is_suffix(&self, factor: &[Letter]) -> bool {
        self.letters.ends_with(factor)
    }

    /// Prefix or suffix.
    pub fn is_affix(&self, factor: &[Letter]) -> bool {
        self.is_prefix(factor) || self.is_suffix(factor)
    }

    /// Neither prefix nor suffix.
    pub fn is_middle(&self, factor: &[Letter]) -> bool {
        !self.is_affix(factor)
    }

    /// Middle letter (odd length) or middle two letters (even length).
    pub fn center(&self) -> Factor {
        let mid = self.len() / 2;
        let (start, end) = if self.len() % 2 == 0 {
            (mid - 1, mid)
        } else {
            (mid, mid)
        };
        Factor::from_bounds(self, start, end - start + 1)
    }

    /// Whether the word is `period` repeated a whole number of times.
    pub fn is_period(&self, period: &[Letter]) -> bool {
        !period.is_empty()
            && self.len() % period.len() == 0
            && self
                .letters
                .chunks(period.len())
                .all(|chunk| chunk == period)
    }

    /// Whether some proper prefix is a period of the word.
    pub fn is_composite(&self) -> bool {
        (1..=self.len() / 2).any(|p| self.is_period(&self.letters[..p]))
    }

    pub fn is_primitive(&self) -> bool {
        !self.is_composite()
    }

    /// Lattice points visited when walking the word from the origin.
    ///
    /// The result has `n + 1` points; the last equals the first iff the path closes.
    pub fn vertices(&self) -> Vec<(i32, i32)> {
        let mut position = (0, 0);
        let mut vertices = Vec::with_capacity(self.len() + 1);
        vertices.push(position);
        for letter in &self.letters {
            let (dx, dy) = letter.vector();
            position = (position.0 + dx, position.1 + dy);
            vertices.push(position);
        }
        vertices
    }

    /// Whether the path returns to its starting point.
    pub fn is_closed(&self) -> bool {
        let (x, y) = self
            .letters
            .iter()
            .map(|l| l.vector())
            .fold((0, 0), |(x, y), (dx, dy)| (x + dx, y + dy));
        x == 0 && y == 0
    }

    /// Linear palindrome test on the whole word.
    pub fn is_palindrome(&self) -> bool {
        drome::is_palindrome(&self.letters)
    }

    /// Linear θ-drome test on the whole word; `degrees` must be a multiple of 90.
    pub fn is_theta_drome(&self, degrees: i32) -> Result<bool> {
        drome::is_theta_drome_degrees(&self.letters, degrees)
    }

    fn map(&self, f: impl Fn(Letter) -> Letter) -> Word {
        Word {
            letters: self.letters.iter().map(|&l| f(l)).collect(),
        }
    }
}

/// Cyclically rotate a sequence `k` places to the right.
///
/// Total for every `k`; an empty input comes back empty.
pub fn shift<T: Clone>(items: &[T], k: isize) -> Vec<T> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }
    let k = k.rem_euclid(n as isize) as usize;
    let mut shifted = Vec::with_capacity(n);
    shifted.extend_from_slice(&items[n - k..]);
    shifted.extend_from_slice(&items[..n - k]);
    shifted
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self> {
        Word::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
