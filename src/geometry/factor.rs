// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Factors: contiguous pieces of a word.
//!
//! A [`Span`] is the index part of a factor: a start position, a length and
//! the length `n` of the word it lives in. Spans are circular by nature; a
//! span whose `start + length` exceeds `n` wraps past the last letter. An
//! empty span sits at a position `p` and its `end` is `p - 1 (mod n)`, so the
//! adjacency rule `end + 1 == start` needs no special case for it.
//!
//! A [`Factor`] is a span together with the letters it covers.
//!
//! Indices are 0-based and both ends are inclusive throughout the crate.
//!
//! # Examples
//!
//! ```
//! use quarter_turn::geometry::{Indexing, Word};
//!
//! let word: Word = "uurddl".parse().unwrap();
//! let head = word.factor(0, 2).unwrap();
//! let tail = word.factor(3, 5).unwrap();
//! let whole = head.combine(&tail, Indexing::Linear).unwrap();
//! assert_eq!(whole.to_string(), "uurddl");
//!
//! let wrapping = word.circular_factor(4, 4).unwrap();
//! assert_eq!(wrapping.to_string(), "dluu");
//! assert_eq!(wrapping.end(), 1);
//! ```

use crate::error::{Result, WordError};
use crate::geometry::{Indexing, Letter, Rotation, Word};
use crate::symmetry::drome;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Index range of a factor over a circular word of length `base_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    start: usize,
    length: usize,
    base_length: usize,
}

impl Span {
    /// Span of `length` letters starting at `start` in a word of `base_length` letters.
    pub fn new(start: usize, length: usize, base_length: usize) -> Result<Self> {
        if start >= base_length || length > base_length {
            return Err(WordError::InvalidIndices {
                start: start as isize,
                end: start as isize + length as isize - 1,
                length: base_length,
            });
        }
        Ok(Self {
            start,
            length,
            base_length,
        })
    }

    /// Build a span the caller already knows to be in range.
    ///
    /// `start` is reduced modulo `base_length`.
    pub(crate) fn wrapping(start: usize, length: usize, base_length: usize) -> Self {
        debug_assert!(base_length > 0 && length <= base_length);
        Self {
            start: start % base_length,
            length,
            base_length,
        }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn base_length(&self) -> usize {
        self.base_length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Last covered position (for an empty span, the position before `start`).
    #[inline]
    pub fn end(&self) -> usize {
        (self.start + self.length + self.base_length - 1) % self.base_length
    }

    /// First position after the span.
    #[inline]
    pub fn next(&self) -> usize {
        (self.start + self.length) % self.base_length
    }

    /// Whether the span runs past the last letter back to position 0.
    #[inline]
    pub fn wraps(&self) -> bool {
        self.start + self.length > self.base_length
    }

    /// Positions covered, in order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.length).map(move |k| (self.start + k) % self.base_length)
    }

    /// Copy the covered items out of a sequence of length `base_length`.
    pub fn extract<T: Clone>(&self, items: &[T]) -> Vec<T> {
        debug_assert_eq!(items.len(), self.base_length);
        self.positions().map(|p| items[p].clone()).collect()
    }

    /// Whether `next` begins right after `self` ends.
    ///
    /// Linear adjacency additionally forbids either span from wrapping.
    pub fn is_adjacent_to(&self, next: &Span, indexing: Indexing) -> bool {
        if self.base_length != next.base_length {
            return false;
        }
        match indexing {
            Indexing::Circular => self.next() == next.start,
            Indexing::Linear => {
                !self.wraps() && !next.wraps() && self.start + self.length == next.start
            }
        }
    }

    /// Span covering `self` followed by `next`.
    ///
    /// Fails with `DisjointFactors` when they do not touch and with
    /// `InvalidIndices` when together they would cover more than the word.
    pub fn combine(&self, next: &Span, indexing: Indexing) -> Result<Span> {
        if !self.is_adjacent_to(next, indexing) {
            return Err(WordError::DisjointFactors {
                first_end: self.end(),
                second_start: next.start,
            });
        }
        let length = self.length + next.length;
        if length > self.base_length {
            return Err(WordError::InvalidIndices {
                start: self.start as isize,
                end: self.start as isize + length as isize - 1,
                length: self.base_length,
            });
        }
        Ok(Span::wrapping(self.start, length, self.base_length))
    }
}

/// A contiguous piece of a word: where it is and what it reads.
#[derive(Debug, Clone)]
pub struct Factor {
    span: Span,
    value: Vec<Letter>,
}

impl Factor {
    /// Linear factor `[start, end]` of `word`, both inclusive.
    ///
    /// Fails with `InvalidIndices` when `start < 0`, `end < start` or `end >= n`;
    /// bounds are never clamped.
    pub fn new(word: &Word, start: isize, end: isize) -> Result<Self> {
        let n = word.len();
        if start < 0 || end < start || end >= n as isize {
            return Err(WordError::InvalidIndices { start, end, length: n });
        }
        let (start, end) = (start as usize, end as usize);
        Ok(Self {
            span: Span::wrapping(start, end - start + 1, n),
            value: word.letters()[start..=end].to_vec(),
        })
    }

    /// Circular factor of `length` letters starting at `start` (may wrap).
    pub fn circular(word: &Word, start: usize, length: usize) -> Result<Self> {
        let span = Span::new(start, length, word.len())?;
        Ok(Self::from_span(word, span))
    }

    /// Empty factor positioned at `at`.
    pub fn empty(word: &Word, at: usize) -> Self {
        Self {
            span: Span::wrapping(at, 0, word.len()),
            value: Vec::new(),
        }
    }

    /// Materialize a span of `word`.
    pub fn from_span(word: &Word, span: Span) -> Self {
        debug_assert_eq!(span.base_length(), word.len());
        Self {
            value: span.extract(word.letters()),
            span,
        }
    }

    pub(crate) fn from_bounds(word: &Word, start: usize, length: usize) -> Self {
        Self::from_span(word, Span::wrapping(start, length, word.len()))
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.span.start()
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.span.end()
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.span.length()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// The letters covered.
    #[inline]
    pub fn value(&self) -> &[Letter] {
        &self.value
    }

    pub fn is_adjacent_to(&self, next: &Factor, indexing: Indexing) -> bool {
        self.span.is_adjacent_to(&next.span, indexing)
    }

    /// Factor covering `self` then `next`; see [`Span::combine`].
    pub fn combine(&self, next: &Factor, indexing: Indexing) -> Result<Factor> {
        let span = self.span.combine(&next.span, indexing)?;
        let mut value = Vec::with_capacity(span.length());
        value.extend_from_slice(&self.value);
        value.extend_from_slice(&next.value);
        Ok(Factor { span, value })
    }

    pub fn is_palindrome(&self) -> bool {
        drome::is_palindrome(&self.value)
    }

    pub fn is_theta_drome(&self, rotation: Rotation) -> bool {
        drome::is_theta_drome(&self.value, rotation)
    }
}

impl PartialEq for Factor {
    fn eq(&self, other: &Self) -> bool {
        self.start() == other.start() && self.end() == other.end() && self.value == other.value
    }
}

impl Eq for Factor {}

impl Hash for Factor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start().hash(state);
        self.end().hash(state);
        self.value.hash(state);
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.value {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl Serialize for Factor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Factor", 4)?;
        state.serialize_field("start", &self.start())?;
        state.serialize_field("end", &self.end())?;
        state.serialize_field("length", &self.length())?;
        state.serialize_field("value", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn test_new_linear() {
        let w = word("uurrdddlll");
        let factor = Factor::new(&w, 0, 3).unwrap();
        assert_eq!(factor.start(), 0);
        assert_eq!(factor.end(), 3);
        assert_eq!(factor.length(), 4);
        assert_eq!(factor.to_string(), "uurr");
    }

    #[test]
    fn test_new_rejects_bad_bounds() {
        let w = word("uurrdddlll");
        assert_eq!(
            Factor::new(&w, -1, 3),
            Err(WordError::InvalidIndices {
                start: -1,
                end: 3,
                length: 10
            })
        );
        assert!(Factor::new(&w, 3, 2).is_err());
        assert!(Factor::new(&w, 0, 10).is_err());
        assert!(Factor::new(&w, 9, 9).is_ok());
    }

    #[test]
    fn test_circular_factor_wraps() {
        let w = word("uurddl");
        let factor = Factor::circular(&w, 4, 4).unwrap();
        assert_eq!(factor.to_string(), "dluu");
        assert_eq!(factor.end(), 1);
        assert!(factor.span().wraps());
        assert!(Factor::circular(&w, 6, 1).is_err());
        assert!(Factor::circular(&w, 0, 7).is_err());
    }

    #[test]
    fn test_empty_factor_end_precedes_start() {
        let w = word("uurddl");
        let empty = Factor::empty(&w, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.end(), 5);
        assert!(empty.is_palindrome());
        assert!(empty.is_theta_drome(Rotation::QUARTER));
    }

    #[test]
    fn test_equality() {
        let w = word("uurrdddlll");
        assert_eq!(Factor::new(&w, 0, 3).unwrap(), Factor::new(&w, 0, 3).unwrap());
        assert_ne!(Factor::new(&w, 0, 3).unwrap(), Factor::new(&w, 4, 6).unwrap());
        // Same letters at a different place are a different factor
        let v = word("ulul");
        assert_ne!(Factor::new(&v, 0, 1).unwrap(), Factor::new(&v, 2, 3).unwrap());
    }

    #[test]
    fn test_combine_linear() {
        let w = word("uurrddl");
        let first = Factor::new(&w, 0, 3).unwrap();
        let second = Factor::new(&w, 4, 6).unwrap();
        let combined = first.combine(&second, Indexing::Linear).unwrap();
        assert_eq!(combined.to_string(), "uurrddl");
        assert_eq!((combined.start(), combined.end()), (0, 6));
    }

    #[test]
    fn test_combine_disjoint_fails() {
        let w = word("uurrddl");
        let first = Factor::new(&w, 0, 2).unwrap();
        let second = Factor::new(&w, 4, 6).unwrap();
        assert_eq!(
            first.combine(&second, Indexing::Linear),
            Err(WordError::DisjointFactors {
                first_end: 2,
                second_start: 4
            })
        );
    }

    #[test]
    fn test_combine_circular_across_origin() {
        let w = word("uurrddl");
        let tail = Factor::new(&w, 5, 6).unwrap();
        let head = Factor::new(&w, 0, 1).unwrap();
        assert!(tail.combine(&head, Indexing::Linear).is_err());
        let combined = tail.combine(&head, Indexing::Circular).unwrap();
        assert_eq!(combined.to_string(), "dluu");
        assert_eq!((combined.start(), combined.end()), (5, 1));
    }

    #[test]
    fn test_combine_with_empty() {
        let w = word("uurrddl");
        let first = Factor::new(&w, 0, 3).unwrap();
        let empty = Factor::empty(&w, 4);
        let combined = first.combine(&empty, Indexing::Circular).unwrap();
        assert_eq!(combined, first);
    }

    #[test]
    fn test_combine_overfull_fails() {
        let w = word("uurd");
        let first = Factor::circular(&w, 0, 3).unwrap();
        let second = Factor::circular(&w, 3, 2).unwrap();
        assert!(matches!(
            first.combine(&second, Indexing::Circular),
            Err(WordError::InvalidIndices { .. })
        ));
    }

    #[test]
    fn test_span_positions() {
        let span = Span::new(4, 4, 6).unwrap();
        assert_eq!(span.positions().collect::<Vec<_>>(), vec![4, 5, 0, 1]);
        assert_eq!(span.next(), 2);
    }

    #[test]
    fn test_serialize() {
        let w = word("uurddl");
        let factor = Factor::circular(&w, 4, 4).unwrap();
        let json = serde_json::to_string(&factor).unwrap();
        assert_eq!(json, r#"{"start":4,"end":1,"length":4,"value":"dluu"}"#);
    }
}
