// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Quarter-turn factorization witnesses.

use crate::error::Result;
use crate::geometry::{Factor, Indexing, Span, Word};
use crate::search::min_long_length;
use crate::state::statistics::Statistics;
use crate::symmetry::is_quarter_drome;
use serde::Serialize;
use std::fmt;

/// A cyclic split `A · D1 · D2` of a word.
///
/// `D1` starts right after `A` and `D2` ends right before `A`; any arc may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Factorization {
    a: Factor,
    d1: Factor,
    d2: Factor,
}

impl Factorization {
    pub fn new(a: Factor, d1: Factor, d2: Factor) -> Self {
        Self { a, d1, d2 }
    }

    pub(crate) fn from_spans(word: &Word, [a, d1, d2]: [Span; 3]) -> Self {
        Self {
            a: Factor::from_span(word, a),
            d1: Factor::from_span(word, d1),
            d2: Factor::from_span(word, d2),
        }
    }

    /// The palindrome.
    pub fn a(&self) -> &Factor {
        &self.a
    }

    /// The 90-drome after `A`.
    pub fn d1(&self) -> &Factor {
        &self.d1
    }

    /// The 90-drome before `A`.
    pub fn d2(&self) -> &Factor {
        &self.d2
    }

    /// Length of the longest arc.
    pub fn longest(&self) -> usize {
        self.a.length().max(self.d1.length()).max(self.d2.length())
    }

    /// Identity of the split: where `A` starts and how long each arc is.
    pub(crate) fn key(&self) -> (usize, usize, usize, usize) {
        (
            self.a.start(),
            self.a.length(),
            self.d1.length(),
            self.d2.length(),
        )
    }

    /// `A`, `D1` and `D2` joined around the cycle.
    ///
    /// Fails with `DisjointFactors` on a gap or overlap between consecutive
    /// arcs and with `InvalidIndices` when they cover more than the word.
    pub fn concatenation(&self) -> Result<Factor> {
        self.a
            .combine(&self.d1, Indexing::Circular)?
            .combine(&self.d2, Indexing::Circular)
    }

    /// Re-check every condition of a quarter-turn factorization of `word`.
    ///
    /// The arcs must tile the cycle exactly once starting at `A`, `A` must be
    /// a palindrome, both `D` arcs even 90-dromes, and one arc long.
    pub fn verify(&self, word: &Word) -> Result<bool> {
        let whole = self.concatenation()?;
        let n = word.len();
        let tiles = whole.length() == n
            && self.d2.span().next() == self.a.start()
            && whole.value() == word.shift(-(self.a.start() as isize)).letters();
        Ok(tiles
            && self.a.is_palindrome()
            && is_quarter_drome(self.d1.value())
            && is_quarter_drome(self.d2.value())
            && self.longest() >= min_long_length(n))
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arc = |factor: &Factor| {
            if factor.is_empty() {
                "ε".to_string()
            } else {
                factor.to_string()
            }
        };
        write!(
            f,
            "A={} D1={} D2={} (A at {})",
            arc(&self.a),
            arc(&self.d1),
            arc(&self.d2),
            self.a.start()
        )
    }
}

/// Outcome of a factorization search.
#[derive(Debug, Clone, Serialize)]
pub struct FactorizationReport {
    found: bool,
    witnesses: Vec<Factorization>,
    #[serde(skip)]
    statistics: Statistics,
}

impl FactorizationReport {
    pub(crate) fn new(witnesses: Vec<Factorization>, statistics: Statistics) -> Self {
        Self {
            found: !witnesses.is_empty(),
            witnesses,
            statistics,
        }
    }

    pub fn found(&self) -> bool {
        self.found
    }

    /// Witnesses in discovery order.
    pub fn witnesses(&self) -> &[Factorization] {
        &self.witnesses
    }

    pub fn first(&self) -> Option<&Factorization> {
        self.witnesses.first()
    }

    /// Counters gathered while searching.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordError;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn split(w: &Word, start: usize, a: usize, d1: usize, d2: usize) -> Factorization {
        let n = w.len();
        Factorization::from_spans(
            w,
            [
                Span::wrapping(start, a, n),
                Span::wrapping(start + a, d1, n),
                Span::wrapping(start + a + d1, d2, n),
            ],
        )
    }

    #[test]
    fn test_whole_word_palindrome() {
        let w = word("uurruu");
        let witness = split(&w, 0, 6, 0, 0);
        assert!(witness.verify(&w).unwrap());
        assert_eq!(witness.to_string(), "A=uurruu D1=ε D2=ε (A at 0)");
    }

    #[test]
    fn test_three_arcs_wrapping() {
        // A = "ruur" at 6 (wraps), D1 = "ulur" at 2, D2 = "" at 6
        let w = word("urulurru");
        let witness = split(&w, 6, 4, 4, 0);
        assert_eq!(witness.a().to_string(), "ruur");
        assert_eq!(witness.d1().to_string(), "ulur");
        assert!(witness.verify(&w).unwrap());
    }

    #[test]
    fn test_rejects_arc_that_is_not_a_drome() {
        let w = word("uurruu");
        let witness = split(&w, 0, 2, 0, 4);
        assert!(!witness.verify(&w).unwrap());
    }

    #[test]
    fn test_rejects_gap() {
        let w = word("uurruu");
        let n = w.len();
        let witness = Factorization::new(
            Factor::from_span(&w, Span::wrapping(0, 2, n)),
            Factor::from_span(&w, Span::wrapping(3, 2, n)),
            Factor::from_span(&w, Span::wrapping(5, 1, n)),
        );
        assert_eq!(
            witness.verify(&w),
            Err(WordError::DisjointFactors {
                first_end: 1,
                second_start: 3
            })
        );
    }

    #[test]
    fn test_empty_palindrome() {
        let w = word("ulurulur");
        let witness = split(&w, 0, 0, 4, 4);
        assert!(witness.verify(&w).unwrap());
    }

    #[test]
    fn test_serialize() {
        let w = word("uurruu");
        let report = FactorizationReport::new(vec![split(&w, 0, 6, 0, 0)], Statistics::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["found"], true);
        assert_eq!(json["witnesses"][0]["a"]["value"], "uurruu");
        assert_eq!(json["witnesses"][0]["d1"]["length"], 0);
        assert!(json.get("statistics").is_none());
    }
}
