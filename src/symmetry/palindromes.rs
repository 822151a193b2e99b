// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Palindromic factors of a circular word.
//!
//! A palindrome of a circular word may run past the last letter back to the
//! first. To find those in linear time the word is doubled (`WW`, length
//! `2n`) and Manacher's algorithm computes, for every centre of `WW`, the
//! radius of the longest palindrome around it.
//!
//! Every circular centre (n letter centres, n gap centres) is then read at
//! one copy of it in `WW` that leaves at least `n / 2` letters of room on
//! both sides. That is enough room for any palindrome of length `<= n`, so
//! the radius seen there is exactly the circular radius, capped at `n`.
//! Longer palindromes only exist in `WW` because of the doubling and are cut
//! back to the longest length `<= n` with the same parity.
//!
//! The result lists, for each centre, the maximal palindrome, and expands
//! each one into its nested palindromes (trim one letter from each end) so
//! that every palindromic factor of the circular word is reported exactly
//! once.
//!
//! # Examples
//!
//! ```
//! use quarter_turn::symmetry::CircularPalindromes;
//!
//! let text: Vec<char> = "abba".chars().collect();
//! let palindromes = CircularPalindromes::find(&text);
//! assert!(palindromes.contains(0, 4)); // "abba"
//! assert!(palindromes.contains(1, 2)); // "bb"
//! assert!(palindromes.contains(3, 2)); // "aa", wrapping past the end
//! assert!(!palindromes.contains(0, 2)); // "ab"
//! ```

use crate::geometry::Span;
use std::collections::BTreeSet;
use tracing::debug;

/// All palindromic factors of a circular sequence.
#[derive(Debug, Clone)]
pub struct CircularPalindromes {
    base_length: usize,
    /// Longest palindrome around each centre.
    maximal: Vec<Span>,
    /// Every palindromic factor, ordered by start then length.
    spans: Vec<Span>,
    /// `starting_at[i]`: lengths of palindromes starting at `i`, ascending.
    starting_at: Vec<Vec<usize>>,
    /// `ending_at[j]`: lengths of palindromes ending at `j`, ascending.
    ending_at: Vec<Vec<usize>>,
}

impl CircularPalindromes {
    /// Find every palindromic factor of the circular sequence `items`.
    pub fn find<T: PartialEq>(items: &[T]) -> Self {
        let n = items.len();
        if n == 0 {
            return Self {
                base_length: 0,
                maximal: Vec::new(),
                spans: Vec::new(),
                starting_at: Vec::new(),
                ending_at: Vec::new(),
            };
        }

        let doubled: Vec<&T> = items.iter().chain(items.iter()).collect();
        let (odd, even) = manacher(&doubled);

        let half = n / 2;
        let odd_cap = if n % 2 == 1 { n } else { n - 1 };
        let even_cap = n - n % 2;

        let mut maximal = Vec::with_capacity(2 * n);
        for p in 0..n {
            // Copy of centre p with room for n / 2 letters on each side
            let i = (p + n - half) % n + half;

            let length = (2 * odd[i] - 1).min(odd_cap);
            let start = i - (length - 1) / 2;
            maximal.push(Span::wrapping(start, length, n));

            // Gap centre between letters p - 1 and p
            let length = (2 * even[i]).min(even_cap);
            if length > 0 {
                let start = i - length / 2;
                maximal.push(Span::wrapping(start, length, n));
            }
        }

        // Each span has a unique centre, so nesting never repeats a factor;
        // the set also guards the doubling against repeated observations.
        let mut seen = BTreeSet::new();
        for span in &maximal {
            let mut length = span.length();
            let mut start = span.start();
            while length > 0 {
                seen.insert((start, length));
                start = (start + 1) % n;
                length = length.saturating_sub(2);
            }
        }

        let mut starting_at = vec![Vec::new(); n];
        let mut ending_at = vec![Vec::new(); n];
        let spans: Vec<Span> = seen
            .into_iter()
            .map(|(start, length)| Span::wrapping(start, length, n))
            .collect();
        for span in &spans {
            starting_at[span.start()].push(span.length());
            ending_at[span.end()].push(span.length());
        }
        for lengths in starting_at.iter_mut().chain(ending_at.iter_mut()) {
            lengths.sort_unstable();
        }

        debug!(
            n,
            maximal = maximal.len(),
            total = spans.len(),
            "circular palindromes found"
        );

        Self {
            base_length: n,
            maximal,
            spans,
            starting_at,
            ending_at,
        }
    }

    /// Length of the circular sequence analysed.
    pub fn base_length(&self) -> usize {
        self.base_length
    }

    /// The longest palindrome around each centre (letter and gap centres).
    pub fn maximal(&self) -> &[Span] {
        &self.maximal
    }

    /// Every palindromic factor, ordered by start then length.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of palindromic factors.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Lengths of palindromes starting at `start`, ascending.
    pub fn starting_at(&self, start: usize) -> &[usize] {
        &self.starting_at[start]
    }

    /// Lengths of palindromes ending at `end`, ascending.
    pub fn ending_at(&self, end: usize) -> &[usize] {
        &self.ending_at[end]
    }

    /// Whether the factor of `length` letters at `start` is a palindrome.
    ///
    /// The empty factor always is.
    pub fn contains(&self, start: usize, length: usize) -> bool {
        length == 0
            || (start < self.base_length
                && self.starting_at[start].binary_search(&length).is_ok())
    }

    /// Palindromes of at least `min_length` letters.
    pub fn long(&self, min_length: usize) -> impl Iterator<Item = Span> + '_ {
        self.spans
            .iter()
            .copied()
            .filter(move |span| span.length() >= min_length)
    }
}

/// Manacher's algorithm.
///
/// Returns `(odd, even)` where `odd[i]` is the radius of the longest
/// odd-length palindrome centred on `i` (length `2 * odd[i] - 1`) and
/// `even[i]` the half-length of the longest even-length palindrome centred
/// between `i - 1` and `i` (length `2 * even[i]`).
fn manacher<T: PartialEq>(s: &[T]) -> (Vec<usize>, Vec<usize>) {
    let m = s.len();

    let mut odd = vec![0usize; m];
    let (mut left, mut right) = (0usize, 0usize); // current rightmost palindrome [left, right)
    for i in 0..m {
        let mut k = if i < right {
            odd[left + right - 1 - i].min(right - i)
        } else {
            1
        };
        while i >= k && i + k < m && s[i - k] == s[i + k] {
            k += 1;
        }
        odd[i] = k;
        if i + k > right {
            left = i + 1 - k;
            right = i + k;
        }
    }

    let mut even = vec![0usize; m];
    let (mut left, mut right) = (0usize, 0usize);
    for i in 0..m {
        let mut k = if i < right {
            even[left + right - i].min(right - i)
        } else {
            0
        };
        while i > k && i + k < m && s[i - k - 1] == s[i + k] {
            k += 1;
        }
        even[i] = k;
        if i + k > right {
            left = i - k;
            right = i + k;
        }
    }

    (odd, even)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn text_of(items: &[char], span: &Span) -> String {
        span.extract(items).into_iter().collect()
    }

    /// Quadratic reference: every (start, length) tested directly.
    fn brute_force(items: &[char]) -> BTreeSet<(usize, usize)> {
        let n = items.len();
        let mut found = BTreeSet::new();
        for start in 0..n {
            for length in 1..=n {
                let factor: Vec<char> = (0..length).map(|k| items[(start + k) % n]).collect();
                if factor.iter().eq(factor.iter().rev()) {
                    found.insert((start, length));
                }
            }
        }
        found
    }

    #[test]
    fn test_manacher_linear() {
        let s = chars("abaaba");
        let (odd, even) = manacher(&s);
        assert_eq!(odd, vec![1, 2, 1, 1, 2, 1]);
        assert_eq!(even, vec![0, 0, 0, 3, 0, 0]);
    }

    #[test]
    fn test_abba() {
        let items = chars("abba");
        let palindromes = CircularPalindromes::find(&items);
        let texts: Vec<String> = palindromes
            .spans()
            .iter()
            .map(|span| text_of(&items, span))
            .collect();
        assert!(texts.contains(&"abba".to_string()));
        assert!(texts.contains(&"bb".to_string()));
        assert!(palindromes.spans().iter().all(|span| span.length() <= 4));
    }

    #[test]
    fn test_wrapping_palindrome() {
        let items = chars("rruu");
        let palindromes = CircularPalindromes::find(&items);
        // "urru" starts at 3 and wraps
        assert!(palindromes.contains(3, 4));
        assert!(palindromes.contains(1, 4)); // "ruur"
        assert!(!palindromes.contains(3, 2)); // "ur"
        assert_eq!(palindromes.starting_at(3), &[1, 4]);
        assert_eq!(palindromes.ending_at(2), &[1, 4]);
    }

    #[test]
    fn test_matches_brute_force() {
        for text in ["abba", "rruu", "uuuu", "ulurdr", "uurrddll", "abcab", "aaaaaaa", "ruurruur"] {
            let items = chars(text);
            let palindromes = CircularPalindromes::find(&items);
            let found: BTreeSet<(usize, usize)> = palindromes
                .spans()
                .iter()
                .map(|span| (span.start(), span.length()))
                .collect();
            assert_eq!(found, brute_force(&items), "mismatch for {}", text);
            assert_eq!(found.len(), palindromes.len(), "duplicates for {}", text);
        }
    }

    #[test]
    fn test_constant_word_caps_at_length() {
        let items = chars("uuuuu");
        let palindromes = CircularPalindromes::find(&items);
        assert!(palindromes.maximal().iter().all(|span| span.length() <= 5));
        for start in 0..5 {
            assert_eq!(palindromes.starting_at(start), &[1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_ending_at_mirrors_starting_at() {
        let items = chars("ruurruur");
        let palindromes = CircularPalindromes::find(&items);
        for span in palindromes.spans() {
            assert!(palindromes.ending_at(span.end()).contains(&span.length()));
        }
        let long: Vec<String> = palindromes.long(6).map(|s| text_of(&items, &s)).collect();
        assert!(long.contains(&"uurruu".to_string()));
        assert!(long.contains(&"ruurruur".to_string()));
    }

    #[test]
    fn test_empty_input() {
        let palindromes = CircularPalindromes::find::<char>(&[]);
        assert!(palindromes.is_empty());
        assert!(palindromes.contains(0, 0));
    }
}
