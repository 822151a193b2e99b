// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! θ-drome factors of a circular word.
//!
//! No linear-time algorithm for 90-drome factors is known to us, so this is
//! a direct enumeration: for every start position the word is shifted so
//! that position comes first, and every even-length prefix is tested with
//! [`is_theta_drome`]. The same is done with suffixes for the end-anchored
//! view. Each test costs O(length), so building both tables is O(n^3).
//! Callers analysing long words should bound `n` (see `SearchConfig`).
//!
//! Only even lengths are recorded: a θ-drome is defined by two equal
//! halves, and the odd-length reading (middle letter ignored) is not used
//! by the factorization search.

use crate::geometry::{shift, Letter, Rotation, Span};
use crate::symmetry::drome::is_theta_drome;
use tracing::debug;

/// Even-length θ-drome factors of a circular word, indexed by start and end.
#[derive(Debug, Clone)]
pub struct ThetaDromes {
    rotation: Rotation,
    base_length: usize,
    /// `starting_at[i]`: lengths of θ-dromes starting at `i`, ascending.
    starting_at: Vec<Vec<usize>>,
    /// `ending_at[j]`: lengths of θ-dromes ending at `j`, ascending.
    ending_at: Vec<Vec<usize>>,
}

impl ThetaDromes {
    /// Find every non-empty even-length θ-drome factor of the circular word.
    pub fn find(letters: &[Letter], rotation: Rotation) -> Self {
        let n = letters.len();
        let mut starting_at = vec![Vec::new(); n];
        let mut ending_at = vec![Vec::new(); n];

        for i in 0..n {
            // The word read from position i onwards
            let view = shift(letters, -(i as isize));
            for length in (2..=n).step_by(2) {
                if is_theta_drome(&view[..length], rotation) {
                    starting_at[i].push(length);
                }
            }
        }

        for j in 0..n {
            // The word read so that position j comes last
            let view = shift(letters, (n - 1 - j) as isize);
            for length in (2..=n).step_by(2) {
                if is_theta_drome(&view[n - length..], rotation) {
                    ending_at[j].push(length);
                }
            }
        }

        let total: usize = starting_at.iter().map(Vec::len).sum();
        debug!(n, %rotation, total, "theta-dromes found");

        Self {
            rotation,
            base_length: n,
            starting_at,
            ending_at,
        }
    }

    /// 90-dromes, the arcs `D1` and `D2` of a quarter-turn factorization.
    pub fn quarter(letters: &[Letter]) -> Self {
        Self::find(letters, Rotation::QUARTER)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn base_length(&self) -> usize {
        self.base_length
    }

    /// Lengths of θ-dromes starting at `start`, ascending.
    pub fn starting_at(&self, start: usize) -> &[usize] {
        &self.starting_at[start]
    }

    /// Lengths of θ-dromes ending at `end`, ascending.
    pub fn ending_at(&self, end: usize) -> &[usize] {
        &self.ending_at[end]
    }

    /// Whether the factor of `length` letters at `start` is an even θ-drome.
    ///
    /// The empty factor always is.
    pub fn contains(&self, start: usize, length: usize) -> bool {
        length == 0
            || (start < self.base_length
                && self.starting_at[start].binary_search(&length).is_ok())
    }

    /// Every θ-drome factor, ordered by start then length.
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        let n = self.base_length;
        self.starting_at
            .iter()
            .enumerate()
            .flat_map(move |(start, lengths)| {
                lengths
                    .iter()
                    .map(move |&length| Span::wrapping(start, length, n))
            })
    }

    /// θ-dromes of at least `min_length` letters.
    pub fn long(&self, min_length: usize) -> impl Iterator<Item = Span> + '_ {
        self.spans().filter(move |span| span.length() >= min_length)
    }

    pub fn len(&self) -> usize {
        self.starting_at.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
