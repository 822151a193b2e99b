// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (Tier 1: MEMO).

use crate::context::dynamic::Anchor;
use crate::geometry::Word;
use crate::search::{min_long_length, AnchorRoles, ArcRole};
use crate::symmetry::{CircularPalindromes, ThetaDromes};
use tracing::debug;

/// Immutable precomputed data (Tier 1: MEMO).
///
/// Both factor tables of one word, computed once before the search and only
/// read afterwards. The two finders are independent of each other.
#[derive(Debug, Clone)]
pub struct FactorTables {
    word: Word,
    palindromes: CircularPalindromes,
    dromes: ThetaDromes,
    min_long: usize,
}

impl FactorTables {
    pub fn new(word: &Word) -> Self {
        let palindromes = CircularPalindromes::find(word.letters());
        let dromes = ThetaDromes::quarter(word.letters());
        let min_long = min_long_length(word.len());
        debug!(
            word = %word,
            palindromes = palindromes.len(),
            dromes = dromes.len(),
            min_long,
            "factor tables ready"
        );
        Self {
            word: word.clone(),
            palindromes,
            dromes,
            min_long,
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Length of the word.
    pub fn n(&self) -> usize {
        self.word.len()
    }

    pub fn palindromes(&self) -> &CircularPalindromes {
        &self.palindromes
    }

    /// Even 90-dromes.
    pub fn dromes(&self) -> &ThetaDromes {
        &self.dromes
    }

    /// Shortest arc length that counts as long: `⌈n / 3⌉`.
    pub fn min_long(&self) -> usize {
        self.min_long
    }

    /// Every long factor that may play one of the enabled roles.
    pub fn long_anchors(&self, roles: AnchorRoles) -> Vec<Anchor> {
        let mut anchors = Vec::new();
        for role in roles.iter() {
            let anchor = |span| Anchor { role, span };
            match role {
                ArcRole::Palindrome => {
                    anchors.extend(self.palindromes.long(self.min_long).map(anchor))
                }
                ArcRole::FirstDrome | ArcRole::SecondDrome => {
                    anchors.extend(self.dromes.long(self.min_long).map(anchor))
                }
            }
        }
        anchors
    }
}
