// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use quarter_turn::geometry::Letter;
use quarter_turn::symmetry::{is_palindrome, is_quarter_drome};
use quarter_turn::{FactorizationReport, Word};
use std::collections::BTreeSet;

/// `(A start, |A|, |D1|, |D2|)`: identifies a witness within one word.
pub type WitnessKey = (usize, usize, usize, usize);

pub fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

pub fn letters(text: &str) -> Vec<Letter> {
    text.chars().map(|c| Letter::from_char(c).unwrap()).collect()
}

pub fn keys(report: &FactorizationReport) -> BTreeSet<WitnessKey> {
    report
        .witnesses()
        .iter()
        .map(|w| (w.a().start(), w.a().length(), w.d1().length(), w.d2().length()))
        .collect()
}

/// Every cyclic split `A · D1 · D2` of `word`, tested directly.
pub fn brute_force_factorizations(word: &Word) -> BTreeSet<WitnessKey> {
    let n = word.len();
    let min_long = n.div_ceil(3);
    let mut found = BTreeSet::new();
    for start in 0..n {
        let view = word.shift(-(start as isize));
        let view = view.letters();
        for a in 0..=n {
            for d1 in 0..=n - a {
                let d2 = n - a - d1;
                if a.max(d1).max(d2) >= min_long
                    && is_palindrome(&view[..a])
                    && is_quarter_drome(&view[a..a + d1])
                    && is_quarter_drome(&view[a + d1..])
                {
                    found.insert((start, a, d1, d2));
                }
            }
        }
    }
    found
}

/// Words of `min..=max` letters over the full alphabet.
pub fn word_strategy(min: usize, max: usize) -> impl Strategy<Value = Word> {
    prop::collection::vec(
        prop::sample::select(vec![Letter::Up, Letter::Down, Letter::Left, Letter::Right]),
        min..=max,
    )
    .prop_map(|letters| Word::from_letters(letters).unwrap())
}

/// Boundary words of a few closed lattice polygons.
pub const POLYOMINOES: &[&str] = &[
    "urdl",         // monomino
    "uurddl",       // domino
    "uurrdldl",     // L tromino
    "uuurdrddll",   // P pentomino
    "uurdrrdlldlu", // T pentomino
];
