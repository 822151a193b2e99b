// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Quarter-turn factorization search.
//!
//! A quarter-turn factorization of a boundary word is a cyclic split
//! `A · D1 · D2` where `A` is a palindrome and `D1`, `D2` are even-length
//! 90-dromes. Some arc always has at least `⌈n/3⌉` letters; the search
//! enumerates those long arcs and completes each one from the factor tables.
//!
//! # Examples
//!
//! ```
//! use quarter_turn::search::has_quarter_turn_factorization;
//! use quarter_turn::Word;
//!
//! let word: Word = "uurruu".parse().unwrap();
//! let report = has_quarter_turn_factorization(&word);
//! assert!(report.found());
//! assert!(report.witnesses().iter().all(|w| w.verify(&word).unwrap()));
//! ```

pub mod config;
pub mod factorization;

pub use config::{AnchorRoles, ArcRole, SearchConfig};
pub use factorization::{Factorization, FactorizationReport};

use crate::context::{FactorTables, SearchContext};
use crate::engine::EngineBuilder;
use crate::error::Result;
use crate::geometry::Word;
use crate::predicates::{
    AnchorPredicate, ClosurePredicate, FailPredicate, PartnerPredicate, RecordWitnessPredicate,
    SuspendPredicate,
};
use crate::state::{Counters, Statistics};
use tracing::debug;

/// Shortest arc that counts as long in a word of `n` letters: `⌈n / 3⌉`.
pub fn min_long_length(n: usize) -> usize {
    n.div_ceil(3)
}

/// Find every quarter-turn factorization of `word`.
pub fn has_quarter_turn_factorization(word: &Word) -> FactorizationReport {
    run(word, &SearchConfig::default())
}

/// Search with explicit options.
///
/// Fails with `InvalidWord` when `word` is longer than the configured bound;
/// no table is built in that case.
pub fn has_quarter_turn_factorization_with(
    word: &Word,
    config: &SearchConfig,
) -> Result<FactorizationReport> {
    config.admit(word)?;
    Ok(run(word, config))
}

fn run(word: &Word, config: &SearchConfig) -> FactorizationReport {
    let mut ctx = SearchContext::with_memo(FactorTables::new(word), config.clone());

    let program = EngineBuilder::new()
        .add(Box::new(AnchorPredicate::default()))
        .add(Box::new(PartnerPredicate::default()))
        .add(Box::new(ClosurePredicate))
        .add(Box::new(RecordWitnessPredicate))
        .add(Statistics::counting_predicate(Counters::Witnesses, None));
    let program = if config.stops_at_first() {
        program.terminal(Box::new(SuspendPredicate))
    } else {
        program.terminal(Box::new(FailPredicate))
    };

    let suspended = program.build().search(&mut ctx).is_some();
    debug!(
        word = %word,
        witnesses = ctx.state.witnesses.len(),
        anchors = ctx.statistics.get(Counters::AnchorsTried),
        partners = ctx.statistics.get(Counters::PartnersTried),
        suspended,
        "factorization search finished"
    );

    FactorizationReport::new(ctx.state.witnesses, ctx.statistics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn test_min_long_length() {
        assert_eq!(min_long_length(4), 2);
        assert_eq!(min_long_length(6), 2);
        assert_eq!(min_long_length(7), 3);
        assert_eq!(min_long_length(9), 3);
        assert_eq!(min_long_length(10), 4);
    }

    #[test]
    fn test_whole_word_palindrome_is_found() {
        let w = word("uurruu");
        let report = has_quarter_turn_factorization(&w);
        assert!(report.found());
        assert!(report.witnesses().iter().any(|witness| {
            witness.a().start() == 0
                && witness.a().length() == 6
                && witness.d1().is_empty()
                && witness.d2().is_empty()
        }));
    }

    #[test]
    fn test_witnesses_are_valid_and_distinct() {
        let w = word("urulurru");
        let report = has_quarter_turn_factorization(&w);
        assert!(report.found());
        let mut keys: Vec<_> = report.witnesses().iter().map(|f| f.key()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
        for witness in report.witnesses() {
            assert!(witness.verify(&w).unwrap(), "{}", witness);
        }
        assert_eq!(
            report.statistics().get(Counters::Witnesses),
            total as u64
        );
    }

    #[test]
    fn test_stop_at_first() {
        let w = word("urulurru");
        let config = SearchConfig::default().stop_at_first(true);
        let report = has_quarter_turn_factorization_with(&w, &config).unwrap();
        assert_eq!(report.witnesses().len(), 1);
        assert!(report.found());
    }

    #[test]
    fn test_max_length_refuses_long_words() {
        let w = word("urulurru");
        let config = SearchConfig::default().with_max_length(Some(6));
        assert!(has_quarter_turn_factorization_with(&w, &config).is_err());
    }

    #[test]
    fn test_no_anchor_roles_finds_nothing() {
        let w = word("uurruu");
        let config = SearchConfig::default().with_anchors(AnchorRoles::none());
        let report = has_quarter_turn_factorization_with(&w, &config).unwrap();
        assert!(!report.found());
        assert!(report.first().is_none());
    }
}
