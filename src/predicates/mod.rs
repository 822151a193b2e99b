// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates of the factorization program.
//!
//! - `factorization`: anchor, partner, closure and witness recording
//! - [`FailPredicate`] and [`SuspendPredicate`] end a program: the first
//!   makes it enumerate every witness, the second stops at each one

pub mod factorization;

pub use factorization::{
    AnchorPredicate, ClosurePredicate, PartnerPredicate, RecordWitnessPredicate,
};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Always fails, so the engine moves on to the next open choice.
///
/// ```
/// use quarter_turn::context::SearchContext;
/// use quarter_turn::engine::EngineBuilder;
/// use quarter_turn::predicates::{AnchorPredicate, FailPredicate};
/// use quarter_turn::search::SearchConfig;
/// use quarter_turn::Word;
///
/// let word: Word = "uurruu".parse().unwrap();
/// let mut ctx = SearchContext::new(&word, SearchConfig::default());
/// let engine = EngineBuilder::new()
///     .add(Box::new(AnchorPredicate::default()))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Every anchor is visited, then the engine is spent
/// assert!(engine.search(&mut ctx).is_none());
/// assert!(ctx.statistics.get(quarter_turn::state::Counters::AnchorsTried) > 0);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Hands the context back to the caller after each witness.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
