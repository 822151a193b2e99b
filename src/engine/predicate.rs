// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The unit of a search program.
//!
//! A program is a list of predicates run left to right. Each one reports
//! what it did through a [`PredicateResult`]; a predicate with several
//! candidates returns `Choices(n)` and is then handed each candidate index
//! in turn through [`Predicate::retry_pred`].
//!
//! # Example
//!
//! A predicate that tries both orientations of a word:
//!
//! ```
//! use quarter_turn::context::SearchContext;
//! use quarter_turn::engine::{Predicate, PredicateResult};
//!
//! #[derive(Debug)]
//! struct Orientation;
//!
//! impl Predicate for Orientation {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
//!         match choice {
//!             0 | 1 => PredicateResult::Success,
//!             _ => PredicateResult::Failure,
//!         }
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Outcome of one call to a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Continue with the next predicate.
    Success,

    /// Call this predicate again with `round + 1`.
    SuccessSamePredicate,

    /// Nothing works here; resume at the nearest open choice.
    Failure,

    /// `n` candidates, each tried through `retry_pred(round, i)`.
    Choices(usize),

    /// Return to the caller; a later `search` resumes by failing here.
    Suspend,
}

/// A predicate that can close a program because it never returns `Success`.
pub trait TerminalPredicate: Predicate {}

/// One step of a search program.
///
/// `try_pred` is called when the engine reaches the predicate. After
/// `Choices(n)` the engine calls `retry_pred` with `0..n`, moving to the
/// next index each time the rest of the program fails.
///
/// There is no trail. A predicate owns the `ctx` fields it writes and
/// rewrites them on every retry. Later predicates only read fields written
/// before them, so a backtracked value is never observed.
pub trait Predicate: Debug {
    /// First call, for `round` (0 unless the predicate asked to repeat).
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Take candidate `choice`. Must not return `Choices` or `Suspend`.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        panic!("{} offered no choices", self.name());
    }

    /// Label used in trace output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
