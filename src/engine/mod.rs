// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking engine for predicate programs.
//!
//! A program is a sequence of [`Predicate`]s ending with a
//! [`TerminalPredicate`]. The engine keeps one stack entry per predicate
//! reached, holding the predicate index, its round and, once it has offered
//! choices, the next choice to hand it.
//!
//! Control flow per result:
//! - `Success` pushes the next predicate, `SuccessSamePredicate` pushes the
//!   same one with the following round
//! - `Choices(n)` turns the entry into a choice point for `0..n`
//! - `Failure` pops back to the nearest choice point with choices left
//! - `Suspend` returns the engine to the caller, who may resume it
//!
//! # Example
//!
//! ```
//! use quarter_turn::context::SearchContext;
//! use quarter_turn::engine::EngineBuilder;
//! use quarter_turn::predicates::{AnchorPredicate, SuspendPredicate};
//! use quarter_turn::search::SearchConfig;
//! use quarter_turn::Word;
//!
//! let word: Word = "uurruu".parse().unwrap();
//! let mut ctx = SearchContext::new(&word, SearchConfig::default());
//! let engine = EngineBuilder::new()
//!     .add(Box::new(AnchorPredicate::default()))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! if let Some(engine) = engine.search(&mut ctx) {
//!     assert!(ctx.state.anchor.is_some());
//!     // Resuming backtracks into the next anchor
//!     let _ = engine.search(&mut ctx);
//! }
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use tracing::trace;

/// Initial capacity of the predicate stack.
const STACK_CAPACITY: usize = 64;

/// One predicate reached by the program.
#[derive(Debug)]
struct StackEntry {
    predicate_index: usize,
    round: usize,
    /// Set once the predicate returned `Choices`.
    in_choice_mode: bool,
    current_choice: usize,
    num_choices: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }
}

/// Runs a predicate program against a [`SearchContext`].
pub struct SearchEngine {
    predicates: Vec<Box<dyn Predicate>>,
    stack: Vec<StackEntry>,
    /// The last `search` returned at a suspend.
    suspended: bool,
    try_count: u64,
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which checks that the program ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended; calling `search` on it again backtracks
    ///   out of the suspend and continues with the next alternative
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Results are delivered as side effects on `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without a FAIL or
    /// SUSPEND; [`EngineBuilder`] rules that out.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.suspended {
            // Resume: the suspending entry fails
            self.suspended = false;
            self.backtrack();
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;
            if self.predicates.is_empty() {
                return None;
            }
            self.stack.push(StackEntry::new(0, 0));
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // exhausted
            };
            let pred_idx = entry.predicate_index;
            let round = entry.round;

            if !entry.in_choice_mode {
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);
                trace!(predicate = self.predicates[pred_idx].name(), round, ?result, "try");

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => self.backtrack(),
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                        }
                    }
                    PredicateResult::Suspend => {
                        self.suspended = true;
                        return Some(self);
                    }
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.backtrack();
                    continue;
                }
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => {} // next choice
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Pop the current entry, then every entry left without alternatives.
    ///
    /// An entry that succeeded outside choice mode has nothing to retry, so
    /// failure passes straight through it to the nearest open choice point.
    fn backtrack(&mut self) {
        self.stack.pop();
        while self.stack.last().is_some_and(|entry| !entry.in_choice_mode) {
            self.stack.pop();
        }
    }

    /// Advance to the next predicate.
    fn push_next_predicate(&mut self) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index, 0));
    }

    /// Run the current predicate again in its next round.
    fn push_same_predicate(&mut self) {
        if let Some(current) = self.stack.last() {
            let entry = StackEntry::new(current.predicate_index, current.round + 1);
            self.stack.push(entry);
        }
    }

    /// `(try_pred calls, retry_pred calls)` since the search started.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Assembles a predicate program.
///
/// ```
/// use quarter_turn::engine::EngineBuilder;
/// use quarter_turn::predicates::FailPredicate;
///
/// let engine = EngineBuilder::new().terminal(Box::new(FailPredicate)).build();
/// assert_eq!(engine.statistics(), (0, 0));
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate; nothing can be added after it.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A complete program, ready to become an engine.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Word;
    use crate::predicates::{FailPredicate, SuspendPredicate};
    use crate::search::SearchConfig;

    fn context() -> SearchContext {
        SearchContext::new(&Word::new("uurruu").unwrap(), SearchConfig::default())
    }

    /// Offers `n` choices and logs each choice taken.
    #[derive(Debug)]
    struct Range {
        n: usize,
        taken: std::rc::Rc<std::cell::RefCell<Vec<usize>>>,
    }

    impl Predicate for Range {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            if self.n == 0 {
                PredicateResult::Failure
            } else {
                PredicateResult::Choices(self.n)
            }
        }

        fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
            self.taken.borrow_mut().push(choice);
            PredicateResult::Success
        }
    }

    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    #[derive(Debug)]
    struct Rounds(usize);

    impl Predicate for Rounds {
        fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
            if round + 1 < self.0 {
                PredicateResult::SuccessSamePredicate
            } else {
                PredicateResult::Success
            }
        }
    }

    fn range(n: usize) -> (Box<Range>, std::rc::Rc<std::cell::RefCell<Vec<usize>>>) {
        let taken = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        (
            Box::new(Range {
                n,
                taken: taken.clone(),
            }),
            taken,
        )
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx);
        assert!(engine.is_some());
        assert_eq!(engine.unwrap().statistics(), (2, 0));
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = context();
        let engine = EngineBuilder::new().terminal(Box::new(FailPredicate)).build();
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = context();
        assert!(SearchEngine::new(vec![]).search(&mut ctx).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);
        let _ = engine.search(&mut ctx);
    }

    #[test]
    fn test_exhaustive_backtracking_visits_every_combination() {
        let mut ctx = context();
        let (outer, outer_taken) = range(3);
        let (inner, inner_taken) = range(2);
        let engine = EngineBuilder::new()
            .add(outer)
            .add(inner)
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(*outer_taken.borrow(), vec![0, 1, 2]);
        assert_eq!(*inner_taken.borrow(), vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_resume_after_suspend_continues_with_next_choice() {
        let mut ctx = context();
        let (choices, taken) = range(3);
        let mut engine = EngineBuilder::new()
            .add(choices)
            .terminal(Box::new(SuspendPredicate))
            .build();

        let mut suspensions = 0;
        while let Some(next) = engine.search(&mut ctx) {
            suspensions += 1;
            engine = next;
        }
        assert_eq!(suspensions, 3);
        assert_eq!(*taken.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_rounds() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(Rounds(3)))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(engine.statistics(), (4, 0));
    }

    #[test]
    fn test_failure_passes_through_deterministic_predicates() {
        let mut ctx = context();
        let (choices, taken) = range(2);
        let engine = EngineBuilder::new()
            .add(choices)
            .add(Box::new(AlwaysSucceed))
            .add(Box::new(Rounds(2)))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(*taken.borrow(), vec![0, 1]);
    }

    #[test]
    fn test_empty_choice_backtracks() {
        let mut ctx = context();
        let (empty, _) = range(0);
        let engine = EngineBuilder::new()
            .add(empty)
            .terminal(Box::new(SuspendPredicate))
            .build();
        assert!(engine.search(&mut ctx).is_none());
    }
}
