// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates of the quarter-turn factorization search.
//!
//! The program is
//!
//! ```text
//! Anchor → Partner → Closure → RecordWitness → count(Witnesses) → Fail | Suspend
//! ```
//!
//! 1. **Anchor** picks a long arc (length `≥ ⌈n/3⌉`) and the role it plays.
//! 2. **Partner** picks the arc on the far side of the anchor from the third
//!    arc: `D1` after a palindrome anchor, `A` before a `D1` anchor, `A`
//!    after a `D2` anchor. The empty arc is always a candidate.
//! 3. **Closure** derives the third arc, which must fill the rest of the
//!    cycle, and looks it up in the factor tables.
//! 4. **RecordWitness** re-verifies the three arcs and keeps new witnesses.
//!
//! Every factorization has a long arc, so running the anchor over all three
//! roles reaches every witness; the same witness reached from two anchors is
//! recorded once.

use crate::context::{Anchor, SearchContext};
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::Span;
use crate::search::{ArcRole, Factorization};
use crate::state::Counters;
use tracing::{debug, trace};

/// Chooses the long arc the rest of the search is built around.
#[derive(Debug, Default)]
pub struct AnchorPredicate {
    candidates: Vec<Anchor>,
}

impl Predicate for AnchorPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        self.candidates = ctx.memo.long_anchors(ctx.config.anchors());
        debug!(anchors = self.candidates.len(), "long anchors");
        if self.candidates.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(self.candidates.len())
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let anchor = self.candidates[choice];
        ctx.state.anchor = Some(anchor);
        ctx.state.partner = None;
        ctx.state.arcs = None;
        ctx.statistics.increment_counter(Counters::AnchorsTried);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Anchor"
    }
}

/// Chooses the arc adjacent to the anchor.
#[derive(Debug, Default)]
pub struct PartnerPredicate {
    candidates: Vec<Span>,
}

impl PartnerPredicate {
    fn candidates(ctx: &SearchContext, anchor: &Anchor) -> Vec<Span> {
        let n = ctx.memo.n();
        let room = n - anchor.span.length();
        let fits = |length: &&usize| **length <= room;
        match anchor.role {
            // D1 starts right after A
            ArcRole::Palindrome => {
                let start = anchor.span.next();
                std::iter::once(0)
                    .chain(ctx.memo.dromes().starting_at(start).iter().filter(fits).copied())
                    .map(|length| Span::wrapping(start, length, n))
                    .collect()
            }
            // A ends right before D1
            ArcRole::FirstDrome => {
                let end = (anchor.span.start() + n - 1) % n;
                std::iter::once(0)
                    .chain(ctx.memo.palindromes().ending_at(end).iter().filter(fits).copied())
                    .map(|length| Span::wrapping(anchor.span.start() + n - length, length, n))
                    .collect()
            }
            // A starts right after D2
            ArcRole::SecondDrome => {
                let start = anchor.span.next();
                std::iter::once(0)
                    .chain(ctx.memo.palindromes().starting_at(start).iter().filter(fits).copied())
                    .map(|length| Span::wrapping(start, length, n))
                    .collect()
            }
        }
    }
}

impl Predicate for PartnerPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Some(anchor) = ctx.state.anchor else {
            return PredicateResult::Failure;
        };
        self.candidates = Self::candidates(ctx, &anchor);
        PredicateResult::Choices(self.candidates.len())
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        ctx.state.partner = Some(self.candidates[choice]);
        ctx.state.arcs = None;
        ctx.statistics.increment_counter(Counters::PartnersTried);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Partner"
    }
}

/// Derives the third arc and checks it against the tables.
#[derive(Debug)]
pub struct ClosurePredicate;

impl Predicate for ClosurePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let (Some(anchor), Some(partner)) = (ctx.state.anchor, ctx.state.partner) else {
            return PredicateResult::Failure;
        };
        let n = ctx.memo.n();
        let rest = n - anchor.span.length() - partner.length();

        let (arcs, closing) = match anchor.role {
            ArcRole::Palindrome => {
                let d2 = Span::wrapping(partner.next(), rest, n);
                ([anchor.span, partner, d2], d2)
            }
            ArcRole::FirstDrome => {
                let d2 = Span::wrapping(anchor.span.next(), rest, n);
                ([partner, anchor.span, d2], d2)
            }
            ArcRole::SecondDrome => {
                let d1 = Span::wrapping(partner.next(), rest, n);
                ([partner, d1, anchor.span], d1)
            }
        };

        if ctx.memo.dromes().contains(closing.start(), closing.length()) {
            ctx.state.arcs = Some(arcs);
            PredicateResult::Success
        } else {
            ctx.statistics.increment_counter(Counters::ClosuresRejected);
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Closure"
    }
}

/// Re-verifies the closed arcs and records them as a witness.
///
/// Fails on duplicates, so with a terminal fail the search goes on to the
/// next candidate either way.
#[derive(Debug)]
pub struct RecordWitnessPredicate;

impl Predicate for RecordWitnessPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Some(arcs) = ctx.state.arcs else {
            return PredicateResult::Failure;
        };
        let witness = Factorization::from_spans(ctx.memo.word(), arcs);
        match witness.verify(ctx.memo.word()) {
            Err(error) => {
                ctx.statistics.record_rejection(&error);
                debug!(%error, "witness rejected");
                PredicateResult::Failure
            }
            Ok(false) => {
                debug!(%witness, "witness failed verification");
                PredicateResult::Failure
            }
            Ok(true) => {
                trace!(%witness, "witness");
                if ctx.state.record(witness) {
                    PredicateResult::Success
                } else {
                    ctx.statistics.increment_counter(Counters::DuplicateWitnesses);
                    PredicateResult::Failure
                }
            }
        }
    }

    fn name(&self) -> &str {
        "RecordWitness"
    }
}
