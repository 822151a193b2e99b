// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search counters.
//!
//! The counters live in the context. Predicates bump them directly, or a
//! [`Statistics::counting_predicate`] placed in the program counts every
//! pass through its position. One rejection counter per [`WordError`] kind
//! follows the named counters.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::error::{WordError, KIND_NAMES};
use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Long arcs taken as anchor.
    AnchorsTried,
    /// Neighbouring arcs tried next to an anchor.
    PartnersTried,
    /// Anchor and partner whose remaining arc was not in the tables.
    ClosuresRejected,
    /// Witnesses already found from another anchor.
    DuplicateWitnesses,
    Witnesses,
}

const COUNT: usize = Counters::COUNT + WordError::COUNT;

#[derive(Debug, Clone, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A pass-through predicate that bumps `counter` when `filter` holds
    /// (always, without a filter).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count a candidate rejected with `error`.
    pub(crate) fn record_rejection(&mut self, error: &WordError) {
        self.stats[Counters::COUNT + error.kind_index()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of candidates rejected with an error of the same kind as `error`.
    pub fn rejections(&self, error: &WordError) -> u64 {
        self.stats[Counters::COUNT + error.kind_index()]
    }

    /// Named search counters, in declaration order.
    pub fn counters(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Counters::iter().map(move |counter| (counter.into(), self.get(counter)))
    }
}

/// Serialized as a map from counter name to value; rejection counters
/// appear only when non-zero.
impl Serialize for Statistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (name, value) in self.counters() {
            map.serialize_entry(name, &value)?;
        }
        for (kind, &value) in self.stats[Counters::COUNT..].iter().enumerate() {
            if value > 0 {
                map.serialize_entry(&format!("rejected_{}", KIND_NAMES[kind]), &value)?;
            }
        }
        map.end()
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            let statistics = &mut ctx.statistics;
            statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
