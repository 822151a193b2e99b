// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).

use crate::geometry::Span;
use crate::search::{ArcRole, Factorization};
use std::collections::HashSet;

/// A long arc fixed first, and the role it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub role: ArcRole,
    pub span: Span,
}

/// Mutable search state (Tier 2: DYNAMIC).
///
/// Each slot is written by one predicate and read by the ones after it.
#[derive(Debug, Default)]
pub struct DynamicState {
    /// Set by `AnchorPredicate`.
    pub anchor: Option<Anchor>,

    /// The arc chosen next to the anchor; set by `PartnerPredicate`.
    pub partner: Option<Span>,

    /// `[A, D1, D2]` once the third arc has been checked; set by `ClosurePredicate`.
    pub arcs: Option<[Span; 3]>,

    /// Witnesses found so far, in discovery order.
    pub witnesses: Vec<Factorization>,

    seen: HashSet<(usize, usize, usize, usize)>,
}

impl DynamicState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `witness` unless the same split was already found; returns
    /// whether it was new.
    pub fn record(&mut self, witness: Factorization) -> bool {
        if self.seen.insert(witness.key()) {
            self.witnesses.push(witness);
            true
        } else {
            false
        }
    }
}
