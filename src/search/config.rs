// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use crate::error::{Result, WordError};
use crate::geometry::Word;
use serde::Serialize;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

/// The three arcs of a factorization, in cyclic order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    EnumCountMacro,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ArcRole {
    /// `A`, the palindrome.
    Palindrome,
    /// `D1`, the 90-drome starting right after `A`.
    FirstDrome,
    /// `D2`, the 90-drome ending right before `A`.
    SecondDrome,
}

/// Which arcs may act as the long anchor of the search.
///
/// Every factorization has a long arc, so with all roles enabled the search
/// is complete. Disabling a role only finds the witnesses in which one of the
/// remaining roles is long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorRoles {
    palindrome: bool,
    first_drome: bool,
    second_drome: bool,
}

impl AnchorRoles {
    pub fn all() -> Self {
        Self {
            palindrome: true,
            first_drome: true,
            second_drome: true,
        }
    }

    pub fn none() -> Self {
        Self {
            palindrome: false,
            first_drome: false,
            second_drome: false,
        }
    }

    pub fn only(role: ArcRole) -> Self {
        Self::none().with(role)
    }

    /// Enable `role` in addition to the current roles.
    pub fn with(mut self, role: ArcRole) -> Self {
        *self.slot(role) = true;
        self
    }

    pub fn contains(&self, role: ArcRole) -> bool {
        match role {
            ArcRole::Palindrome => self.palindrome,
            ArcRole::FirstDrome => self.first_drome,
            ArcRole::SecondDrome => self.second_drome,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.palindrome || self.first_drome || self.second_drome)
    }

    /// Enabled roles in cyclic order.
    pub fn iter(&self) -> impl Iterator<Item = ArcRole> + '_ {
        use strum::IntoEnumIterator;
        ArcRole::iter().filter(move |role| self.contains(*role))
    }

    fn slot(&mut self, role: ArcRole) -> &mut bool {
        match role {
            ArcRole::Palindrome => &mut self.palindrome,
            ArcRole::FirstDrome => &mut self.first_drome,
            ArcRole::SecondDrome => &mut self.second_drome,
        }
    }
}

impl Default for AnchorRoles {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<ArcRole> for AnchorRoles {
    fn from_iter<I: IntoIterator<Item = ArcRole>>(roles: I) -> Self {
        roles.into_iter().fold(Self::none(), Self::with)
    }
}

/// Options for [`has_quarter_turn_factorization_with`](super::has_quarter_turn_factorization_with).
///
/// ```
/// use quarter_turn::search::{ArcRole, AnchorRoles, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_anchors(AnchorRoles::only(ArcRole::Palindrome))
///     .stop_at_first(true)
///     .with_max_length(Some(200));
/// assert!(config.stops_at_first());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchConfig {
    anchors: AnchorRoles,
    stop_at_first: bool,
    max_length: Option<usize>,
}

impl SearchConfig {
    pub fn with_anchors(mut self, anchors: AnchorRoles) -> Self {
        self.anchors = anchors;
        self
    }

    /// End the search at the first witness instead of collecting all of them.
    pub fn stop_at_first(mut self, stop: bool) -> Self {
        self.stop_at_first = stop;
        self
    }

    /// Refuse words longer than `max_length` before building any table.
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn anchors(&self) -> AnchorRoles {
        self.anchors
    }

    pub fn stops_at_first(&self) -> bool {
        self.stop_at_first
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Fails with `InvalidWord` when `word` exceeds the length bound.
    pub fn admit(&self, word: &Word) -> Result<()> {
        match self.max_length {
            Some(max) if word.len() > max => Err(WordError::InvalidWord { length: word.len() }),
            _ => Ok(()),
        }
    }
}
