// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the factor tables of the word, immutable once built
//! - Tier 2 (DYNAMIC): the current anchor, partner and closing arc, and the
//!   witnesses found so far
//!
//! Independent contexts can search different words at the same time; nothing
//! is shared between them.

pub mod dynamic;
pub mod memoized;

pub use dynamic::{Anchor, DynamicState};
pub use memoized::FactorTables;

use crate::geometry::Word;
use crate::search::SearchConfig;
use crate::state::Statistics;

/// Search context combining MEMO and DYNAMIC state.
///
/// ```text
/// SearchContext {
///     memo: FactorTables,        // Tier 1: Immutable
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,
///     config: SearchConfig,
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable precomputed data (Tier 1)
    pub memo: FactorTables,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    pub statistics: Statistics,
    pub config: SearchConfig,
}

impl SearchContext {
    /// Build the factor tables of `word` and an empty search state.
    pub fn new(word: &Word, config: SearchConfig) -> Self {
        Self::with_memo(FactorTables::new(word), config)
    }

    /// Create a search context over tables that were already built.
    pub fn with_memo(memo: FactorTables, config: SearchConfig) -> Self {
        Self {
            memo,
            state: DynamicState::new(),
            statistics: Statistics::new(),
            config,
        }
    }
}
