// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Quarter-turn factorizations of polyomino boundary words.
//!
//! A closed lattice polygon is described by its boundary word: the cyclic
//! sequence of unit moves `u`, `d`, `l`, `r` traced around its edge. This
//! crate decides whether such a word splits cyclically as `A · D1 · D2`
//! with `A` a palindrome and `D1`, `D2` 90-dromes (words whose second half
//! is the first half reversed and turned by 270 degrees). Such a split is
//! one of the boundary criteria for a polyomino to tile the plane
//! isohedrally using quarter turns.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed once per word, never changed during search:
//! - every palindromic factor of the circular word (Manacher on the doubled word)
//! - every even 90-drome factor, indexed by start and by end
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state owned by one `SearchContext`:
//! - the anchor arc, its partner and the closing arc
//! - the witnesses found so far and the search statistics
//!
//! # Search Algorithm
//!
//! Some arc of a factorization always has at least `⌈n/3⌉` letters. The
//! predicate program picks such a long arc as anchor, tries each arc that
//! can sit next to it, and accepts when the remaining arc is in the tables:
//!
//! 1. **AnchorPredicate**: long palindromes and long 90-dromes, in each role
//! 2. **PartnerPredicate**: table entries adjacent to the anchor, or empty
//! 3. **ClosurePredicate**: the arc that fills the rest of the cycle
//! 4. **RecordWitnessPredicate**: re-verification and deduplication
//!
//! # Example
//!
//! ```
//! use quarter_turn::{has_quarter_turn_factorization, Word};
//!
//! let word: Word = "urulurru".parse().unwrap();
//! let report = has_quarter_turn_factorization(&word);
//! assert!(report.found());
//! for witness in report.witnesses() {
//!     println!("{}", witness);
//! }
//! ```
//!
//! # References
//!
//! - Langerman, S., Winslow, A. (2016). "A quasilinear-time algorithm for tiling the
//!   plane isohedrally with a polyomino."

pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod predicates;
pub mod search;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{Result, WordError};
pub use geometry::{Factor, Indexing, Letter, Rotation, Word};
pub use search::{
    has_quarter_turn_factorization, has_quarter_turn_factorization_with, Factorization,
    FactorizationReport, SearchConfig,
};
