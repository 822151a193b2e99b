// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable bookkeeping carried through a search.

pub mod statistics;

pub use statistics::{Counters, Statistics};
