// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid, sequence and digit algorithms.
//!
//! Each operation is a standalone call with no shared state:
//!
//! - [`spiral::fill`]: an N×N grid holding 1..N² in clockwise spiral order
//! - [`rotate::rotate_clockwise`]: quarter-turn rotation in place, O(1) extra memory
//! - [`sort::sort_ascending`]: in-place quicksort with Lomuto partitioning
//! - [`shuffle::shuffle`]: even/odd redistribution repeated, memoized per call
//! - [`nearest::nearest_greater`]: nearest greater number with the same digits
//!
//! plus the small checks in [`basics`].
//!
//! # Search Engine
//!
//! The digit search enumerates permutations with a backtracking engine:
//!
//! - [`engine`]: runs a sequence of predicates, backtracking on failure
//! - [`trail`]: records swaps so backtracking can undo them in O(1) each
//! - [`permutation`]: a predicate that places one element per round
//!
//! A search's working state lives in its context and is dropped with it, so
//! independent searches never interact.
//!
//! # Logging
//!
//! Operations emit `tracing` events (`debug` for outcomes, `trace` for
//! steps, `warn` for inputs past the digit-count threshold). No subscriber is
//! installed by this crate.

pub mod basics;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod nearest;
pub mod permutation;
pub mod predicates;
pub mod rotate;
pub mod shuffle;
pub mod sort;
pub mod spiral;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{Result, TaskError};
pub use geometry::{Direction, Grid};
pub use nearest::{nearest_greater, NearestGreaterConfig, NearestGreaterFinder};
pub use rotate::rotate_clockwise;
pub use shuffle::{shuffle, shuffle_str};
pub use sort::sort_ascending;
pub use trail::Trail;
