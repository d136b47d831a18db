// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-call state that outlives a single step of an operation.
//!
//! Nothing here is global: each call that wants counters creates its own
//! `Statistics` and hands it back to the caller.

pub mod statistics;

pub use statistics::{Counters, Statistics, WithStatistics};
