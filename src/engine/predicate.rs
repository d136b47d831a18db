// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates: the steps of a backtracking search.
//!
//! A search is a fixed sequence of predicates run against one context `C`.
//! Each predicate either advances the sequence, repeats itself for another
//! round, offers a number of alternatives, or rejects the current state.
//!
//! # Example
//!
//! A predicate that appends one of two bytes to a log:
//!
//! ```
//! use grid_digit_algos::engine::{Predicate, PredicateResult};
//!
//! #[derive(Debug)]
//! struct PushBit;
//!
//! impl Predicate<Vec<u8>> for PushBit {
//!     fn try_pred(&mut self, _ctx: &mut Vec<u8>, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, ctx: &mut Vec<u8>, _round: usize, choice: usize) -> PredicateResult {
//!         ctx.push(choice as u8);
//!         PredicateResult::Success
//!     }
//! }
//! ```

use std::fmt::Debug;

/// Outcome of one call to a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Advance to the next predicate. Has no alternatives: backtracking
    /// passes straight through this step.
    Success,

    /// Run this predicate again with `round + 1`. Also has no alternatives.
    SuccessSamePredicate,

    /// Reject the current state and backtrack.
    Failure,

    /// `n` alternatives, each tried with `retry_pred(round, choice)`.
    Choices(usize),

    /// Stop the search and hand the context back as it is.
    Suspend,
}

/// Marker for predicates that may end a sequence.
///
/// These never return `Success`, only `Failure` or `Suspend`.
/// [`EngineBuilder::terminal`](super::EngineBuilder::terminal) accepts only
/// these.
pub trait TerminalPredicate<C>: Predicate<C> {}

/// One step of a search over context `C`.
///
/// The engine rewinds the context to the step's checkpoint before each call,
/// so any change a predicate makes must be undoable through
/// [`Backtrack`](super::Backtrack).
pub trait Predicate<C>: Debug {
    /// First call for `round`. Rounds start at 0.
    fn try_pred(&mut self, ctx: &mut C, round: usize) -> PredicateResult;

    /// Take alternative `choice` after `try_pred` returned `Choices(n)`.
    ///
    /// May return `Success`, `SuccessSamePredicate` or `Failure`.
    ///
    /// # Panics
    ///
    /// The default panics; predicates that return `Choices` override it.
    #[allow(unused)]
    fn retry_pred(&mut self, ctx: &mut C, round: usize, choice: usize) -> PredicateResult {
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name used in panics and logs. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
