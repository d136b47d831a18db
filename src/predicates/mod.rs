// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Built-in terminal predicates.
//!
//! - `FailPredicate`: always fails, forcing exploration of every alternative
//! - `SuspendPredicate`: stops the search with the current state intact

use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Put it at the end of a
/// sequence whose earlier predicates record what they find in the context,
/// and the engine will visit every alternative.
///
/// # Example
///
/// ```
/// use grid_digit_algos::engine::EngineBuilder;
/// use grid_digit_algos::permutation::{PermutationContext, PlaceElementPredicate};
/// use grid_digit_algos::predicates::FailPredicate;
///
/// let mut ctx = PermutationContext::new(vec!['a', 'b'], ());
/// let engine = EngineBuilder::new()
///     .add(Box::new(PlaceElementPredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all permutations then fail
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.values, vec!['a', 'b']);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl<C> Predicate<C> for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut C, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl<C> TerminalPredicate<C> for FailPredicate {}

/// Built-in suspend predicate.
///
/// Stops the search at the first path that reaches it, leaving the context as
/// that path left it.
#[derive(Debug)]
pub struct SuspendPredicate;

impl<C> Predicate<C> for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut C, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl<C> TerminalPredicate<C> for SuspendPredicate {}
