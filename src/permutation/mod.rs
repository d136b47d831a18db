// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Swap-based permutation generation on the search engine.
//!
//! `PlaceElementPredicate` fixes one position per round: in round `r` it
//! offers one choice per element still free (positions `r..len`) and swaps
//! the chosen element into position `r`. The swap goes on the trail, so
//! backtracking undoes it and the next choice starts from the same
//! arrangement the previous one did.
//!
//! When every position is fixed the predicate succeeds, and the predicates
//! after it see one complete permutation in `PermutationContext::values`.
//! A terminal predicate then fails to ask for the next permutation, or
//! suspends to stop early. Permutations are never collected, so the working
//! memory is the sequence itself plus a trail of at most `len` swaps.
//!
//! Repeated elements produce repeated permutations; nothing is deduplicated.

use crate::engine::{Backtrack, Predicate, PredicateResult};
use crate::state::{Statistics, WithStatistics};
use crate::trail::Trail;

/// Search context for permuting `values` in place.
///
/// `state` is room for whatever the caller's predicates need to remember
/// between permutations (a best-so-far, a count, ...). It is not on the
/// trail and survives backtracking.
#[derive(Debug)]
pub struct PermutationContext<T, S> {
    /// The sequence being permuted.
    pub values: Vec<T>,
    /// Swaps applied along the current search path.
    pub trail: Trail,
    /// Counters incremented by counting predicates.
    pub statistics: Statistics,
    /// Caller-owned state.
    pub state: S,
}

impl<T, S> PermutationContext<T, S> {
    pub fn new(values: Vec<T>, state: S) -> Self {
        let trail = Trail::with_capacity(values.len());
        Self {
            values,
            trail,
            statistics: Statistics::new(),
            state,
        }
    }

    /// Swap two positions, recording the swap for backtracking.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.trail.swap(&mut self.values, a, b);
    }
}

impl<T, S> Backtrack for PermutationContext<T, S> {
    fn checkpoint(&self) -> usize {
        self.trail.checkpoint()
    }

    fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.values);
    }
}

impl<T, S> WithStatistics for PermutationContext<T, S> {
    fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.statistics
    }
}

/// Fixes position `round` to each of the elements not yet placed.
#[derive(Debug)]
pub struct PlaceElementPredicate;

impl<T, S> Predicate<PermutationContext<T, S>> for PlaceElementPredicate {
    fn try_pred(&mut self, ctx: &mut PermutationContext<T, S>, round: usize) -> PredicateResult {
        let len = ctx.values.len();
        // The last position has only one element left for it.
        if round + 1 >= len {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(len - round)
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut PermutationContext<T, S>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        ctx.swap(round, round + choice);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "PlaceElement"
    }
}
