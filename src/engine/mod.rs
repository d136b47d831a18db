// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the context's trail to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! Backtracking resumes an entry at its next unexplored choice. An entry
//! whose `try_pred` succeeded outright has no choices left, so it is popped.
//!
//! # Example
//!
//! ```
//! use grid_digit_algos::engine::EngineBuilder;
//! use grid_digit_algos::permutation::{PermutationContext, PlaceElementPredicate};
//! use grid_digit_algos::predicates::FailPredicate;
//! use grid_digit_algos::state::{Counters, Statistics};
//!
//! let mut ctx = PermutationContext::new(vec![1, 2, 3], ());
//! let engine = EngineBuilder::new()
//!     .add(Box::new(PlaceElementPredicate))
//!     .add(Statistics::counting_predicate(Counters::PermutationsVisited))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // Every permutation is visited, then the search is exhausted.
//! assert!(engine.search(&mut ctx).is_none());
//! assert_eq!(ctx.statistics.get(Counters::PermutationsVisited), 6);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use tracing::debug;

/// Search state that can be checkpointed and restored.
pub trait Backtrack {
    /// Mark the current state; pass the mark to `rewind_to` to return here.
    fn checkpoint(&self) -> usize;

    /// Undo every change made since `checkpoint` was taken.
    fn rewind_to(&mut self, checkpoint: usize);
}

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }

    /// A deterministic success has no alternatives: backtracking into this
    /// entry pops it rather than calling `try_pred` again.
    fn mark_exhausted(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the context's trail.
pub struct SearchEngine<C> {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate<C>>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl<C> std::fmt::Debug for SearchEngine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("predicates", &self.predicates)
            .field("depth", &self.stack.len())
            .field("try_count", &self.try_count)
            .field("retry_count", &self.retry_count)
            .finish()
    }
}

impl<C: Backtrack> SearchEngine<C> {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. Prefer [`EngineBuilder`],
    /// which guarantees the sequence ends with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate<C>>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if a predicate suspended; the context holds the state
    ///   at the point of suspension
    /// - `None` if exhausted (backtracked past first predicate); the context
    ///   has been rewound to where it was when the search started
    ///
    /// Results are communicated through the context, not the return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without a
    /// terminal predicate) or if `retry_pred` returns `Choices` or `Suspend`.
    pub fn search(mut self, ctx: &mut C) -> Option<Self> {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return None;
        }

        self.stack.push(StackEntry::new(0, 0, ctx.checkpoint()));

        loop {
            let Some(entry) = self.stack.last_mut() else {
                debug!(
                    tries = self.try_count,
                    retries = self.retry_count,
                    "search exhausted"
                );
                return None;
            };

            ctx.rewind_to(entry.trail_checkpoint);

            let pred_idx = entry.predicate_index;
            let round = entry.round;

            if !entry.in_choice_mode {
                self.try_count += 1;
                match self.predicates[pred_idx].try_pred(ctx, round) {
                    PredicateResult::Success => {
                        entry.mark_exhausted();
                        self.push_next_predicate(pred_idx, ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        entry.mark_exhausted();
                        self.push_same_predicate(pred_idx, round, ctx);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                        entry.trail_checkpoint = ctx.checkpoint();
                    }
                    PredicateResult::Suspend => {
                        debug!(
                            tries = self.try_count,
                            retries = self.retry_count,
                            "search suspended"
                        );
                        return Some(self);
                    }
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;

                match self.predicates[pred_idx].retry_pred(ctx, round, choice) {
                    PredicateResult::Success => self.push_next_predicate(pred_idx, ctx),
                    PredicateResult::SuccessSamePredicate => {
                        self.push_same_predicate(pred_idx, round, ctx);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    result @ (PredicateResult::Choices(_) | PredicateResult::Suspend) => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the predicate after `current`.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs end with a terminal predicate).
    fn push_next_predicate(&mut self, current: usize, ctx: &C) {
        let next_index = current + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without a terminal predicate. \
                 Every sequence must end with FAIL or SUSPEND."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.checkpoint()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, current: usize, round: usize, ctx: &C) {
        self.stack
            .push(StackEntry::new(current, round + 1, ctx.checkpoint()));
    }

    /// Get statistics about the last search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder that assembles a predicate sequence ending in a terminal predicate.
pub struct EngineBuilder<C> {
    predicates: Vec<Box<dyn Predicate<C>>>,
}

impl<C: Backtrack> EngineBuilder<C> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Append a predicate to the sequence.
    pub fn add(mut self, predicate: Box<dyn Predicate<C>>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate and close the sequence.
    pub fn terminal<T: TerminalPredicate<C> + 'static>(self, predicate: Box<T>) -> TerminatedBuilder<C> {
        let mut predicates = self.predicates;
        predicates.push(predicate);
        TerminatedBuilder { predicates }
    }
}

impl<C: Backtrack> Default for EngineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A predicate sequence that has been closed by a terminal predicate.
pub struct TerminatedBuilder<C> {
    predicates: Vec<Box<dyn Predicate<C>>>,
}

impl<C: Backtrack> TerminatedBuilder<C> {
    pub fn build(self) -> SearchEngine<C> {
        SearchEngine::new(self.predicates)
    }
}
