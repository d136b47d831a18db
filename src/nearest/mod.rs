// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Nearest greater number with the same digits.
//!
//! Given a number, find the smallest strictly greater number that uses
//! exactly the same multiset of decimal digits, or give the number back if
//! there is none (its digits are already in descending order).
//!
//! # Search
//!
//! The search grows a window over the low digits of the number. For each
//! window size `k = 2, 3, ..., len` it enumerates every permutation of the
//! lowest `k` digits and keeps the smallest one whose value is strictly
//! greater than the window's current value. The first window that yields
//! such a permutation decides the answer: the permutation is spliced back
//! under the unchanged high digits.
//!
//! A window's search stops before the last permutation only when it meets a
//! value exactly 9 above the window's own: permutations of the same digits
//! are congruent mod 9, so no candidate can be closer. Otherwise each window
//! is searched exhaustively, so the cost is `k!` per window and
//! grows factorially with the number of digits. Numbers of up to about ten
//! digits are quick; beyond that the search still answers correctly but
//! slowly. [`NearestGreaterConfig::digit_warning_threshold`] controls when a
//! warning is logged about this.

pub mod digits;

pub use digits::DigitArray;

use tracing::{debug, trace, warn};

use crate::engine::{EngineBuilder, Predicate, PredicateResult, TerminalPredicate};
use crate::permutation::{PermutationContext, PlaceElementPredicate};
use crate::state::{Counters, Statistics};
use digits::{digits_of, value_of};

/// Settings for [`NearestGreaterFinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestGreaterConfig {
    /// Log a warning when the input has more digits than this.
    pub digit_warning_threshold: usize,
}

impl Default for NearestGreaterConfig {
    fn default() -> Self {
        Self {
            digit_warning_threshold: 10,
        }
    }
}

/// Finds the nearest greater number with the same digits.
#[derive(Debug, Clone, Default)]
pub struct NearestGreaterFinder {
    config: NearestGreaterConfig,
}

impl NearestGreaterFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NearestGreaterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NearestGreaterConfig {
        &self.config
    }

    /// The smallest number greater than `number` with the same digits, or
    /// `number` if there is none.
    pub fn find(&self, number: u64) -> u64 {
        self.find_with_stats(number).0
    }

    /// Like [`find`](Self::find), also counting windows and permutations.
    ///
    /// A greater permutation that does not fit in `u64` counts as none.
    pub fn find_with_stats(&self, number: u64) -> (u64, Statistics) {
        let mut statistics = Statistics::new();
        let mut digits = DigitArray::from_number(number);

        if digits.len() > self.config.digit_warning_threshold {
            warn!(
                number,
                digits = digits.len(),
                threshold = self.config.digit_warning_threshold,
                "digit count above threshold, permutation search may be slow"
            );
        }

        for k in 2..=digits.len() {
            statistics.increment(Counters::PrefixesSearched);
            let (best, visited) = smallest_greater_permutation(digits.prefix(k));
            statistics.add(Counters::PermutationsVisited, visited);

            let Some(best) = best else {
                trace!(number, k, visited, "no greater permutation in window");
                continue;
            };

            digits.splice_prefix(&digits_of(best, k));
            return match digits.value() {
                Some(result) => {
                    debug!(number, result, k, %statistics, "nearest greater found");
                    (result, statistics)
                }
                None => {
                    warn!(number, k, "nearest greater overflows u64");
                    (number, statistics)
                }
            };
        }

        debug!(number, %statistics, "digits descending, no greater number");
        (number, statistics)
    }
}

/// The smallest number greater than `number` with the same digits, or
/// `number` if there is none.
///
/// # Example
///
/// ```
/// use grid_digit_algos::nearest::nearest_greater;
///
/// assert_eq!(nearest_greater(12345), 12354);
/// assert_eq!(nearest_greater(321321), 322113);
/// assert_eq!(nearest_greater(321), 321);
/// ```
pub fn nearest_greater(number: u64) -> u64 {
    NearestGreaterFinder::new().find(number)
}

/// Smallest value strictly above `threshold` seen so far.
#[derive(Debug)]
struct SmallestAbove {
    threshold: u128,
    best: Option<u128>,
}

type WindowContext = PermutationContext<u8, SmallestAbove>;

/// Scores each complete permutation of the window against the best so far.
#[derive(Debug)]
struct SmallestAbovePredicate;

impl Predicate<WindowContext> for SmallestAbovePredicate {
    fn try_pred(&mut self, ctx: &mut WindowContext, _round: usize) -> PredicateResult {
        let value = value_of(&ctx.values);
        let state = &mut ctx.state;
        if value > state.threshold && state.best.map_or(true, |best| value < best) {
            state.best = Some(value);
            // Digit permutations agree mod 9, so none lies closer than this.
            if value == state.threshold + 9 {
                return PredicateResult::Suspend;
            }
        }
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "SmallestAbove"
    }
}

impl TerminalPredicate<WindowContext> for SmallestAbovePredicate {}

/// Search every permutation of `window` for the smallest value above the
/// window's own value.
///
/// Returns that value, if any, and the number of permutations visited.
fn smallest_greater_permutation(window: &[u8]) -> (Option<u128>, u64) {
    let threshold = value_of(window);
    let mut ctx = PermutationContext::new(
        window.to_vec(),
        SmallestAbove {
            threshold,
            best: None,
        },
    );

    let engine = EngineBuilder::new()
        .add(Box::new(PlaceElementPredicate))
        .add(Statistics::counting_predicate(Counters::PermutationsVisited))
        .terminal(Box::new(SmallestAbovePredicate))
        .build();
    if engine.search(&mut ctx).is_some() {
        trace!(%threshold, "window stopped at nearest possible value");
    }

    (
        ctx.state.best,
        ctx.statistics.get(Counters::PermutationsVisited),
    )
}
