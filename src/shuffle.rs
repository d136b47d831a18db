// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Even/odd redistribution, applied repeatedly.
//!
//! One step takes the elements at even positions, in order, followed by the
//! elements at odd positions, in order. Positions are those of the sequence
//! the step is applied to, not of the original input.
//!
//! A step only moves positions around, so it is a bijection on sequences of
//! a given length and the orbit of any input is a pure cycle: the first state
//! to come back is the input itself. Each call keeps a memo table from state
//! to next state; once the input reappears after `p` steps, the remaining
//! step count is reduced modulo `p` and the rest of the walk is answered
//! from the table.

use std::hash::Hash;

use tracing::{debug, trace};

use crate::memo::MemoTable;
use crate::state::{Counters, Statistics};

/// Apply the even/odd step `iterations` times.
///
/// # Example
///
/// ```
/// use grid_digit_algos::shuffle::shuffle;
///
/// assert_eq!(shuffle(&[0, 1, 2, 3, 4, 5], 2), vec![0, 4, 3, 2, 1, 5]);
/// ```
pub fn shuffle<T: Clone + Eq + Hash>(values: &[T], iterations: usize) -> Vec<T> {
    shuffle_with_stats(values, iterations).0
}

/// Apply the even/odd step `iterations` times to the characters of `text`.
///
/// ```
/// use grid_digit_algos::shuffle::shuffle_str;
///
/// assert_eq!(shuffle_str("qwerty", 3), "qrwtey");
/// ```
pub fn shuffle_str(text: &str, iterations: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    shuffle(&chars, iterations).into_iter().collect()
}

/// Like [`shuffle`], also reporting memo and cycle counters.
///
/// `ShuffleSteps` counts steps actually taken, which is at most one full
/// period plus the remainder after the orbit closes.
pub fn shuffle_with_stats<T: Clone + Eq + Hash>(
    values: &[T],
    iterations: usize,
) -> (Vec<T>, Statistics) {
    let mut statistics = Statistics::new();
    let mut memo: MemoTable<Vec<T>, Vec<T>> = MemoTable::new();

    let start = values.to_vec();
    let mut current = start.clone();
    let mut remaining = iterations;
    let mut taken = 0usize;
    let mut closed = false;

    while remaining > 0 {
        current = memo.get_or_compute(current, |state| shuffle_once(state)).clone();
        remaining -= 1;
        taken += 1;

        if !closed && current == start {
            closed = true;
            remaining %= taken;
            statistics.set(Counters::CyclePeriod, taken as u64);
            debug!(period = taken, remaining, "shuffle orbit closed");
        }
    }

    statistics.set(Counters::ShuffleSteps, taken as u64);
    statistics.set(Counters::MemoHits, memo.hits());
    statistics.set(Counters::MemoMisses, memo.misses());
    trace!(len = values.len(), iterations, %statistics, "shuffle done");

    (current, statistics)
}

/// One step: even positions first, then odd positions.
fn shuffle_once<T: Clone>(values: &[T]) -> Vec<T> {
    values
        .iter()
        .step_by(2)
        .chain(values.iter().skip(1).step_by(2))
        .cloned()
        .collect()
}
