// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in whatever context an operation runs with, and can be
//! incremented by a counting predicate or directly by the operation.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use crate::engine::{Predicate, PredicateResult};

#[derive(Debug, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Shuffle steps requested and answered, from the memo or by computing.
    ShuffleSteps,
    /// Shuffle steps answered from the memo table.
    MemoHits,
    /// Shuffle steps that had to be computed.
    MemoMisses,
    /// Length of the shuffle orbit, once it has closed (0 if it never did).
    CyclePeriod,
    /// Digit prefixes whose permutations were enumerated.
    PrefixesSearched,
    /// Complete permutations visited by the permutation search.
    PermutationsVisited,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that increments the given counter every time it is reached.
    pub fn counting_predicate<C: WithStatistics + 'static>(
        counter: Counters,
    ) -> Box<dyn Predicate<C>> {
        Box::new(CountingPredicate { counter })
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Add `amount` to the specified counter.
    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Overwrite the specified counter.
    pub fn set(&mut self, counter: Counters, value: u64) {
        self.stats[counter as usize] = value;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter().filter(|&c| self.get(c) != 0) {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{:?}={}", counter, self.get(counter))?;
            first = false;
        }
        Ok(())
    }
}

/// Search contexts that carry a `Statistics`.
pub trait WithStatistics {
    fn statistics_mut(&mut self) -> &mut Statistics;
}

#[derive(Debug)]
struct CountingPredicate {
    counter: Counters,
}

impl<C: WithStatistics> Predicate<C> for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut C, _round: usize) -> PredicateResult {
        ctx.statistics_mut().increment(self.counter);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
