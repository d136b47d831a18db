// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the memoized even/odd shuffle.

mod common;

use grid_digit_algos::shuffle::{shuffle, shuffle_str, shuffle_with_stats};
use grid_digit_algos::state::Counters;
use test_case::test_case;

#[test_case("012345", 1 => "024135")]
#[test_case("qwerty", 1 => "qetwry")]
#[test_case("012345", 2 => "043215")]
#[test_case("qwerty", 2 => "qtrewy")]
#[test_case("012345", 3 => "031425")]
#[test_case("qwerty", 3 => "qrwtey")]
#[test_case("qwerty", 0 => "qwerty")]
#[test_case("", 5 => "")]
#[test_case("a", 5 => "a")]
fn test_examples(text: &str, iterations: usize) -> String {
    shuffle_str(text, iterations)
}

/// Step-by-step reference without any memo.
fn naive(values: &[i64], iterations: usize) -> Vec<i64> {
    let mut current = values.to_vec();
    for _ in 0..iterations {
        let even = current.iter().step_by(2);
        let odd = current.iter().skip(1).step_by(2);
        current = even.chain(odd).copied().collect();
    }
    current
}

#[test]
fn test_matches_naive_iteration() {
    let mut rng = common::rng();
    for len in [2, 3, 7, 10, 31, 64] {
        let values: Vec<i64> = (0..len).collect();
        for iterations in [0, 1, 5, 17, 100, 257] {
            pretty_assertions::assert_eq!(
                shuffle(&values, iterations),
                naive(&values, iterations),
                "len={} iterations={}",
                len,
                iterations
            );
        }
        let random = common::random_values(&mut rng, len as usize, 0, 4);
        pretty_assertions::assert_eq!(shuffle(&random, 99), naive(&random, 99));
    }
}

#[test]
fn test_keeps_multiset() {
    let mut rng = common::rng();
    let values = common::random_values(&mut rng, 50, -10, 10);
    let shuffled = shuffle(&values, 12345);
    pretty_assertions::assert_eq!(shuffled.len(), values.len());
    pretty_assertions::assert_eq!(common::sorted(&shuffled), common::sorted(&values));
}

#[test]
fn test_huge_iteration_count() {
    let text: String = ('a'..='z').collect();
    let (result, stats) = shuffle_with_stats(&text.chars().collect::<Vec<_>>(), usize::MAX);
    let period = stats.get(Counters::CyclePeriod) as usize;
    assert!(period > 0);
    let expected = shuffle_str(&text, usize::MAX % period);
    pretty_assertions::assert_eq!(result.into_iter().collect::<String>(), expected);
    assert!(stats.get(Counters::ShuffleSteps) < 2 * period as u64);
}
