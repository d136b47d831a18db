// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed so randomized checks are reproducible.
pub const SEED: u64 = 0x5EED_2025;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Random vector of `len` values in `lo..hi`.
pub fn random_values(rng: &mut StdRng, len: usize, lo: i64, hi: i64) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(lo..hi)).collect()
}

/// Random `n` × `n` grid of values in `0..1000`.
pub fn random_square(rng: &mut StdRng, n: usize) -> Vec<Vec<u32>> {
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(0..1000)).collect())
        .collect()
}

/// Cells of an `n` × `n` grid in clockwise spiral order, walked by peeling
/// layers rather than by following a heading.
pub fn spiral_order(n: usize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(n * n);
    let (mut top, mut left) = (0usize, 0usize);
    let (mut bottom, mut right) = (n as isize - 1, n as isize - 1);
    while top as isize <= bottom && left as isize <= right {
        let (b, r) = (bottom as usize, right as usize);
        for col in left..=r {
            order.push((top, col));
        }
        for row in top + 1..=b {
            order.push((row, r));
        }
        if top < b {
            for col in (left..r).rev() {
                order.push((b, col));
            }
        }
        if left < r {
            for row in (top + 1..b).rev() {
                order.push((row, left));
            }
        }
        top += 1;
        left += 1;
        bottom -= 1;
        right -= 1;
    }
    order
}

/// Sorted copy, for multiset comparisons.
pub fn sorted<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut copy = values.to_vec();
    copy.sort();
    copy
}

/// Decimal digits of `n`, sorted.
pub fn digit_multiset(n: u64) -> Vec<u8> {
    sorted(&n.to_string().bytes().collect::<Vec<_>>())
}

/// Nearest greater digit permutation by brute force over every permutation
/// of the full digit string.
pub fn brute_force_nearest_greater(n: u64) -> u64 {
    let digits: Vec<u8> = n.to_string().bytes().collect();
    let mut best: Option<u64> = None;
    let mut current = digits.clone();
    permute(&mut current, 0, &mut |perm| {
        if perm[0] == b'0' && perm.len() > 1 {
            return;
        }
        let value: u64 = std::str::from_utf8(perm).unwrap().parse().unwrap();
        if value > n && best.map_or(true, |b| value < b) {
            best = Some(value);
        }
    });
    best.unwrap_or(n)
}

fn permute(values: &mut [u8], k: usize, visit: &mut dyn FnMut(&[u8])) {
    if k == values.len() {
        visit(values);
        return;
    }
    for i in k..values.len() {
        values.swap(k, i);
        permute(values, k + 1, visit);
        values.swap(k, i);
    }
}
