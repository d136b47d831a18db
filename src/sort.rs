// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! In-place quicksort with Lomuto partitioning.
//!
//! The pivot is always the last element of the range being sorted. There is
//! no special handling of runs of equal keys or of presorted input, so those
//! inputs cost O(n²) comparisons. That is a known property of this sort.
//!
//! The recursion goes into the smaller partition and loops over the larger
//! one, which keeps the stack O(log n) deep even when the partitions are as
//! lopsided as they get on sorted input.

/// Sort `values` ascending, in place. Not stable.
///
/// Values that do not compare (NaN) leave the result a permutation of the
/// input in an unspecified order.
///
/// # Example
///
/// ```
/// use grid_digit_algos::sort::sort_ascending;
///
/// let mut values = [-2, 9, 5, -3];
/// sort_ascending(&mut values);
/// assert_eq!(values, [-3, -2, 5, 9]);
/// ```
pub fn sort_ascending<T: PartialOrd>(values: &mut [T]) {
    let mut range = values;
    while range.len() > 1 {
        let current = std::mem::take(&mut range);
        let pivot = partition(current);
        let (left, rest) = current.split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            sort_ascending(left);
            range = right;
        } else {
            sort_ascending(right);
            range = left;
        }
    }
}

/// Lomuto partition around the last element.
///
/// Returns the pivot's final index: everything before it is strictly less,
/// everything after it is not.
fn partition<T: PartialOrd>(values: &mut [T]) -> usize {
    let last = values.len() - 1;
    let mut boundary = 0;
    for i in 0..last {
        if values[i] < values[last] {
            values.swap(i, boundary);
            boundary += 1;
        }
    }
    values.swap(boundary, last);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_examples() {
        let mut a = [2, 9, 5];
        sort_ascending(&mut a);
        assert_eq!(a, [2, 5, 9]);

        let mut b = [2, 9, 5, 9];
        sort_ascending(&mut b);
        assert_eq!(b, [2, 5, 9, 9]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: [i32; 0] = [];
        sort_ascending(&mut empty);

        let mut single = [7];
        sort_ascending(&mut single);
        assert_eq!(single, [7]);
    }

    #[test]
    fn test_sort_all_equal() {
        let mut values = vec![4; 100];
        sort_ascending(&mut values);
        assert_eq!(values, vec![4; 100]);
    }

    #[test]
    fn test_sort_reverse_sorted() {
        let mut values: Vec<i64> = (0..500).rev().collect();
        sort_ascending(&mut values);
        assert_eq!(values, (0..500).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_floats() {
        let mut values = [0.2, -0.1, 0.0, 3.5, -7.25];
        sort_ascending(&mut values);
        assert_eq!(values, [-7.25, -0.1, 0.0, 0.2, 3.5]);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut values = [3, 8, 1, 9, 5];
        let p = partition(&mut values);
        assert_eq!(values[p], 5);
        assert!(values[..p].iter().all(|&v| v < 5));
        assert!(values[p + 1..].iter().all(|&v| v >= 5));
    }
}
