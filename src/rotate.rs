// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Quarter-turn rotation of a square grid, in place.
//!
//! The rotation is the composition of two reflections, each done with swaps
//! on the caller's storage:
//!
//! 1. reflect across the anti-diagonal: `(i, j) <-> (n-1-j, n-1-i)`
//! 2. reflect top-to-bottom: row `i` <-> row `n-1-i`
//!
//! Together a value at `(i, j)` ends at `(j, n-1-i)`, which is a clockwise
//! quarter turn. No second grid is allocated; the row swaps in step 2 only
//! exchange the row handles.

use crate::error::Result;
use crate::geometry::grid::check_square;

/// Rotate `rows` a quarter turn clockwise, in place.
///
/// # Errors
///
/// Returns [`TaskError::NotSquare`](crate::error::TaskError::NotSquare) if the
/// rows do not form a square; `rows` is left untouched in that case.
///
/// # Example
///
/// ```
/// use grid_digit_algos::rotate::rotate_clockwise;
///
/// let mut rows = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
/// rotate_clockwise(&mut rows).unwrap();
/// assert_eq!(rows, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
/// ```
pub fn rotate_clockwise<T>(rows: &mut [Vec<T>]) -> Result<()> {
    check_square(rows)?;
    rotate_square(rows);
    Ok(())
}

/// Rotate rows already known to be square.
pub(crate) fn rotate_square<T>(rows: &mut [Vec<T>]) {
    let n = rows.len();

    for i in 0..n {
        for j in 0..n - i {
            swap_cells(rows, (i, j), (n - 1 - j, n - 1 - i));
        }
    }

    for i in 0..n / 2 {
        rows.swap(i, n - 1 - i);
    }
}

/// Swap two cells that may lie in different rows.
fn swap_cells<T>(rows: &mut [Vec<T>], (r1, c1): (usize, usize), (r2, c2): (usize, usize)) {
    if r1 == r2 {
        rows[r1].swap(c1, c2);
        return;
    }
    let (low, high) = if r1 < r2 { ((r1, c1), (r2, c2)) } else { ((r2, c2), (r1, c1)) };
    let (top, bottom) = rows.split_at_mut(high.0);
    std::mem::swap(&mut top[low.0][low.1], &mut bottom[0][high.1]);
}
