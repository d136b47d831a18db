// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Clockwise spiral fill.
//!
//! The walk starts in the top-left corner heading right, writes a counter into
//! each cell, and turns clockwise whenever the next cell would leave the grid
//! or land on a cell that is already written. Zero marks an unwritten cell,
//! which is why the counter starts at 1.

use tracing::trace;

use crate::error::{Result, TaskError};
use crate::geometry::{Direction, Grid};

/// Build a `size` × `size` grid holding `1..=size²` in clockwise spiral order.
///
/// # Errors
///
/// Returns [`TaskError::NegativeSize`] if `size` is negative.
///
/// # Example
///
/// ```
/// use grid_digit_algos::spiral;
///
/// let grid = spiral::fill(3).unwrap();
/// assert_eq!(grid.into_rows(), vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]);
/// ```
pub fn fill(size: i64) -> Result<Grid<u64>> {
    let size = usize::try_from(size).map_err(|_| TaskError::NegativeSize(size))?;
    Ok(fill_unchecked(size))
}

/// Spiral fill for a size that is already known to be valid.
pub fn fill_unchecked(size: usize) -> Grid<u64> {
    let mut grid = Grid::filled(size, 0u64);
    let cells = size * size;

    let mut position = (0, 0);
    let mut heading = Direction::Right;

    for value in 1..=cells as u64 {
        grid[position] = value;

        let blocked = match heading.step(position, size) {
            Some(next) => grid[next] != 0,
            None => true,
        };
        if blocked {
            heading = heading.next_clockwise();
            trace!(value, ?position, ?heading, "turn");
        }

        // After the last write the step may be blocked; nothing reads it.
        position = heading.step(position, size).unwrap_or(position);
    }

    grid
}
