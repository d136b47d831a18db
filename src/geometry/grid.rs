// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Square grids.
//!
//! A `Grid` owns its rows as `Vec<Vec<T>>` so that callers can hand in or take
//! out plain nested vectors. The square shape is checked once, at construction,
//! and every operation on a `Grid` may rely on it afterwards.

use std::ops::{Index, IndexMut};

use crate::error::{Result, TaskError};

/// A square `size` × `size` grid addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    /// Wrap existing rows, checking that they form a square.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotSquare`] if any row's length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        check_square(&rows)?;
        Ok(Self { rows })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// True for the 0 × 0 grid.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell, or `None` if `(row, col)` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Give back the rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Rotate the grid a quarter turn clockwise, in place.
    pub fn rotate_clockwise(&mut self) {
        crate::rotate::rotate_square(&mut self.rows);
    }
}

impl<T: Clone> Grid<T> {
    /// A `size` × `size` grid with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            rows: vec![vec![value; size]; size],
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

impl<T> From<Grid<T>> for Vec<Vec<T>> {
    fn from(grid: Grid<T>) -> Self {
        grid.rows
    }
}

/// Check that `rows` has as many columns in every row as there are rows.
///
/// # Errors
///
/// Returns [`TaskError::NotSquare`] naming the first offending row.
pub(crate) fn check_square<T>(rows: &[Vec<T>]) -> Result<()> {
    let size = rows.len();
    match rows.iter().position(|r| r.len() != size) {
        Some(row) => Err(TaskError::NotSquare {
            rows: size,
            row,
            len: rows[row].len(),
        }),
        None => Ok(()),
    }
}
