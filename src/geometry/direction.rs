// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Headings used when walking a grid.
//!
//! The four headings form a cycle in clockwise order: right, down, left, up.
//! Each heading is an index into a fixed table of unit deltas, and turning is
//! a step modulo 4 through that table.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Unit `(row, col)` deltas, indexed by `Direction as usize`.
const DELTAS: [(isize, isize); Direction::COUNT] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A heading on a grid, in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    const CLOCKWISE: [Direction; Direction::COUNT] =
        [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

    /// The heading after a quarter turn clockwise.
    pub fn next_clockwise(self) -> Self {
        Self::CLOCKWISE[(self as usize + 1) % Self::COUNT]
    }

    /// Unit `(row, col)` delta for this heading.
    pub fn delta(self) -> (isize, isize) {
        DELTAS[self as usize]
    }

    /// Step from `(row, col)` one cell in this heading.
    ///
    /// Returns `None` if the step leaves a `size` × `size` grid.
    pub fn step(self, (row, col): (usize, usize), size: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let row = row.checked_add_signed(dr).filter(|&r| r < size)?;
        let col = col.checked_add_signed(dc).filter(|&c| c < size)?;
        Some((row, col))
    }
}
