// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid geometry.
//!
//! - Grid: square container addressed by (row, col)
//! - Direction: the four clockwise headings used by the spiral walk

pub mod direction;
pub mod grid;

pub use direction::Direction;
pub use grid::Grid;
