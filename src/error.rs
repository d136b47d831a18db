// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for argument validation.
//!
//! Every fallible operation in this crate fails only for an invalid argument,
//! and fails before touching any caller data.

/// Result type for the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Invalid arguments rejected by the grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// A spiral was requested with a negative side length.
    #[error("Grid size must be non-negative, got {0}")]
    NegativeSize(i64),

    /// A grid operation was given rows that do not form a square.
    #[error("Grid is not square: row {row} has length {len} but there are {rows} rows")]
    NotSquare { rows: usize, row: usize, len: usize },
}
