// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for in-place permutation search.
//!
//! Every change the search makes to its working sequence is a swap of two
//! positions, and a swap is its own inverse. The trail therefore records only
//! the pair of positions; rewinding replays the recorded swaps in reverse
//! order, which restores the sequence exactly as it was at the checkpoint.
//!
//! Checkpoints are plain trail lengths, so nested checkpoints cost nothing.

/// A single entry in the trail, recording one swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    a: usize,
    b: usize,
}

/// The trail of swaps applied since the search began.
///
/// # Memory Model
///
/// The trail holds at most one entry per position being permuted along the
/// current search path, so its size is bounded by the sequence length.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trail with room for `capacity` swaps.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record a checkpoint for later backtracking.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Swap `values[a]` and `values[b]`, recording the swap.
    ///
    /// Swapping a position with itself changes nothing and is not recorded.
    pub fn swap<T>(&mut self, values: &mut [T], a: usize, b: usize) {
        if a == b {
            return;
        }
        values.swap(a, b);
        self.entries.push(TrailEntry { a, b });
    }

    /// Undo every swap recorded after `checkpoint`.
    ///
    /// Rewinding to a checkpoint at or beyond the current length does nothing.
    pub fn rewind_to<T>(&mut self, checkpoint: usize, values: &mut [T]) {
        while self.entries.len() > checkpoint {
            if let Some(TrailEntry { a, b }) = self.entries.pop() {
                values.swap(a, b);
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
