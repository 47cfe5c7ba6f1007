//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A cell on an N×N board, addressed by row and column.
///
/// Both coordinates are 0-based. Nothing here checks them against a board
/// size; the engine rejects out-of-range locations with
/// [`EngineError::OutOfRange`](super::EngineError::OutOfRange).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    /// Create a new location.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check that both coordinates fall inside a `size`×`size` board.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// On the top-left to bottom-right diagonal.
    #[must_use]
    pub const fn on_diagonal(self) -> bool {
        self.row == self.col
    }

    /// On the top-right to bottom-left diagonal of a `size`×`size` board.
    ///
    /// Off-board locations are never on it.
    #[must_use]
    pub const fn on_anti_diagonal(self, size: usize) -> bool {
        self.is_within(size) && self.col == size - 1 - self.row
    }
}

impl From<(usize, usize)> for Location {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
