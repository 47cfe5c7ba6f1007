//! The cell grid.
//!
//! `Board` stores an N×N grid as one contiguous row-major buffer indexed by
//! `row * N + col`. `None` marks an empty cell. Cells only ever go from empty
//! to occupied; the only way back is [`Board::clear`], which reuses the
//! allocation.

use super::error::EngineError;
use super::location::Location;
use super::player::PlayerId;

/// Square grid of cells, each empty or owned by one player.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    /// Create an empty `size`×`size` board for a small, known-good size.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Create an empty `size`×`size` board, failing instead of aborting when
    /// the cell count overflows or the allocation is refused.
    pub(crate) fn try_new(size: usize) -> Result<Self, EngineError> {
        let count = size
            .checked_mul(size)
            .ok_or(EngineError::SizeLimit { size })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| EngineError::SizeLimit { size })?;
        cells.resize(count, None);
        Ok(Self { size, cells })
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat index of a location, or `None` if it lies off the board.
    #[must_use]
    pub fn index_of(&self, location: Location) -> Option<usize> {
        location
            .is_within(self.size)
            .then(|| location.row * self.size + location.col)
    }

    /// The occupant of a cell. `None` for empty or off-board cells.
    #[must_use]
    pub fn get(&self, location: Location) -> Option<PlayerId> {
        self.index_of(location).and_then(|i| self.cells[i])
    }

    /// Check whether an on-board cell is empty. Off-board cells are never empty.
    #[must_use]
    pub fn is_empty_at(&self, location: Location) -> bool {
        self.index_of(location)
            .is_some_and(|i| self.cells[i].is_none())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<PlayerId>]> {
        // chunks_exact(0) panics; a 0×0 board simply has no rows.
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Write a player into the cell at a flat index from [`index_of`](Self::index_of).
    pub(crate) fn place(&mut self, index: usize, player: PlayerId) {
        debug_assert!(self.cells[index].is_none(), "cell {} already occupied", index);
        self.cells[index] = Some(player);
    }

    /// Empty every cell without reallocating.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(player) => player.0.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
