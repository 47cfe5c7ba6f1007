//! Incremental per-line tallies for O(1) win detection.
//!
//! Every row, column and both full-length diagonals get one [`LineTally`].
//! Each placed mark updates the (at most four) tallies of the lines through
//! its cell. A line is won exactly when its tally is full and still owned by
//! a single player, so checking a move never rescans the board.
//!
//! ## Slot layout
//!
//! For an N×N board the tracker holds `2N + 2` tallies:
//!
//! | Slots        | Lines                         |
//! |--------------|-------------------------------|
//! | `0..N`       | rows                          |
//! | `N..2N`      | columns                       |
//! | `2N`         | main diagonal (`row == col`)  |
//! | `2N + 1`     | anti-diagonal (`row + col == N - 1`) |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineError, Location, PlayerId};

/// One of the lines a player can win with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineId {
    /// Row by index.
    Row(usize),
    /// Column by index.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl LineId {
    /// Lines crossing a cell, in row, column, diagonal, anti-diagonal order.
    ///
    /// Every cell lies on its row and column. The center of an odd board lies
    /// on both diagonals.
    ///
    /// ```
    /// use n_in_a_row::core::Location;
    /// use n_in_a_row::rules::LineId;
    ///
    /// let lines = LineId::through(Location::new(1, 1), 3);
    /// assert_eq!(
    ///     lines.as_slice(),
    ///     &[LineId::Row(1), LineId::Column(1), LineId::Diagonal, LineId::AntiDiagonal]
    /// );
    /// ```
    #[must_use]
    pub fn through(location: Location, size: usize) -> SmallVec<[LineId; 4]> {
        let mut lines = SmallVec::new();
        lines.push(LineId::Row(location.row));
        lines.push(LineId::Column(location.col));
        if location.on_diagonal() {
            lines.push(LineId::Diagonal);
        }
        if location.on_anti_diagonal(size) {
            lines.push(LineId::AntiDiagonal);
        }
        lines
    }

    /// Tally slot for this line on a `size`×`size` board, or `None` if the
    /// row or column index is not below `size`.
    #[must_use]
    pub const fn slot(self, size: usize) -> Option<usize> {
        match self {
            LineId::Row(r) if r < size => Some(r),
            LineId::Column(c) if c < size => size.checked_add(c),
            LineId::Row(_) | LineId::Column(_) => None,
            LineId::Diagonal => size.checked_mul(2),
            LineId::AntiDiagonal => match size.checked_mul(2) {
                Some(slot) => slot.checked_add(1),
                None => None,
            },
        }
    }

    /// The cells making up this line, in increasing row (then column) order.
    pub fn cells(self, size: usize) -> impl Iterator<Item = Location> {
        (0..size).map(move |i| match self {
            LineId::Row(r) => Location::new(r, i),
            LineId::Column(c) => Location::new(i, c),
            LineId::Diagonal => Location::new(i, i),
            LineId::AntiDiagonal => Location::new(i, size - 1 - i),
        })
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineId::Row(r) => write!(f, "row {}", r),
            LineId::Column(c) => write!(f, "column {}", c),
            LineId::Diagonal => write!(f, "diagonal"),
            LineId::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Who can still win a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineOwner {
    /// No cell on the line is occupied yet.
    #[default]
    Unclaimed,
    /// Every occupied cell belongs to this player.
    Owned(PlayerId),
    /// Two different players share the line; nobody can win it.
    /// Stays blocked until reset.
    Blocked,
}

/// Running state of one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineTally {
    /// Current owner.
    pub owner: LineOwner,
    /// Occupied cells on the line, counted even after it is blocked.
    pub filled: usize,
}

impl LineTally {
    /// Record a mark by `player` on this line.
    pub fn record(&mut self, player: PlayerId) {
        self.owner = match self.owner {
            LineOwner::Unclaimed => LineOwner::Owned(player),
            LineOwner::Owned(owner) if owner == player => LineOwner::Owned(owner),
            LineOwner::Owned(_) | LineOwner::Blocked => LineOwner::Blocked,
        };
        self.filled += 1;
    }

    /// Whether `player` holds every one of the `size` cells on this line.
    #[must_use]
    pub fn is_won_by(&self, player: PlayerId, size: usize) -> bool {
        self.filled == size && self.owner == LineOwner::Owned(player)
    }

    /// Whether no player can win this line any more.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.owner == LineOwner::Blocked
    }
}

/// All line tallies of one board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineTracker {
    size: usize,
    tallies: Vec<LineTally>,
}

impl LineTracker {
    /// Create zeroed tallies for a small, known-good size.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            tallies: vec![LineTally::default(); 2 * size + 2],
        }
    }

    /// Create zeroed tallies, failing instead of aborting when the slot
    /// count overflows or the allocation is refused.
    pub(crate) fn try_new(size: usize) -> Result<Self, EngineError> {
        let count = size
            .checked_mul(2)
            .and_then(|n| n.checked_add(2))
            .ok_or(EngineError::SizeLimit { size })?;
        let mut tallies = Vec::new();
        tallies
            .try_reserve_exact(count)
            .map_err(|_| EngineError::SizeLimit { size })?;
        tallies.resize(count, LineTally::default());
        Ok(Self { size, tallies })
    }

    /// Tally of one line, or `None` if the line is not on this board.
    #[must_use]
    pub fn tally(&self, line: LineId) -> Option<&LineTally> {
        line.slot(self.size).and_then(|slot| self.tallies.get(slot))
    }

    /// Iterate over every line with its tally, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (LineId, &LineTally)> {
        let size = self.size;
        (0..size)
            .map(LineId::Row)
            .chain((0..size).map(LineId::Column))
            .chain([LineId::Diagonal, LineId::AntiDiagonal])
            .zip(&self.tallies)
    }

    /// Record a mark by `player` at `location` on every line through it.
    ///
    /// The location must be on the board.
    pub(crate) fn record(&mut self, location: Location, player: PlayerId) {
        debug_assert!(location.is_within(self.size), "{} is off the board", location);
        for line in LineId::through(location, self.size) {
            if let Some(tally) = line.slot(self.size).and_then(|slot| self.tallies.get_mut(slot)) {
                tally.record(player);
            }
        }
    }

    /// First line through `location` that `player` has completed, if any.
    ///
    /// Only the lines through the last move can have changed, so this is
    /// at most four constant-time checks.
    #[must_use]
    pub fn completed_line(&self, location: Location, player: PlayerId) -> Option<LineId> {
        LineId::through(location, self.size)
            .into_iter()
            .find(|&line| {
                self.tally(line)
                    .is_some_and(|tally| tally.is_won_by(player, self.size))
            })
    }

    /// Zero every tally without reallocating.
    pub(crate) fn clear(&mut self) {
        self.tallies.fill(LineTally::default());
    }
}
