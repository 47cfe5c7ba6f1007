//! The board engine: move validation, incremental win detection, reset.
//!
//! `BoardEngine` owns the grid, the turn counter and the line tallies. Every
//! accepted move writes both the grid and the tallies, so the two never
//! drift apart.
//!
//! ## Move pipeline
//!
//! Each step short-circuits the rest:
//!
//! 1. Contract checks: the player must be seated, the location on the board
//!    (violations are `Err`, state unchanged)
//! 2. Turn check: `move_count % P == player % P`, else `IncorrectPlayer`
//! 3. Occupancy check, else `SpaceTaken`
//! 4. Commit the cell and update the tallies of the lines through it
//! 5. From move `(N - 1) * P + 1` on: `Winner` if a line through the cell is
//!    full and owned by the mover, `Draw` if this was move `N * N`
//! 6. Advance the move counter

use tracing::{debug, info, instrument};

use super::lines::{LineId, LineTally, LineTracker};
use super::outcome::{MoveOutcome, MoveResult};
use crate::core::{Board, BoardConfig, EngineError, Location, PlayerId};

/// Generalized N-in-a-row engine for one game session.
///
/// Not internally synchronized: callers sharing an engine across threads
/// wrap it in a lock.
///
/// ## Example
///
/// ```
/// use n_in_a_row::core::{Location, PlayerId};
/// use n_in_a_row::rules::{BoardEngine, MoveOutcome};
///
/// let mut engine = BoardEngine::classic();
/// let p1 = PlayerId::new(1);
/// let p2 = PlayerId::new(2);
///
/// let result = engine.apply_move(p1, Location::new(1, 1)).unwrap();
/// assert_eq!(result.outcome, MoveOutcome::Valid);
///
/// // Same cell again
/// let result = engine.apply_move(p2, Location::new(1, 1)).unwrap();
/// assert_eq!(result.outcome, MoveOutcome::SpaceTaken);
///
/// // Player 2 still has the turn
/// let result = engine.apply_move(p1, Location::new(0, 0)).unwrap();
/// assert_eq!(result.outcome, MoveOutcome::IncorrectPlayer);
/// ```
#[derive(Clone, Debug)]
pub struct BoardEngine {
    config: BoardConfig,
    board: Board,
    lines: LineTracker,
    /// 1-based number of the next move.
    move_count: usize,
}

impl BoardEngine {
    /// Create an engine for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, see
    /// [`BoardConfig::validate`], or [`EngineError::SizeLimit`] if the board
    /// cannot be allocated.
    pub fn new(config: BoardConfig) -> Result<Self, EngineError> {
        config.validate()?;
        debug!(size = config.size, players = config.players, "creating board engine");

        Ok(Self {
            config,
            board: Board::try_new(config.size)?,
            lines: LineTracker::try_new(config.size)?,
            move_count: 1,
        })
    }

    /// Create an engine for a `size`×`size` board and `players` players.
    ///
    /// # Errors
    ///
    /// Fails unless `1 <= players < size`, `players <= 255` and the board
    /// fits in memory.
    pub fn with_size(size: usize, players: usize) -> Result<Self, EngineError> {
        Self::new(BoardConfig::new(size, players))
    }

    /// The classic 3×3 game for two players.
    #[must_use]
    pub fn classic() -> Self {
        let config = BoardConfig::classic();
        Self {
            config,
            board: Board::new(config.size),
            lines: LineTracker::new(config.size),
            move_count: 1,
        }
    }

    /// Submit a move and classify it.
    ///
    /// Rejected moves (`IncorrectPlayer`, `SpaceTaken`) leave every piece of
    /// state untouched.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnknownPlayer`] if `player` is not in `1..=players`
    /// - [`EngineError::OutOfRange`] if `location` is off the board
    ///
    /// State is unchanged on error.
    #[instrument(level = "trace", skip(self), fields(move_count = self.move_count))]
    pub fn apply_move(
        &mut self,
        player: PlayerId,
        location: Location,
    ) -> Result<MoveResult, EngineError> {
        let players = self.config.players;
        if !player.is_seated(players) {
            return Err(EngineError::UnknownPlayer { player, players });
        }
        let index = self
            .board
            .index_of(location)
            .ok_or(EngineError::OutOfRange {
                location,
                size: self.config.size,
            })?;

        if self.move_count % players != player.get() % players {
            debug!(%player, expected = %self.current_player(), "move rejected: not this player's turn");
            return Ok(MoveResult::new(player, location, MoveOutcome::IncorrectPlayer));
        }

        if let Some(occupant) = self.board.get(location) {
            debug!(%player, %location, %occupant, "move rejected: space taken");
            return Ok(MoveResult::new(player, location, MoveOutcome::SpaceTaken));
        }

        self.board.place(index, player);
        self.lines.record(location, player);

        let result = if self.move_count >= self.config.min_moves_to_win() {
            self.evaluate(player, location)
        } else {
            MoveResult::new(player, location, MoveOutcome::Valid)
        };

        self.move_count += 1;
        Ok(result)
    }

    /// Classify a committed move against the tallies.
    fn evaluate(&self, player: PlayerId, location: Location) -> MoveResult {
        if let Some(line) = self.lines.completed_line(location, player) {
            info!(%player, %line, move_count = self.move_count, "line completed");
            return MoveResult::winner(player, location, line);
        }

        if self.move_count == self.config.cell_count() {
            info!(move_count = self.move_count, "board full, game drawn");
            return MoveResult::new(player, location, MoveOutcome::Draw);
        }

        MoveResult::new(player, location, MoveOutcome::Valid)
    }

    /// Return to the initial state: empty board, zeroed tallies, move 1.
    ///
    /// Storage is reused.
    pub fn reset(&mut self) {
        debug!(move_count = self.move_count, "resetting board engine");
        self.board.clear();
        self.lines.clear();
        self.move_count = 1;
    }

    // === Inspection ===

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Side length `N` of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.config.size
    }

    /// Number of players `P`.
    #[must_use]
    pub fn players(&self) -> usize {
        self.config.players
    }

    /// Number of the next move (starts at 1, counts accepted moves only).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::for_move(self.move_count, self.config.players)
    }

    /// First move number on which a win can be reported.
    #[must_use]
    pub fn min_moves_to_win(&self) -> usize {
        self.config.min_moves_to_win()
    }

    /// The cell grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupant of a cell.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfRange`] if `location` is off the board.
    pub fn cell(&self, location: Location) -> Result<Option<PlayerId>, EngineError> {
        if !location.is_within(self.config.size) {
            return Err(EngineError::OutOfRange {
                location,
                size: self.config.size,
            });
        }
        Ok(self.board.get(location))
    }

    /// Tally of one line, or `None` if its row or column index is not below
    /// `size()`.
    #[must_use]
    pub fn line(&self, line: LineId) -> Option<&LineTally> {
        self.lines.tally(line)
    }

    /// All line tallies.
    #[must_use]
    pub fn lines(&self) -> &LineTracker {
        &self.lines
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::lines::LineOwner;

    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    fn loc(row: usize, col: usize) -> Location {
        Location::new(row, col)
    }

    #[test]
    fn test_new_engine_state() {
        let engine = BoardEngine::with_size(5, 3).unwrap();
        assert_eq!(engine.size(), 5);
        assert_eq!(engine.players(), 3);
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.current_player(), P1);
        assert_eq!(engine.min_moves_to_win(), 13);
        assert_eq!(engine.board().occupied(), 0);
        assert_eq!(engine.lines().iter().count(), 12);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            BoardEngine::with_size(3, 3).unwrap_err(),
            EngineError::TooManyPlayers { size: 3, players: 3 }
        );
        assert_eq!(BoardEngine::with_size(3, 0).unwrap_err(), EngineError::NoPlayers);
    }

    #[test]
    fn test_oversized_board_is_error() {
        assert_eq!(
            BoardEngine::with_size(usize::MAX, 2).unwrap_err(),
            EngineError::SizeLimit { size: usize::MAX }
        );

        // N * N fits in usize, the allocation does not
        let size = 1usize << (usize::BITS / 2 - 1);
        assert_eq!(
            BoardEngine::with_size(size, 2).unwrap_err(),
            EngineError::SizeLimit { size }
        );
    }

    #[test]
    fn test_default_is_classic() {
        let engine = BoardEngine::default();
        assert_eq!(*engine.config(), BoardConfig::classic());
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_valid_move_updates_state() {
        let mut engine = BoardEngine::classic();
        let result = engine.apply_move(P1, loc(1, 1)).unwrap();

        assert_eq!(result, MoveResult::new(P1, loc(1, 1), MoveOutcome::Valid));
        assert_eq!(engine.move_count(), 2);
        assert_eq!(engine.current_player(), P2);
        assert_eq!(engine.cell(loc(1, 1)), Ok(Some(P1)));

        for line in [LineId::Row(1), LineId::Column(1), LineId::Diagonal, LineId::AntiDiagonal] {
            let tally = engine.line(line).unwrap();
            assert_eq!(tally.owner, LineOwner::Owned(P1));
            assert_eq!(tally.filled, 1);
        }
        assert_eq!(engine.line(LineId::Row(0)).unwrap().filled, 0);
    }

    #[test]
    fn test_line_past_the_board_is_none() {
        let mut engine = BoardEngine::classic();
        engine.apply_move(P1, loc(0, 1)).unwrap();

        assert_eq!(engine.line(LineId::Row(4)), None);
        assert_eq!(engine.line(LineId::Row(3)), None);
        assert_eq!(engine.line(LineId::Column(3)), None);
        assert_eq!(
            engine.line(LineId::Column(1)).map(|t| t.owner),
            Some(LineOwner::Owned(P1))
        );
    }

    #[test]
    fn test_wrong_turn_changes_nothing() {
        let mut engine = BoardEngine::classic();
        let before = engine.clone();

        let result = engine.apply_move(P2, loc(0, 0)).unwrap();

        assert_eq!(result.outcome, MoveOutcome::IncorrectPlayer);
        assert_eq!(engine.board(), before.board());
        assert_eq!(engine.lines(), before.lines());
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_space_taken_changes_nothing() {
        let mut engine = BoardEngine::classic();
        engine.apply_move(P1, loc(0, 0)).unwrap();
        let before = engine.clone();

        let result = engine.apply_move(P2, loc(0, 0)).unwrap();

        assert_eq!(result.outcome, MoveOutcome::SpaceTaken);
        assert_eq!(engine.cell(loc(0, 0)), Ok(Some(P1)));
        assert_eq!(engine.board(), before.board());
        assert_eq!(engine.lines(), before.lines());
        assert_eq!(engine.move_count(), 2);
    }

    #[test]
    fn test_turn_check_precedes_occupancy_check() {
        let mut engine = BoardEngine::classic();
        engine.apply_move(P1, loc(0, 0)).unwrap();

        // Occupied cell, wrong player: the turn check answers first
        let result = engine.apply_move(P1, loc(0, 0)).unwrap();
        assert_eq!(result.outcome, MoveOutcome::IncorrectPlayer);
    }

    #[test]
    fn test_out_of_range_is_error() {
        let mut engine = BoardEngine::classic();
        let err = engine.apply_move(P1, loc(3, 0)).unwrap_err();
        assert_eq!(err, EngineError::OutOfRange { location: loc(3, 0), size: 3 });
        assert_eq!(engine.move_count(), 1);

        assert!(engine.cell(loc(0, 7)).is_err());
    }

    #[test]
    fn test_unknown_player_is_error() {
        let mut engine = BoardEngine::classic();
        assert_eq!(
            engine.apply_move(PlayerId::new(0), loc(0, 0)),
            Err(EngineError::UnknownPlayer { player: PlayerId::new(0), players: 2 })
        );
        assert_eq!(
            engine.apply_move(PlayerId::new(3), loc(0, 0)),
            Err(EngineError::UnknownPlayer { player: PlayerId::new(3), players: 2 })
        );
        assert_eq!(engine.board().occupied(), 0);
    }

    #[test]
    fn test_winner_carries_line() {
        let mut engine = BoardEngine::classic();
        engine.apply_move(P1, loc(0, 0)).unwrap();
        engine.apply_move(P2, loc(1, 0)).unwrap();
        engine.apply_move(P1, loc(0, 1)).unwrap();
        engine.apply_move(P2, loc(1, 1)).unwrap();
        let result = engine.apply_move(P1, loc(0, 2)).unwrap();

        assert_eq!(result.outcome, MoveOutcome::Winner);
        assert_eq!(result.winning_line, Some(LineId::Row(0)));
        assert_eq!(result.player, P1);
        assert_eq!(result.location, loc(0, 2));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut engine = BoardEngine::classic();
        engine.apply_move(P1, loc(0, 0)).unwrap();
        engine.apply_move(P2, loc(1, 1)).unwrap();

        engine.reset();

        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.board(), &Board::new(3));
        assert_eq!(engine.lines(), &LineTracker::new(3));
        assert_eq!(engine.current_player(), P1);
    }
}
