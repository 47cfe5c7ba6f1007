//! Move outcomes.

use serde::{Deserialize, Serialize};

use super::lines::LineId;
use crate::core::{Location, PlayerId};

/// Classification of one submitted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Not this player's turn. Nothing changed.
    IncorrectPlayer,
    /// The cell is already occupied. Nothing changed.
    SpaceTaken,
    /// The move was placed and the game goes on.
    Valid,
    /// The move was placed and completed a line for the mover.
    Winner,
    /// The move filled the board without completing a line.
    Draw,
}

impl MoveOutcome {
    /// Check if the move was refused (board and turn unchanged).
    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(self, MoveOutcome::IncorrectPlayer | MoveOutcome::SpaceTaken)
    }

    /// Check if the move ended the game.
    #[must_use]
    pub fn is_game_over(self) -> bool {
        matches!(self, MoveOutcome::Winner | MoveOutcome::Draw)
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MoveOutcome::IncorrectPlayer => "incorrect player",
            MoveOutcome::SpaceTaken => "space taken",
            MoveOutcome::Valid => "valid",
            MoveOutcome::Winner => "winner",
            MoveOutcome::Draw => "draw",
        };
        f.write_str(text)
    }
}

/// Result of one `apply_move` call.
///
/// Echoes the submitted player and location back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    /// The player who submitted the move.
    pub player: PlayerId,

    /// Where the move was aimed.
    pub location: Location,

    /// What happened.
    pub outcome: MoveOutcome,

    /// The completed line. Set only when `outcome` is `Winner`.
    pub winning_line: Option<LineId>,
}

impl MoveResult {
    /// Create a result without a winning line.
    #[must_use]
    pub fn new(player: PlayerId, location: Location, outcome: MoveOutcome) -> Self {
        Self {
            player,
            location,
            outcome,
            winning_line: None,
        }
    }

    /// Create a `Winner` result for the completed line.
    #[must_use]
    pub fn winner(player: PlayerId, location: Location, line: LineId) -> Self {
        Self {
            player,
            location,
            outcome: MoveOutcome::Winner,
            winning_line: Some(line),
        }
    }
}
