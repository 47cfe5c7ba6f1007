//! Engine error types.
//!
//! Rejected moves (wrong turn, occupied cell) are ordinary
//! [`MoveOutcome`](crate::rules::MoveOutcome) values, not errors. Errors cover
//! misconfiguration and calls that break the engine's contract.

use derive_more::{Display, Error};

use super::location::Location;
use super::player::PlayerId;

/// Errors returned by engine construction and move application.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The configuration names zero players.
    #[display("a game needs at least 1 player")]
    NoPlayers,

    /// More players than a `PlayerId` can name.
    #[display("{players} players requested, at most 255 supported")]
    PlayerLimit { players: usize },

    /// The board is not larger than the player count.
    #[display("board size must exceed player count ({players} players on a {size}x{size} board)")]
    TooManyPlayers { size: usize, players: usize },

    /// The board is too large to index or allocate.
    #[display("a {size}x{size} board is too large to allocate")]
    SizeLimit { size: usize },

    /// A coordinate falls outside the board.
    #[display("location {location} is outside the {size}x{size} board")]
    OutOfRange { location: Location, size: usize },

    /// The player identifier names no seat in this game.
    #[display("{player} is not seated in a {players}-player game")]
    UnknownPlayer { player: PlayerId, players: usize },
}
