//! Board configuration.
//!
//! Games configure the engine at startup with a `BoardConfig`: the side
//! length `N` of the square board and the number of players `P`. A line of
//! `N` cells wins, so the board must be strictly larger than the player
//! count or nobody could ever complete one.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::player::MAX_PLAYERS;

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use n_in_a_row::core::BoardConfig;
///
/// let config = BoardConfig::classic().with_size(5).with_players(3);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cell_count(), 25);
/// assert_eq!(config.min_moves_to_win(), 13);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Side length `N` of the square board (also the winning line length).
    pub size: usize,

    /// Number of players `P` (1-255, and `P < N`).
    pub players: usize,
}

impl BoardConfig {
    /// Classic tic-tac-toe board size.
    pub const CLASSIC_SIZE: usize = 3;

    /// Classic tic-tac-toe player count.
    pub const CLASSIC_PLAYERS: usize = 2;

    /// Create a new configuration. Call [`validate`](Self::validate) before use.
    #[must_use]
    pub const fn new(size: usize, players: usize) -> Self {
        Self { size, players }
    }

    /// The 3×3, 2-player game.
    #[must_use]
    pub const fn classic() -> Self {
        Self::new(Self::CLASSIC_SIZE, Self::CLASSIC_PLAYERS)
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the player count.
    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Check that the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoPlayers`] if `players == 0`
    /// - [`EngineError::PlayerLimit`] if `players > 255`
    /// - [`EngineError::TooManyPlayers`] if `players >= size`
    /// - [`EngineError::SizeLimit`] if the `N * N` cells overflow `usize`
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.players == 0 {
            return Err(EngineError::NoPlayers);
        }
        if self.players > MAX_PLAYERS {
            return Err(EngineError::PlayerLimit {
                players: self.players,
            });
        }
        if self.players >= self.size {
            return Err(EngineError::TooManyPlayers {
                size: self.size,
                players: self.players,
            });
        }
        // N * N bounds every derived count once P < N
        if self.size.checked_mul(self.size).is_none() {
            return Err(EngineError::SizeLimit { size: self.size });
        }
        Ok(())
    }

    /// Number of cells on the board (`N * N`), which is also the move count
    /// of the final move.
    ///
    /// Saturates for sizes [`validate`](Self::validate) rejects.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size.saturating_mul(self.size)
    }

    /// First move number on which a win is possible: `(N - 1) * P + 1`.
    ///
    /// Player 1 places its `N`-th mark on this move.
    #[must_use]
    pub const fn min_moves_to_win(&self) -> usize {
        self.size
            .saturating_sub(1)
            .saturating_mul(self.players)
            .saturating_add(1)
    }

    /// Number of line accumulators: `N` rows, `N` columns, two diagonals.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.size.saturating_mul(2).saturating_add(2)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_config() {
        let config = BoardConfig::classic();
        assert_eq!(config.size, 3);
        assert_eq!(config.players, 2);
        assert_eq!(config, BoardConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_count(), 9);
        assert_eq!(config.min_moves_to_win(), 5);
        assert_eq!(config.line_count(), 8);
    }

    #[test]
    fn test_config_builder() {
        let config = BoardConfig::classic().with_size(10).with_players(4);
        assert_eq!(config, BoardConfig::new(10, 4));
        assert_eq!(config.min_moves_to_win(), 37);
        assert_eq!(config.line_count(), 22);
    }

    #[test]
    fn test_config_zero_players() {
        assert_eq!(BoardConfig::new(3, 0).validate(), Err(EngineError::NoPlayers));
    }

    #[test]
    fn test_config_too_many_players() {
        assert_eq!(
            BoardConfig::new(3, 3).validate(),
            Err(EngineError::TooManyPlayers { size: 3, players: 3 })
        );
        assert_eq!(
            BoardConfig::new(2, 5).validate(),
            Err(EngineError::TooManyPlayers { size: 2, players: 5 })
        );
        assert!(BoardConfig::new(4, 3).validate().is_ok());
    }

    #[test]
    fn test_config_player_limit() {
        assert_eq!(
            BoardConfig::new(1000, 256).validate(),
            Err(EngineError::PlayerLimit { players: 256 })
        );
        assert!(BoardConfig::new(1000, 255).validate().is_ok());
    }

    #[test]
    fn test_config_size_limit() {
        assert_eq!(
            BoardConfig::new(usize::MAX, 2).validate(),
            Err(EngineError::SizeLimit { size: usize::MAX })
        );
        let past_limit = (1usize << (usize::BITS / 2)) + 1;
        assert_eq!(
            BoardConfig::new(past_limit, 2).validate(),
            Err(EngineError::SizeLimit { size: past_limit })
        );

        // Derived counts saturate instead of overflowing
        let config = BoardConfig::new(usize::MAX, 2);
        assert_eq!(config.cell_count(), usize::MAX);
        assert_eq!(config.min_moves_to_win(), usize::MAX);
        assert_eq!(config.line_count(), usize::MAX);
    }

    #[test]
    fn test_single_player_config() {
        let config = BoardConfig::new(2, 1);
        assert!(config.validate().is_ok());
        assert_eq!(config.min_moves_to_win(), 2);
    }

    #[test]
    fn test_config_serialization() {
        let config = BoardConfig::new(7, 3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_partial_deserialization() {
        let config: BoardConfig = serde_json::from_str(r#"{"size": 6}"#).unwrap();
        assert_eq!(config, BoardConfig::new(6, 2));

        let config: BoardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BoardConfig::classic());
    }
}
