//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. Identifiers are
//! 1-based: the raw value 0 is reserved for the empty cell and never names
//! a player.

use serde::{Deserialize, Serialize};

/// Largest player count the engine supports.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Player identifier supporting 1-255 players.
///
/// The first player is `PlayerId(1)`. Turn order rotates through
/// `PlayerId(1)..=PlayerId(players)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw 1-based player number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Check whether this ID names a seat in a game with `players` players.
    #[must_use]
    pub const fn is_seated(self, players: usize) -> bool {
        self.0 != 0 && self.get() <= players
    }

    /// The player expected to move on the given 1-based move counter.
    ///
    /// `players` must be in `1..=MAX_PLAYERS`.
    ///
    /// ```
    /// use n_in_a_row::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_move(1, 3), PlayerId::new(1));
    /// assert_eq!(PlayerId::for_move(3, 3), PlayerId::new(3));
    /// assert_eq!(PlayerId::for_move(4, 3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn for_move(move_count: usize, players: usize) -> Self {
        Self(((move_count.saturating_sub(1) % players) + 1) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use n_in_a_row::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count.min(MAX_PLAYERS) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
