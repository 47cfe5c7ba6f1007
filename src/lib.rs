//! # n-in-a-row
//!
//! A generalized N-in-a-row board engine: any square board size, any number
//! of players smaller than the board size.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Turn rotation works for any player count.
//!    No convenience paths that assume 2 players.
//!
//! 2. **Incremental Win Detection**: Each row, column and diagonal keeps a
//!    running tally (owner, filled count). A move touches at most four
//!    tallies, so detecting a win costs O(1) regardless of board size.
//!
//! 3. **Explicit Outcomes**: Every move returns a [`MoveOutcome`]. Contract
//!    violations (unknown player, off-board location, bad configuration)
//!    are [`EngineError`]s, never panics or silent corruption.
//!
//! ## Modules
//!
//! - `core`: Players, locations, configuration, the cell grid, errors
//! - `rules`: Line tallies, move outcomes, and the `BoardEngine`
//!
//! ## Example
//!
//! ```
//! use n_in_a_row::{BoardEngine, Location, MoveOutcome, PlayerId};
//!
//! let mut engine = BoardEngine::with_size(4, 3).unwrap();
//! let result = engine.apply_move(PlayerId::new(1), Location::new(0, 0)).unwrap();
//! assert_eq!(result.outcome, MoveOutcome::Valid);
//! assert_eq!(engine.current_player(), PlayerId::new(2));
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, BoardConfig, EngineError, Location, PlayerId, MAX_PLAYERS};

pub use crate::rules::{
    BoardEngine, LineId, LineOwner, LineTally, LineTracker, MoveOutcome, MoveResult,
};
