//! Core engine types: players, locations, configuration, the cell grid, errors.
//!
//! These are the building blocks the rules layer works on. Nothing here knows
//! about turns or lines.

pub mod player;
pub mod location;
pub mod config;
pub mod board;
pub mod error;

pub use player::{PlayerId, MAX_PLAYERS};
pub use location::Location;
pub use config::BoardConfig;
pub use board::Board;
pub use error::EngineError;
