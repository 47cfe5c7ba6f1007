//! Game rules: turn rotation, occupancy, line tallies, outcomes.
//!
//! [`BoardEngine`] is the single entry point. It classifies each move as
//! one of the [`MoveOutcome`] tags and keeps a [`LineTracker`] so a win is
//! detected from at most four tallies instead of a board rescan.

pub mod engine;
pub mod lines;
pub mod outcome;

pub use engine::BoardEngine;
pub use lines::{LineId, LineOwner, LineTally, LineTracker};
pub use outcome::{MoveOutcome, MoveResult};
