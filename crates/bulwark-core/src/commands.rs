//! Player commands sent from the input producer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, never mid-tick.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the start screen with a freshly initialized state.
    Start,
    /// Reinitialize the whole session from a terminal or start status.
    Restart,
    /// Fire at a point already translated into logical canvas coordinates.
    Fire { x: f64, y: f64 },
}
