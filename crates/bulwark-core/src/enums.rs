//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game status.
///
/// `Start -> Playing -> {Won, Lost}`; a restart leads back to `Playing` from
/// any status except `Playing` itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Start,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether this status can only be left by a full restart.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Whether firing spends battery ammo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmmoPolicy {
    /// Firing never consumes ammo; the HUD shows "∞".
    #[default]
    Unlimited,
    /// Each shot spends one round; an empty battery cannot fire.
    Consume,
}

/// A defended structure hit by a rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index")]
pub enum Structure {
    City(usize),
    Battery(usize),
}
