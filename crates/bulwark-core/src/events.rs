//! Events emitted by the simulation for audio and overlay feedback.
//!
//! Events describe what happened during a tick; nothing reads them back.

use serde::{Deserialize, Serialize};

use crate::enums::Structure;
use crate::types::{EntityId, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A rocket entered at the top edge.
    RocketSpawned { id: EntityId, pos: Point, target: Point },
    /// A battery fired.
    InterceptorLaunched {
        id: EntityId,
        battery_index: usize,
        target: Point,
    },
    /// An interceptor arrived and left an explosion.
    Detonation {
        id: EntityId,
        pos: Point,
        max_radius: f64,
    },
    /// A rocket was caught in an explosion.
    RocketDestroyed { id: EntityId, pos: Point },
    /// A rocket reached its target. `structure` is `None` when the target
    /// coordinate matches no city or battery.
    Impact {
        id: EntityId,
        pos: Point,
        structure: Option<Structure>,
    },
    /// Score crossed into a new level; threats were cleared.
    LevelUp { level: u32 },
    Won { score: u32 },
    Lost { score: u32 },
}
