//! Entity data shapes.
//!
//! Entities are plain data with no behavior. Game logic lives in the
//! simulation systems, which replace the whole `GameState` each tick.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Point};

/// A passive defended structure. Destroyed cities stay in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: EntityId,
    pub pos: Point,
    pub destroyed: bool,
}

/// A player structure that fires interceptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub id: EntityId,
    pub pos: Point,
    pub ammo: u32,
    pub max_ammo: u32,
    pub destroyed: bool,
}

/// An enemy projectile descending toward a fixed coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: EntityId,
    pub pos: Point,
    /// Position of the targeted city or battery, copied at spawn time.
    /// Never re-read from the structure afterward.
    pub target: Point,
    /// Units per tick.
    pub speed: f64,
    /// Heading at spawn (radians). Informational; movement re-aims every tick.
    pub angle: f64,
}

/// A player projectile flying from a battery to a tapped coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interceptor {
    pub id: EntityId,
    pub pos: Point,
    pub origin: Point,
    pub target: Point,
    /// Units per tick.
    pub speed: f64,
    /// Index of the firing battery in `GameState::batteries`.
    pub battery_index: usize,
}

/// A growing-then-shrinking damage region left by an arrived interceptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub id: EntityId,
    pub pos: Point,
    pub radius: f64,
    /// Fixed at creation from the power multiplier in effect at that tick.
    pub max_radius: f64,
    pub growing: bool,
    /// Opacity, also the shrink-phase lifetime counter.
    pub alpha: f64,
}

impl Battery {
    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }
}

impl City {
    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }
}
