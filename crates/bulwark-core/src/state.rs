//! The game state aggregate: the complete value read by render and input
//! collaborators and replaced wholesale by every simulation step.

use serde::{Deserialize, Serialize};

use crate::config::Tuning;
use crate::entities::*;
use crate::enums::GameStatus;
use crate::types::{EntityId, Point};

/// Complete state of one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    /// Rockets destroyed this session. Drives power scaling; never reset by level-up.
    pub destroyed_count: u32,
    /// PLAYING ticks elapsed this session.
    pub tick: u64,
    pub cities: Vec<City>,
    pub batteries: Vec<Battery>,
    pub rockets: Vec<Rocket>,
    pub interceptors: Vec<Interceptor>,
    pub explosions: Vec<Explosion>,
    /// Next identity to hand out.
    pub next_id: u32,
}

impl GameState {
    /// The canonical initial layout in `Start` status.
    ///
    /// Deterministic: two calls with the same tuning compare equal.
    pub fn initial(tuning: &Tuning) -> Self {
        let mut state = Self {
            status: GameStatus::Start,
            score: 0,
            level: 1,
            destroyed_count: 0,
            tick: 0,
            cities: Vec::with_capacity(tuning.layout.cities.len()),
            batteries: Vec::with_capacity(tuning.layout.batteries.len()),
            rockets: Vec::new(),
            interceptors: Vec::new(),
            explosions: Vec::new(),
            next_id: 0,
        };

        for &pos in &tuning.layout.cities {
            let id = state.allocate_id();
            state.cities.push(City {
                id,
                pos,
                destroyed: false,
            });
        }
        for &pos in &tuning.layout.batteries {
            let id = state.allocate_id();
            state.batteries.push(Battery {
                id,
                pos,
                ammo: tuning.layout.battery_max_ammo,
                max_ammo: tuning.layout.battery_max_ammo,
                destroyed: false,
            });
        }
        state
    }

    /// Hand out a fresh identity.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Positions of every structure still standing: cities first, then batteries.
    pub fn live_targets(&self) -> Vec<Point> {
        self.cities
            .iter()
            .filter(|c| c.is_alive())
            .map(|c| c.pos)
            .chain(self.batteries.iter().filter(|b| b.is_alive()).map(|b| b.pos))
            .collect()
    }

    pub fn all_batteries_destroyed(&self) -> bool {
        self.batteries.iter().all(|b| b.destroyed)
    }

    pub fn cities_standing(&self) -> usize {
        self.cities.iter().filter(|c| c.is_alive()).count()
    }

    /// Explosion size multiplier currently in effect.
    pub fn power_multiplier(&self, tuning: &Tuning) -> f64 {
        tuning.power_multiplier(self.destroyed_count)
    }
}
