//! Pure state transitions.
//!
//! Every entry point takes the previous `GameState` by reference and returns
//! the next one in an `Outcome`; the previous value is never touched.

use serde::{Deserialize, Serialize};

use bulwark_core::config::Tuning;
use bulwark_core::events::GameEvent;
use bulwark_core::state::GameState;
use bulwark_core::types::Point;

use crate::random::RandomSource;
use crate::systems;

/// The state after a transition and what happened on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl Outcome {
    /// A transition that changed nothing.
    pub fn unchanged(prev: &GameState) -> Self {
        Self {
            state: prev.clone(),
            events: Vec::new(),
        }
    }
}

/// Advance the simulation by one tick. A no-op unless the game is playing.
///
/// Order: rocket movement and impacts, interceptor movement and
/// detonation, lifecycle of explosions that existed before this tick,
/// collision against all explosions including this tick's new ones, then
/// win/loss/level transitions.
pub fn step(prev: &GameState, tuning: &Tuning) -> Outcome {
    if !prev.is_playing() {
        return Outcome::unchanged(prev);
    }

    let mut state = prev.clone();
    let mut events = Vec::new();
    state.tick += 1;

    systems::rockets::run(&mut state, &mut events);
    let detonations = systems::interceptors::run(&mut state, tuning, &mut events);
    systems::explosions::run(&mut state, tuning);
    state.explosions.extend(detonations);
    systems::collision::run(&mut state, tuning, &mut events);
    systems::progression::run(&mut state, tuning, &mut events);

    Outcome { state, events }
}

/// Roll the spawner once.
pub fn spawn<R: RandomSource + ?Sized>(prev: &GameState, rng: &mut R, tuning: &Tuning) -> Outcome {
    let mut state = prev.clone();
    let mut events = Vec::new();
    systems::spawner::run(&mut state, rng, tuning, &mut events);
    Outcome { state, events }
}

/// Fire at a logical canvas point.
pub fn fire(prev: &GameState, target: Point, tuning: &Tuning) -> Outcome {
    let mut state = prev.clone();
    let mut events = Vec::new();
    systems::input::run(&mut state, target, tuning, &mut events);
    Outcome { state, events }
}

/// `Start -> Playing`; unchanged from any other status.
pub fn start(prev: &GameState, tuning: &Tuning) -> Outcome {
    match systems::lifecycle::start(prev, tuning) {
        Some(state) => Outcome {
            state,
            events: Vec::new(),
        },
        None => Outcome::unchanged(prev),
    }
}

/// Full reinitialization into `Playing`; unchanged while a game is in progress.
pub fn restart(prev: &GameState, tuning: &Tuning) -> Outcome {
    match systems::lifecycle::restart(prev, tuning) {
        Some(state) => Outcome {
            state,
            events: Vec::new(),
        },
        None => Outcome::unchanged(prev),
    }
}
