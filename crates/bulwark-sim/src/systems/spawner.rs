//! Rocket spawner: a per-tick probability roll, then a uniformly random
//! live structure as the target and a random entry point on the top edge.

use bulwark_core::config::Tuning;
use bulwark_core::entities::Rocket;
use bulwark_core::events::GameEvent;
use bulwark_core::geometry::heading;
use bulwark_core::state::GameState;
use bulwark_core::types::{EntityId, Point};

use crate::random::RandomSource;

/// Roll for a spawn and, on success, append one rocket.
///
/// Draw order is fixed: spawn roll, target pick, entry x. The roll uses
/// `level` as it stands before this tick's step. With nothing left to
/// target the spawn is skipped after the roll.
pub fn run<R: RandomSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> Option<EntityId> {
    if !state.is_playing() {
        return None;
    }

    if rng.next_unit() >= tuning.spawn_rate(state.level) {
        return None;
    }

    let targets = state.live_targets();
    if targets.is_empty() {
        log::debug!("spawn skipped: no structure left to target");
        return None;
    }
    let target = targets[pick_index(rng.next_unit(), targets.len())];

    let pos = Point::new(rng.next_unit() * tuning.canvas_width, 0.0);
    let id = state.allocate_id();
    state.rockets.push(Rocket {
        id,
        pos,
        target,
        speed: tuning.rocket_speed(state.level),
        angle: heading(pos, target),
    });
    log::trace!("rocket {id} spawned at x={:.1} toward {target}", pos.x);
    events.push(GameEvent::RocketSpawned { id, pos, target });
    Some(id)
}

/// Map a unit draw onto `0..len`. Clamped so a draw of exactly 1.0 stays in range.
fn pick_index(draw: f64, len: usize) -> usize {
    ((draw * len as f64) as usize).min(len - 1)
}
