//! Explosion vs rocket hit test and scoring.

use bulwark_core::config::Tuning;
use bulwark_core::events::GameEvent;
use bulwark_core::geometry::distance;
use bulwark_core::state::GameState;

/// Destroy every rocket strictly inside any explosion radius.
///
/// Each rocket scores once no matter how many explosions overlap it.
/// Returns the number of rockets destroyed.
pub fn run(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) -> u32 {
    let rockets = std::mem::take(&mut state.rockets);
    let mut kills = 0u32;

    for rocket in rockets {
        let hit = state
            .explosions
            .iter()
            .any(|e| distance(rocket.pos, e.pos) < e.radius);
        if hit {
            kills += 1;
            events.push(GameEvent::RocketDestroyed {
                id: rocket.id,
                pos: rocket.pos,
            });
        } else {
            state.rockets.push(rocket);
        }
    }

    state.score = state
        .score
        .saturating_add(kills.saturating_mul(tuning.rocket_kill_score));
    state.destroyed_count = state.destroyed_count.saturating_add(kills);
    kills
}
