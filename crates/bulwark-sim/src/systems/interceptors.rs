//! Interceptor movement and detonation.

use bulwark_core::config::Tuning;
use bulwark_core::entities::Explosion;
use bulwark_core::events::GameEvent;
use bulwark_core::state::GameState;

use super::movement::{advance, Advance};

/// Move every interceptor one step toward its tap point. Arrivals are
/// removed and returned as fresh explosions centered on the tap point.
///
/// Explosion size uses the power multiplier from before this tick's kills.
pub fn run(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) -> Vec<Explosion> {
    let max_radius = tuning.explosion_max_radius * state.power_multiplier(tuning);
    let interceptors = std::mem::take(&mut state.interceptors);
    let mut detonations = Vec::new();

    for mut interceptor in interceptors {
        match advance(interceptor.pos, interceptor.target, interceptor.speed) {
            Advance::Moved(pos) => {
                interceptor.pos = pos;
                state.interceptors.push(interceptor);
            }
            Advance::Arrived => {
                let id = state.allocate_id();
                detonations.push(Explosion {
                    id,
                    pos: interceptor.target,
                    radius: tuning.explosion_start_radius,
                    max_radius,
                    growing: true,
                    alpha: 1.0,
                });
                events.push(GameEvent::Detonation {
                    id,
                    pos: interceptor.target,
                    max_radius,
                });
            }
        }
    }

    detonations
}
