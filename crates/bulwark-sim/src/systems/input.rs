//! Input mapper: turns a fire command at a logical canvas point into an
//! interceptor launched from the battery closest along x.

use bulwark_core::config::Tuning;
use bulwark_core::entities::Interceptor;
use bulwark_core::enums::AmmoPolicy;
use bulwark_core::events::GameEvent;
use bulwark_core::state::GameState;
use bulwark_core::types::{EntityId, Point};

/// Launch one interceptor toward `target`.
///
/// Ignored unless the game is playing, when no battery can fire, or when
/// the coordinate is not finite. Under `AmmoPolicy::Consume` a battery with
/// an empty magazine is passed over and the chosen one spends a round.
pub fn run(
    state: &mut GameState,
    target: Point,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> Option<EntityId> {
    if !state.is_playing() {
        log::debug!("fire at {target} ignored: status {:?}", state.status);
        return None;
    }
    if !target.is_finite() {
        log::debug!("fire ignored: non-finite target");
        return None;
    }

    let Some(battery_index) = nearest_battery(state, target.x, tuning.ammo_policy) else {
        log::debug!("fire at {target} ignored: no battery can fire");
        return None;
    };

    let battery = &mut state.batteries[battery_index];
    if tuning.ammo_policy == AmmoPolicy::Consume {
        battery.ammo -= 1;
    }
    let origin = battery.pos;

    let id = state.allocate_id();
    state.interceptors.push(Interceptor {
        id,
        pos: origin,
        origin,
        target,
        speed: tuning.interceptor_speed,
        battery_index,
    });
    events.push(GameEvent::InterceptorLaunched {
        id,
        battery_index,
        target,
    });
    Some(id)
}

/// Index of the standing battery whose x is closest to `x`.
///
/// Ties go to the lowest index. Under `AmmoPolicy::Consume` empty batteries
/// are not eligible.
pub fn nearest_battery(state: &GameState, x: f64, policy: AmmoPolicy) -> Option<usize> {
    state
        .batteries
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_alive())
        .filter(|(_, b)| policy == AmmoPolicy::Unlimited || b.ammo > 0)
        .min_by(|(_, a), (_, b)| (a.pos.x - x).abs().total_cmp(&(b.pos.x - x).abs()))
        .map(|(index, _)| index)
}
