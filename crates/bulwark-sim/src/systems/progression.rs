//! Terminal and level transitions, evaluated once at the end of each tick.

use bulwark_core::config::Tuning;
use bulwark_core::enums::GameStatus;
use bulwark_core::events::GameEvent;
use bulwark_core::state::GameState;

/// Apply win, loss and level-up in strict priority order.
///
/// Win is checked before loss, so a tick that reaches the target score
/// while losing the last battery is a win.
pub fn run(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    if state.score >= tuning.target_score {
        state.status = GameStatus::Won;
        log::info!("game won with score {} at tick {}", state.score, state.tick);
        events.push(GameEvent::Won { score: state.score });
        return;
    }

    if state.all_batteries_destroyed() {
        state.status = GameStatus::Lost;
        log::info!("game lost with score {} at tick {}", state.score, state.tick);
        events.push(GameEvent::Lost { score: state.score });
        return;
    }

    let new_level = tuning.level_for_score(state.score);
    if new_level > state.level {
        level_up(state, new_level);
        events.push(GameEvent::LevelUp { level: new_level });
    }
}

/// Enter `level`: refill every battery and clear all live threats.
///
/// Ammo is refilled on destroyed batteries too. Explosions are left to
/// finish their lifecycle.
fn level_up(state: &mut GameState, level: u32) {
    log::info!(
        "level {} -> {} (score {}, {} rockets cleared)",
        state.level,
        level,
        state.score,
        state.rockets.len()
    );
    state.level = level;
    for battery in &mut state.batteries {
        battery.ammo = battery.max_ammo;
    }
    state.rockets.clear();
    state.interceptors.clear();
}
