//! Session lifecycle: start and restart.

use bulwark_core::config::Tuning;
use bulwark_core::enums::GameStatus;
use bulwark_core::state::GameState;

/// A freshly initialized session in `Playing` status.
pub fn fresh_session(tuning: &Tuning) -> GameState {
    let mut state = GameState::initial(tuning);
    state.status = GameStatus::Playing;
    state
}

/// `Start -> Playing`. `None` from any other status.
pub fn start(prev: &GameState, tuning: &Tuning) -> Option<GameState> {
    (prev.status == GameStatus::Start).then(|| fresh_session(tuning))
}

/// `{Start, Won, Lost} -> Playing` with a full reinitialization.
/// `None` while a game is in progress.
pub fn restart(prev: &GameState, tuning: &Tuning) -> Option<GameState> {
    (prev.status != GameStatus::Playing).then(|| fresh_session(tuning))
}
