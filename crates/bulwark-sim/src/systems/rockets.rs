//! Rocket movement and impact resolution.

use bulwark_core::enums::Structure;
use bulwark_core::events::GameEvent;
use bulwark_core::state::GameState;
use bulwark_core::types::Point;

use super::movement::{advance, Advance};

/// Move every rocket one step toward its target. Rockets that arrive are
/// removed and destroy whatever structure sits at the target coordinate.
pub fn run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let rockets = std::mem::take(&mut state.rockets);
    state.rockets.reserve(rockets.len());

    for mut rocket in rockets {
        match advance(rocket.pos, rocket.target, rocket.speed) {
            Advance::Moved(pos) => {
                rocket.pos = pos;
                state.rockets.push(rocket);
            }
            Advance::Arrived => {
                let structure = resolve_impact(state, rocket.target);
                log::debug!("rocket {} impacted {:?}", rocket.id, structure);
                events.push(GameEvent::Impact {
                    id: rocket.id,
                    pos: rocket.target,
                    structure,
                });
            }
        }
    }
}

/// Mark the city and/or battery standing at `target` as destroyed.
///
/// Matching is by exact coordinate: a rocket's target is a copy of a
/// structure position taken at spawn time. `Tuning::validate` keeps
/// structure positions distinct, so at most one structure matches.
pub fn resolve_impact(state: &mut GameState, target: Point) -> Option<Structure> {
    let city = state
        .cities
        .iter_mut()
        .enumerate()
        .find(|(_, c)| c.pos == target)
        .map(|(index, city)| {
            city.destroyed = true;
            Structure::City(index)
        });
    let battery = state
        .batteries
        .iter_mut()
        .enumerate()
        .find(|(_, b)| b.pos == target)
        .map(|(index, battery)| {
            battery.destroyed = true;
            Structure::Battery(index)
        });
    city.or(battery)
}
