//! A scripted player for demos and soak runs.
//!
//! Each decision fires at most one interceptor, aimed at where the lowest
//! unengaged rocket will be when the interceptor gets there.

use std::collections::HashSet;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::config::Tuning;
use bulwark_core::entities::Rocket;
use bulwark_core::geometry::{direction, distance};
use bulwark_core::state::GameState;
use bulwark_core::types::{EntityId, Point};
use bulwark_sim::systems::input::nearest_battery;

/// Ticks between two autopilot shots.
pub const FIRE_INTERVAL: u64 = 8;

#[derive(Debug, Clone)]
pub struct Autopilot {
    interval: u64,
    last_shot: Option<u64>,
    engaged: HashSet<EntityId>,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(FIRE_INTERVAL)
    }
}

impl Autopilot {
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            last_shot: None,
            engaged: HashSet::new(),
        }
    }

    /// Pick a shot for the coming tick, if any.
    pub fn decide(&mut self, state: &GameState, tuning: &Tuning) -> Option<PlayerCommand> {
        if !state.is_playing() {
            self.last_shot = None;
            self.engaged.clear();
            return None;
        }

        self.engaged
            .retain(|id| state.rockets.iter().any(|r| r.id == *id));
        if let Some(last) = self.last_shot {
            if state.tick < last + self.interval {
                return None;
            }
        }

        let rocket = state
            .rockets
            .iter()
            .filter(|r| !self.engaged.contains(&r.id))
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?;
        let battery = nearest_battery(state, rocket.pos.x, tuning.ammo_policy)?;
        let aim = lead(rocket, state.batteries[battery].pos, tuning.interceptor_speed);

        self.engaged.insert(rocket.id);
        self.last_shot = Some(state.tick);
        log::trace!("autopilot engaging rocket {} at {aim}", rocket.id);
        Some(PlayerCommand::Fire { x: aim.x, y: aim.y })
    }
}

/// Where `rocket` will be after an interceptor flies from `from` to its
/// current position. Never past the rocket's target.
fn lead(rocket: &Rocket, from: Point, interceptor_speed: f64) -> Point {
    let remaining = distance(rocket.pos, rocket.target);
    let flight = distance(from, rocket.pos) / interceptor_speed;
    let travel = (rocket.speed * flight).min(remaining);
    if travel <= 0.0 {
        return rocket.pos;
    }
    rocket.pos + direction(rocket.pos, rocket.target) * travel
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_sim::systems::lifecycle::fresh_session;

    fn with_rockets(positions: &[(f64, f64)]) -> GameState {
        let mut state = fresh_session(&Tuning::default());
        for &(x, y) in positions {
            let id = state.allocate_id();
            state.rockets.push(Rocket {
                id,
                pos: Point::new(x, y),
                target: Point::new(x, 560.0),
                speed: 1.0,
                angle: 0.0,
            });
        }
        state
    }

    #[test]
    fn test_targets_lowest_rocket() {
        let tuning = Tuning::default();
        let state = with_rockets(&[(100.0, 50.0), (400.0, 300.0), (700.0, 120.0)]);
        let mut pilot = Autopilot::default();

        let Some(PlayerCommand::Fire { x, y }) = pilot.decide(&state, &tuning) else {
            panic!("expected a shot");
        };
        assert_eq!(x, 400.0);
        // 250 units from the center battery at 6 per tick, rocket moves 1 per tick.
        assert!((y - (300.0 + 250.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_does_not_engage_same_rocket_twice() {
        let tuning = Tuning::default();
        let mut state = with_rockets(&[(400.0, 300.0), (100.0, 50.0)]);
        let mut pilot = Autopilot::new(0);

        let first = pilot.decide(&state, &tuning);
        assert!(matches!(first, Some(PlayerCommand::Fire { x, .. }) if x == 400.0));
        state.tick += 1;
        let second = pilot.decide(&state, &tuning);
        assert!(matches!(second, Some(PlayerCommand::Fire { x, .. }) if x == 100.0));
        state.tick += 1;
        assert!(pilot.decide(&state, &tuning).is_none());
    }

    #[test]
    fn test_waits_between_shots() {
        let tuning = Tuning::default();
        let mut state = with_rockets(&[(400.0, 300.0), (100.0, 50.0)]);
        let mut pilot = Autopilot::default();

        assert!(pilot.decide(&state, &tuning).is_some());
        state.tick += FIRE_INTERVAL - 1;
        assert!(pilot.decide(&state, &tuning).is_none());
        state.tick += 1;
        assert!(pilot.decide(&state, &tuning).is_some());
    }

    #[test]
    fn test_idle_outside_play() {
        let tuning = Tuning::default();
        let mut state = with_rockets(&[(400.0, 300.0)]);
        state.status = bulwark_core::enums::GameStatus::Lost;
        assert!(Autopilot::default().decide(&state, &tuning).is_none());
    }

    #[test]
    fn test_lead_stops_at_target() {
        let rocket = Rocket {
            id: EntityId(1),
            pos: Point::new(50.0, 555.0),
            target: Point::new(50.0, 560.0),
            speed: 2.0,
            angle: 0.0,
        };
        let aim = lead(&rocket, Point::new(750.0, 550.0), 6.0);
        assert_eq!(aim, rocket.target);
    }
}
