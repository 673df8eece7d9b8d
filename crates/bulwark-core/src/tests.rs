use crate::commands::PlayerCommand;
use crate::config::{Layout, Tuning};
use crate::constants::*;
use crate::enums::*;
use crate::error::ConfigError;
use crate::events::GameEvent;
use crate::geometry::{self, CanvasScale};
use crate::state::GameState;
use crate::types::{EntityId, Point};

#[test]
fn test_distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!((geometry::distance(a, b) - 5.0).abs() < 1e-12);
    assert!((geometry::distance(b, a) - 5.0).abs() < 1e-12);
    assert_eq!(geometry::distance(a, a), 0.0);
}

#[test]
fn test_direction_is_unit_length() {
    let a = Point::new(10.0, 10.0);
    let b = Point::new(13.0, 14.0);
    let dir = geometry::direction(a, b);
    assert!((dir.length() - 1.0).abs() < 1e-12);
    assert!((dir.x - 0.6).abs() < 1e-12);
    assert!((dir.y - 0.8).abs() < 1e-12);
}

#[test]
fn test_heading_points_down_canvas() {
    // y grows downward, so straight down is +PI/2.
    let h = geometry::heading(Point::new(100.0, 0.0), Point::new(100.0, 500.0));
    assert!((h - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_canvas_scale_maps_pixels_to_logical() {
    // Canvas displayed at half size.
    let scale = CanvasScale::new(400.0, 300.0);
    let p = scale.to_canvas(200.0, 150.0);
    assert_eq!(p, Point::new(400.0, 300.0));

    let identity = CanvasScale::default();
    assert_eq!(identity.to_canvas(12.5, 7.0), Point::new(12.5, 7.0));

    let degenerate = CanvasScale::new(0.0, 0.0);
    assert_eq!(degenerate.to_canvas(5.0, 6.0), Point::new(5.0, 6.0));
}

#[test]
fn test_power_multiplier_steps_every_five_kills() {
    let tuning = Tuning::default();
    assert_eq!(tuning.power_multiplier(0), 0.5);
    assert_eq!(tuning.power_multiplier(4), 0.5);
    assert_eq!(tuning.power_multiplier(5), 1.0);
    assert_eq!(tuning.power_multiplier(9), 1.0);
    assert_eq!(tuning.power_multiplier(10), 1.5);
    assert_eq!(tuning.power_multiplier(27), 0.5 + 5.0 * 0.5);
}

#[test]
fn test_level_for_score() {
    let tuning = Tuning::default();
    assert_eq!(tuning.level_for_score(0), 1);
    assert_eq!(tuning.level_for_score(499), 1);
    assert_eq!(tuning.level_for_score(500), 2);
    assert_eq!(tuning.level_for_score(2999), 6);
}

#[test]
fn test_spawn_rate_and_speed_scale_with_level() {
    let tuning = Tuning::default();
    assert!((tuning.spawn_rate(1) - 0.02).abs() < 1e-12);
    assert!((tuning.spawn_rate(3) - 0.03).abs() < 1e-12);
    assert!((tuning.rocket_speed(1) - 1.0).abs() < 1e-12);
    assert!((tuning.rocket_speed(4) - 1.6).abs() < 1e-12);
}

#[test]
fn test_initial_state_layout() {
    let tuning = Tuning::default();
    let state = GameState::initial(&tuning);

    assert_eq!(state.status, GameStatus::Start);
    assert_eq!(state.score, 0);
    assert_eq!(state.level, 1);
    assert_eq!(state.destroyed_count, 0);
    assert_eq!(state.cities.len(), CITY_POSITIONS.len());
    assert_eq!(state.batteries.len(), 3);
    assert!(state.rockets.is_empty());
    assert!(state.interceptors.is_empty());
    assert!(state.explosions.is_empty());
    assert!(state.batteries.iter().all(|b| b.ammo == BATTERY_MAX_AMMO));
    assert_eq!(state.batteries[0].pos, Point::new(50.0, 550.0));

    // Every structure has a distinct identity.
    let mut ids: Vec<EntityId> = state
        .cities
        .iter()
        .map(|c| c.id)
        .chain(state.batteries.iter().map(|b| b.id))
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), state.cities.len() + state.batteries.len());

    assert_eq!(state, GameState::initial(&tuning));
}

#[test]
fn test_live_targets_skip_destroyed_structures() {
    let tuning = Tuning::default();
    let mut state = GameState::initial(&tuning);
    let total = state.live_targets().len();

    state.cities[0].destroyed = true;
    state.batteries[2].destroyed = true;
    let targets = state.live_targets();
    assert_eq!(targets.len(), total - 2);
    assert!(!targets.contains(&state.cities[0].pos));
    assert!(!targets.contains(&state.batteries[2].pos));

    for city in &mut state.cities {
        city.destroyed = true;
    }
    assert_eq!(state.live_targets().len(), 2);
    assert!(!state.all_batteries_destroyed());
}

#[test]
fn test_tuning_json_partial_override() {
    let tuning = Tuning::from_json_str(r#"{ "target_score": 1000, "ammo_policy": "Consume" }"#)
        .unwrap();
    assert_eq!(tuning.target_score, 1000);
    assert_eq!(tuning.ammo_policy, AmmoPolicy::Consume);
    // Untouched fields keep the built-in balance.
    assert_eq!(tuning.interceptor_speed, INTERCEPTOR_SPEED);
    assert_eq!(tuning.layout, Layout::default());
}

#[test]
fn test_tuning_layout_override() {
    let tuning = Tuning::from_json_str(
        r#"{ "layout": { "batteries": [[100.0, 550.0]], "cities": [] } }"#,
    )
    .unwrap();
    assert_eq!(tuning.layout.batteries, vec![Point::new(100.0, 550.0)]);
    assert!(tuning.layout.cities.is_empty());
    assert_eq!(tuning.layout.battery_max_ammo, BATTERY_MAX_AMMO);
}

#[test]
fn test_tuning_rejects_degenerate_values() {
    let err = Tuning::from_json_str(r#"{ "level_score_step": 0 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "level_score_step",
            ..
        }
    ));

    let err = Tuning::from_json_str(r#"{ "interceptor_speed": -1.0 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "interceptor_speed",
            ..
        }
    ));

    let err = Tuning::from_json_str(r#"{ "layout": { "batteries": [] } }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "layout.batteries",
            ..
        }
    ));

    let err = Tuning::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_tuning_rejects_structures_sharing_a_position() {
    let err = Tuning::from_json_str(
        r#"{ "layout": { "cities": [[130.0, 560.0]], "batteries": [[130.0, 560.0]] } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "layout", .. }));

    let err = Tuning::from_json_str(
        r#"{ "layout": { "cities": [], "batteries": [[50.0, 550.0], [50.0, 550.0]] } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "layout", .. }));

    assert_eq!(Layout::default().first_shared_position(), None);
}

#[test]
fn test_tuning_load_missing_file() {
    let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("tuning.json"));
}

/// Verify PlayerCommand round-trips through serde (tagged union).
#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::Start,
        PlayerCommand::Restart,
        PlayerCommand::Fire { x: 120.0, y: 340.5 },
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(*cmd, back);
    }

    let fire: PlayerCommand = serde_json::from_str(r#"{"type":"Fire","x":1.0,"y":2.0}"#).unwrap();
    assert_eq!(fire, PlayerCommand::Fire { x: 1.0, y: 2.0 });
}

#[test]
fn test_impact_event_serde() {
    let event = GameEvent::Impact {
        id: EntityId(7),
        pos: Point::new(50.0, 550.0),
        structure: Some(Structure::Battery(0)),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""type":"Impact""#));
    let back: GameEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);
}

#[test]
fn test_state_serde() {
    let state = GameState::initial(&Tuning::default());
    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, back);
}

#[test]
fn test_terminal_statuses() {
    assert!(!GameStatus::Start.is_terminal());
    assert!(!GameStatus::Playing.is_terminal());
    assert!(GameStatus::Won.is_terminal());
    assert!(GameStatus::Lost.is_terminal());
}

#[test]
fn test_entity_id_display() {
    assert_eq!(EntityId(42).to_string(), "E42");
}
