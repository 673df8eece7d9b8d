//! Tuning configuration: every balance constant the simulation reads.
//!
//! `Tuning::default()` is the built-in balance from `constants`. A JSON file
//! may override any subset of fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::AmmoPolicy;
use crate::error::ConfigError;
use crate::types::Point;

/// Initial structure layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub cities: Vec<Point>,
    pub batteries: Vec<Point>,
    pub battery_max_ammo: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cities: CITY_POSITIONS
                .iter()
                .map(|&(x, y)| Point::new(x, y))
                .collect(),
            batteries: BATTERY_POSITIONS
                .iter()
                .map(|&(x, y)| Point::new(x, y))
                .collect(),
            battery_max_ammo: BATTERY_MAX_AMMO,
        }
    }
}

impl Layout {
    /// A position occupied by more than one structure, if any.
    ///
    /// Impacts resolve by exact coordinate, so every structure needs its own.
    pub fn first_shared_position(&self) -> Option<Point> {
        let all: Vec<Point> = self.cities.iter().chain(&self.batteries).copied().collect();
        all.iter()
            .enumerate()
            .find(|&(i, pos)| all[i + 1..].contains(pos))
            .map(|(_, &pos)| pos)
    }
}

/// Balance parameters for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub layout: Layout,
    pub canvas_width: f64,
    pub base_spawn_rate: f64,
    pub spawn_rate_per_level: f64,
    pub rocket_base_speed: f64,
    pub rocket_speed_per_level: f64,
    pub interceptor_speed: f64,
    pub explosion_max_radius: f64,
    pub explosion_start_radius: f64,
    pub explosion_growth_rate: f64,
    pub explosion_alpha_decay: f64,
    pub power_base: f64,
    pub power_step: f64,
    pub kills_per_power_step: u32,
    pub rocket_kill_score: u32,
    pub level_score_step: u32,
    pub target_score: u32,
    pub ammo_policy: AmmoPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            canvas_width: CANVAS_WIDTH,
            base_spawn_rate: BASE_SPAWN_RATE,
            spawn_rate_per_level: SPAWN_RATE_PER_LEVEL,
            rocket_base_speed: ROCKET_BASE_SPEED,
            rocket_speed_per_level: ROCKET_SPEED_PER_LEVEL,
            interceptor_speed: INTERCEPTOR_SPEED,
            explosion_max_radius: EXPLOSION_MAX_RADIUS,
            explosion_start_radius: EXPLOSION_START_RADIUS,
            explosion_growth_rate: EXPLOSION_GROWTH_RATE,
            explosion_alpha_decay: EXPLOSION_ALPHA_DECAY,
            power_base: POWER_BASE,
            power_step: POWER_STEP,
            kills_per_power_step: KILLS_PER_POWER_STEP,
            rocket_kill_score: ROCKET_KILL_SCORE,
            level_score_step: LEVEL_SCORE_STEP,
            target_score: TARGET_SCORE,
            ammo_policy: AmmoPolicy::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON tuning file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject values that would stall or divide by zero in the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("rocket_base_speed", self.rocket_base_speed)?;
        positive("interceptor_speed", self.interceptor_speed)?;
        positive("explosion_max_radius", self.explosion_max_radius)?;
        positive("explosion_start_radius", self.explosion_start_radius)?;
        positive("explosion_growth_rate", self.explosion_growth_rate)?;
        positive("explosion_alpha_decay", self.explosion_alpha_decay)?;
        positive("canvas_width", self.canvas_width)?;
        if self.rocket_speed_per_level < 0.0 {
            return Err(invalid("rocket_speed_per_level", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.base_spawn_rate) {
            return Err(invalid("base_spawn_rate", "must be a probability in [0, 1]"));
        }
        if self.spawn_rate_per_level < 0.0 {
            return Err(invalid("spawn_rate_per_level", "must not be negative"));
        }
        if self.level_score_step == 0 {
            return Err(invalid("level_score_step", "must be non-zero"));
        }
        if self.kills_per_power_step == 0 {
            return Err(invalid("kills_per_power_step", "must be non-zero"));
        }
        if self.layout.batteries.is_empty() {
            return Err(invalid("layout.batteries", "at least one battery is required"));
        }
        if let Some(pos) = self.layout.first_shared_position() {
            return Err(ConfigError::Invalid {
                field: "layout",
                reason: format!("two structures share position {pos}"),
            });
        }
        Ok(())
    }

    /// Per-tick spawn probability at `level`.
    pub fn spawn_rate(&self, level: u32) -> f64 {
        self.base_spawn_rate + level as f64 * self.spawn_rate_per_level
    }

    /// Rocket speed at `level`.
    pub fn rocket_speed(&self, level: u32) -> f64 {
        self.rocket_base_speed + level as f64 * self.rocket_speed_per_level
    }

    /// Explosion size multiplier after `destroyed_count` kills.
    pub fn power_multiplier(&self, destroyed_count: u32) -> f64 {
        self.power_base + (destroyed_count / self.kills_per_power_step) as f64 * self.power_step
    }

    /// Level reached at `score`. Levels start at 1.
    pub fn level_for_score(&self, score: u32) -> u32 {
        score / self.level_score_step + 1
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a positive finite number"))
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
