//! Simulation constants and tuning parameters.
//!
//! These are the built-in balance. `config::Tuning::default()` mirrors them
//! one to one; the simulation itself only reads values through `Tuning`.

/// Nominal tick rate of the frame driver (Hz). One tick per display frame.
pub const TICK_RATE: u32 = 60;

// --- Canvas ---

/// Logical canvas width.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Logical canvas height.
pub const CANVAS_HEIGHT: f64 = 600.0;

// --- Layout ---

/// Battery positions: left flank, center, right flank.
pub const BATTERY_POSITIONS: [(f64, f64); 3] = [(50.0, 550.0), (400.0, 550.0), (750.0, 550.0)];

/// City positions, three on each side of the center battery.
pub const CITY_POSITIONS: [(f64, f64); 6] = [
    (130.0, 560.0),
    (210.0, 560.0),
    (290.0, 560.0),
    (510.0, 560.0),
    (590.0, 560.0),
    (670.0, 560.0),
];

/// Ammo capacity per battery. Refilled on level-up.
pub const BATTERY_MAX_AMMO: u32 = 10;

// --- Spawning ---

/// Per-tick rocket spawn probability at level 0.
pub const BASE_SPAWN_RATE: f64 = 0.015;

/// Additional per-tick spawn probability per level.
pub const SPAWN_RATE_PER_LEVEL: f64 = 0.005;

/// Rocket speed at level 0 (units per tick).
pub const ROCKET_BASE_SPEED: f64 = 0.8;

/// Additional rocket speed per level (units per tick).
pub const ROCKET_SPEED_PER_LEVEL: f64 = 0.2;

// --- Interceptors ---

/// Interceptor speed (units per tick).
pub const INTERCEPTOR_SPEED: f64 = 6.0;

// --- Explosions ---

/// Base explosion radius before power scaling.
pub const EXPLOSION_MAX_RADIUS: f64 = 40.0;

/// Radius of a freshly detonated explosion.
pub const EXPLOSION_START_RADIUS: f64 = 2.0;

/// Radius gained per tick while growing. Shrinking runs at half this rate.
pub const EXPLOSION_GROWTH_RATE: f64 = 1.0;

/// Opacity lost per tick while shrinking.
pub const EXPLOSION_ALPHA_DECAY: f64 = 0.02;

// --- Power scaling ---

/// Power multiplier with no kills.
pub const POWER_BASE: f64 = 0.5;

/// Power multiplier gained per completed block of kills.
pub const POWER_STEP: f64 = 0.5;

/// Kills per power step.
pub const KILLS_PER_POWER_STEP: u32 = 5;

// --- Scoring and progression ---

/// Points per destroyed rocket.
pub const ROCKET_KILL_SCORE: u32 = 50;

/// Points per level. Level = floor(score / step) + 1.
pub const LEVEL_SCORE_STEP: u32 = 500;

/// Score that wins the game.
pub const TARGET_SCORE: u32 = 3000;
