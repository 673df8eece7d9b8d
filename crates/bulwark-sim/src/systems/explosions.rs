//! Explosion lifecycle: grow to max radius, then shrink and fade.

use bulwark_core::config::Tuning;
use bulwark_core::entities::Explosion;
use bulwark_core::state::GameState;

/// Advance every explosion one tick and drop the spent ones.
pub fn run(state: &mut GameState, tuning: &Tuning) {
    for explosion in &mut state.explosions {
        advance(explosion, tuning);
    }
    state.explosions.retain(|e| !is_spent(e));
}

/// One lifecycle tick for a single explosion.
pub fn advance(explosion: &mut Explosion, tuning: &Tuning) {
    if explosion.growing {
        explosion.radius += tuning.explosion_growth_rate;
        if explosion.radius >= explosion.max_radius {
            explosion.growing = false;
        }
    } else {
        explosion.radius -= tuning.explosion_growth_rate * 0.5;
        explosion.alpha -= tuning.explosion_alpha_decay;
    }
}

pub fn is_spent(explosion: &Explosion) -> bool {
    explosion.radius <= 0.0 || explosion.alpha <= 0.0
}
