//! Injectable uniform random source.
//!
//! The spawner draws through this trait so tests can script the exact
//! sequence of draws and assert spawn targets and positions.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ChaCha8Rng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of draws.
///
/// Once exhausted it yields values just below 1.0, which never pass a
/// probability check, so a script only has to cover the draws it cares about.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Append more draws after the current script.
    pub fn extend(&mut self, draws: impl IntoIterator<Item = f64>) {
        self.draws.extend(draws);
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(1.0 - f64::EPSILON)
    }
}
