//! Simulation engine for BULWARK.
//!
//! A pure `step(prev) -> next` over `GameState` values, the systems it is
//! built from, and `SimulationEngine`, the container that owns the canonical
//! state, queues player commands and produces one `FrameSnapshot` per tick.

pub mod engine;
pub mod random;
pub mod step;
pub mod systems;

pub use engine::{FrameSnapshot, SimConfig, SimulationEngine};
pub use random::{RandomSource, ScriptedRandom};
pub use step::{step, Outcome};
