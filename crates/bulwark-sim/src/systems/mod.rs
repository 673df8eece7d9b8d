//! Systems that advance a working copy of the game state.
//!
//! Each system is a plain function over `&mut GameState`. The pure entry
//! points in `step` clone the previous state once and run systems in order
//! on that copy, so callers only ever see whole states.

pub mod collision;
pub mod explosions;
pub mod input;
pub mod interceptors;
pub mod lifecycle;
pub mod movement;
pub mod progression;
pub mod rockets;
pub mod spawner;
