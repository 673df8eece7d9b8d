//! BULWARK headless frontend.
//!
//! Wires the simulation to the outside world: a fixed-rate game loop thread,
//! pointer and stdin input, a frame sink that streams JSON snapshots, and an
//! optional autopilot player.

pub mod autopilot;
pub mod game_loop;
pub mod input;
pub mod sink;
pub mod state;
