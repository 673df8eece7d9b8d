//! Core types and definitions for the BULWARK simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, entities, the game state aggregate, commands, events,
//! constants and tuning. It has no dependency on any runtime or threading code.

pub mod commands;
pub mod config;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
