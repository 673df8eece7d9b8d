//! Simulation engine: the game-state container.
//!
//! `SimulationEngine` owns the single canonical `GameState`, queues player
//! commands until the next tick boundary, and produces `FrameSnapshot`s.
//! Every mutation goes through `apply`, which swaps in the state returned by
//! a pure transition, so readers never observe a half-applied tick.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use bulwark_core::commands::PlayerCommand;
use bulwark_core::config::Tuning;
use bulwark_core::enums::GameStatus;
use bulwark_core::events::GameEvent;
use bulwark_core::state::GameState;
use bulwark_core::types::Point;

use crate::random::RandomSource;
use crate::step::{self, Outcome};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and commands = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// Everything a render consumer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub state: GameState,
    /// Events since the previous snapshot, in the order they happened.
    pub events: Vec<GameEvent>,
}

/// The simulation engine. Owns the game state and all sim inputs.
pub struct SimulationEngine {
    state: GameState,
    tuning: Tuning,
    rng: Box<dyn RandomSource + Send>,
    command_queue: VecDeque<PlayerCommand>,
    pending_events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine in `Start` status, seeded from the config.
    pub fn new(config: SimConfig) -> Self {
        Self::with_random(config.tuning, ChaCha8Rng::seed_from_u64(config.seed))
    }

    /// Create an engine drawing from a caller-supplied random source.
    pub fn with_random(tuning: Tuning, rng: impl RandomSource + Send + 'static) -> Self {
        Self {
            state: GameState::initial(&tuning),
            tuning,
            rng: Box::new(rng),
            command_queue: VecDeque::new(),
            pending_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one frame: apply queued commands, then spawn and step if
    /// playing. Returns the resulting snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();

        if self.state.is_playing() {
            let spawned = step::spawn(&self.state, self.rng.as_mut(), &self.tuning);
            self.commit(spawned);
            let stepped = step::step(&self.state, &self.tuning);
            self.commit(stepped);
        }

        FrameSnapshot {
            state: self.state.clone(),
            events: std::mem::take(&mut self.pending_events),
        }
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Commands waiting for the next tick.
    pub fn queued_commands(&self) -> usize {
        self.command_queue.len()
    }

    /// Replace the state with the result of one transition.
    pub fn apply(&mut self, transition: impl FnOnce(&GameState) -> Outcome) {
        let outcome = transition(&self.state);
        self.commit(outcome);
    }

    /// `Start -> Playing` with a freshly initialized state.
    pub fn start(&mut self) {
        if self.state.status != GameStatus::Start {
            log::debug!("start ignored: status {:?}", self.state.status);
            return;
        }
        let outcome = step::start(&self.state, &self.tuning);
        self.commit(outcome);
        log::info!("game started");
    }

    /// Full reinitialization into `Playing`. Ignored while a game is in progress.
    pub fn restart(&mut self) {
        if self.state.is_playing() {
            log::debug!("restart ignored: game in progress");
            return;
        }
        let from = self.state.status;
        let outcome = step::restart(&self.state, &self.tuning);
        self.commit(outcome);
        log::info!("game restarted from {from:?}");
    }

    /// Launch an interceptor toward a logical canvas point right away.
    pub fn fire(&mut self, target: Point) {
        let outcome = step::fire(&self.state, target, &self.tuning);
        self.commit(outcome);
    }

    fn commit(&mut self, outcome: Outcome) {
        self.state = outcome.state;
        self.pending_events.extend(outcome.events);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => self.start(),
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::Fire { x, y } => self.fire(Point::new(x, y)),
        }
    }
}
