//! Application state shared between the input side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Context};

use bulwark_core::commands::PlayerCommand;
use bulwark_sim::{FrameSnapshot, SimConfig};

use crate::game_loop::{self, LoopSettings};
use crate::input::PointerEvent;
use crate::sink::FrameSink;

/// Commands sent from the input side to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// A raw pointer event, mapped to canvas space inside the loop.
    Pointer(PointerEvent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop.
///
/// The sender sits behind a `Mutex` so the handle can be shared across
/// threads; `mpsc::Sender` is `Send` but not `Sync`.
#[derive(Default)]
pub struct AppState {
    /// `None` before `start_simulation` is called.
    command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread. Fails if one is already running.
    pub fn start_simulation<S>(
        &self,
        config: SimConfig,
        settings: LoopSettings,
        sink: S,
    ) -> anyhow::Result<()>
    where
        S: FrameSink + Send + 'static,
    {
        let mut thread = lock(&self.loop_thread)?;
        if thread.is_some() {
            bail!("simulation already running");
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, settings, sink, self.latest_snapshot.clone())
                .context("failed to spawn game loop thread")?;

        *lock(&self.command_tx)? = Some(cmd_tx);
        *thread = Some(handle);
        Ok(())
    }

    /// Forward a command to the game loop.
    pub fn send(&self, command: GameLoopCommand) -> anyhow::Result<()> {
        match lock(&self.command_tx)?.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|_| anyhow!("game loop has stopped")),
            None => bail!("simulation not started"),
        }
    }

    /// Hand the sender over to a single input source. Once that source drops
    /// it the channel disconnects and the game loop ends. `send` fails after
    /// this.
    pub fn take_sender(&self) -> anyhow::Result<mpsc::Sender<GameLoopCommand>> {
        lock(&self.command_tx)?
            .take()
            .ok_or_else(|| anyhow!("simulation not started"))
    }

    /// The most recent frame, if any tick has run.
    pub fn latest_snapshot(&self) -> anyhow::Result<Option<FrameSnapshot>> {
        Ok(lock(&self.latest_snapshot)?.clone())
    }

    pub fn is_running(&self) -> bool {
        lock(&self.loop_thread)
            .map(|thread| thread.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Block until the game loop thread exits on its own: a `Shutdown`
    /// command, a disconnected channel, the tick limit, or a failing sink.
    pub fn join(&self) -> anyhow::Result<()> {
        let handle = lock(&self.loop_thread)?.take();
        match handle {
            Some(handle) => handle
                .join()
                .map_err(|_| anyhow!("game loop thread panicked")),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> anyhow::Result<MutexGuard<'_, T>> {
    mutex.lock().map_err(|_| anyhow!("app state lock poisoned"))
}
