//! Game loop: runs the simulation engine at `TICK_RATE` and emits frames.
//!
//! The engine is created inside the loop thread, which owns it outright.
//! Commands arrive via an `mpsc` channel and are drained at the top of each
//! frame. Frames go to a `FrameSink` and to shared state for polling.

use std::io;
use std::ops::ControlFlow;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use bulwark_core::constants::TICK_RATE;
use bulwark_core::enums::GameStatus;
use bulwark_core::events::GameEvent;
use bulwark_core::geometry::CanvasScale;
use bulwark_sim::{FrameSnapshot, SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::input::PointerMapper;
use crate::sink::FrameSink;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Knobs shared by the threaded and batch loops.
#[derive(Debug, Clone)]
pub struct LoopSettings {
    /// Displayed canvas size, for pointer mapping.
    pub scale: CanvasScale,
    pub autopilot: bool,
    /// Emit every Nth frame. Events from skipped frames ride along with the
    /// next emitted one.
    pub emit_every: u32,
    /// Stop after this many frames.
    pub max_ticks: Option<u64>,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            scale: CanvasScale::default(),
            autopilot: false,
            emit_every: 1,
            max_ticks: None,
        }
    }
}

/// One engine plus everything that feeds it and reads from it.
pub struct Driver<S> {
    engine: SimulationEngine,
    pointer: PointerMapper,
    autopilot: Option<Autopilot>,
    sink: S,
    emit_every: u64,
    frames: u64,
    carried_events: Vec<GameEvent>,
    last_emitted_status: Option<GameStatus>,
    latest_snapshot: Option<Arc<Mutex<Option<FrameSnapshot>>>>,
}

impl<S: FrameSink> Driver<S> {
    pub fn new(engine: SimulationEngine, settings: &LoopSettings, sink: S) -> Self {
        Self {
            engine,
            pointer: PointerMapper::new(settings.scale),
            autopilot: settings.autopilot.then(Autopilot::default),
            sink,
            emit_every: u64::from(settings.emit_every.max(1)),
            frames: 0,
            carried_events: Vec::new(),
            last_emitted_status: None,
            latest_snapshot: None,
        }
    }

    /// Also publish every frame into `latest`.
    pub fn with_latest(mut self, latest: Arc<Mutex<Option<FrameSnapshot>>>) -> Self {
        self.latest_snapshot = Some(latest);
        self
    }

    /// Route one command. `Break` means the loop should stop.
    pub fn handle(&mut self, command: GameLoopCommand) -> ControlFlow<()> {
        match command {
            GameLoopCommand::Player(cmd) => self.engine.queue_command(cmd),
            GameLoopCommand::Pointer(event) => {
                if let Some(cmd) = self.pointer.map(event) {
                    self.engine.queue_command(cmd);
                }
            }
            GameLoopCommand::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Advance one frame and emit it when due. Returns the new status.
    pub fn advance(&mut self) -> anyhow::Result<GameStatus> {
        if let Some(autopilot) = &mut self.autopilot {
            if let Some(cmd) = autopilot.decide(self.engine.snapshot(), self.engine.tuning()) {
                self.engine.queue_command(cmd);
            }
        }

        let mut frame = self.engine.tick();
        self.frames += 1;
        self.carried_events.append(&mut frame.events);
        let status = frame.state.status;

        let status_changed = self.last_emitted_status != Some(status);
        if status_changed || self.frames % self.emit_every == 0 {
            frame.events = std::mem::take(&mut self.carried_events);
            self.sink.emit(&frame)?;
            self.last_emitted_status = Some(status);
        }

        if let Some(latest) = &self.latest_snapshot {
            if let Ok(mut lock) = latest.lock() {
                *lock = Some(frame);
            }
        }
        Ok(status)
    }

    /// Frames advanced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input side, and the thread handle.
pub fn spawn_game_loop<S>(
    config: SimConfig,
    settings: LoopSettings,
    sink: S,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)>
where
    S: FrameSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("bulwark-game-loop".into())
        .spawn(move || {
            log::info!("game loop started at {TICK_RATE} Hz, seed {}", config.seed);
            let engine = SimulationEngine::new(config);
            let driver = Driver::new(engine, &settings, sink).with_latest(latest_snapshot);
            run_game_loop(driver, &cmd_rx, settings.max_ticks);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, the tick limit,
/// or a sink error.
fn run_game_loop<S: FrameSink>(
    mut driver: Driver<S>,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    max_ticks: Option<u64>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(cmd) => {
                    if driver.handle(cmd).is_break() {
                        log::info!("game loop shutting down after {} frames", driver.frames());
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick and emit
        if let Err(err) = driver.advance() {
            log::error!("frame sink failed, stopping game loop: {err:#}");
            return;
        }
        if max_ticks.is_some_and(|max| driver.frames() >= max) {
            log::info!("tick limit reached");
            return;
        }

        // 3. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Run up to `ticks` frames back to back, stopping early once the game
/// reaches a terminal status.
pub fn run_batch<S: FrameSink>(driver: &mut Driver<S>, ticks: u64) -> anyhow::Result<GameStatus> {
    let mut status = driver.engine().status();
    for _ in 0..ticks {
        status = driver.advance()?;
        if status.is_terminal() {
            let state = driver.engine().snapshot();
            log::info!(
                "game over after {} ticks: {status:?}, score {}, level {}",
                state.tick,
                state.score,
                state.level
            );
            break;
        }
    }
    Ok(status)
}
