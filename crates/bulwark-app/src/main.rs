//! `bulwark`: run the rocket-defense simulation headless.
//!
//! Frames stream to stdout as JSON lines; logs go to stderr.

use std::io::{self, BufRead, BufWriter};
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context;
use clap::Parser;

use bulwark_app::game_loop::{self, Driver, LoopSettings};
use bulwark_app::input;
use bulwark_app::sink::JsonLines;
use bulwark_app::state::{AppState, GameLoopCommand};
use bulwark_core::commands::PlayerCommand;
use bulwark_core::config::Tuning;
use bulwark_core::geometry::CanvasScale;
use bulwark_sim::{SimConfig, SimulationEngine};

/// Frames run in batch mode when `--ticks` is not given.
const DEFAULT_BATCH_TICKS: u64 = 3_600;

#[derive(Debug, Parser)]
#[command(name = "bulwark", version, about = "Headless rocket-defense simulation")]
struct Args {
    /// RNG seed. The same seed and inputs replay the same game.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of frames to run. Unbounded in realtime mode if omitted.
    #[arg(long)]
    ticks: Option<u64>,

    /// JSON file overriding balance and layout values.
    #[arg(long, value_name = "PATH")]
    tuning: Option<PathBuf>,

    /// Let a scripted player fire at incoming rockets.
    #[arg(long)]
    autopilot: bool,

    /// Run at the display tick rate and read commands from stdin.
    #[arg(long)]
    realtime: bool,

    /// Width of the displayed canvas in pixels, for `tap` input.
    #[arg(long, default_value_t = 800.0)]
    display_width: f64,

    /// Height of the displayed canvas in pixels, for `tap` input.
    #[arg(long, default_value_t = 600.0)]
    display_height: f64,

    /// Emit every Nth frame.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    emit_every: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    let config = SimConfig {
        seed: args.seed,
        tuning,
    };
    let settings = LoopSettings {
        scale: CanvasScale::new(args.display_width, args.display_height),
        autopilot: args.autopilot,
        emit_every: args.emit_every,
        max_ticks: args.ticks,
    };

    if args.realtime {
        run_realtime(config, settings)
    } else {
        run_batch(config, settings)
    }
}

fn run_batch(config: SimConfig, settings: LoopSettings) -> anyhow::Result<()> {
    let ticks = settings.max_ticks.unwrap_or(DEFAULT_BATCH_TICKS);
    log::info!("batch run: {ticks} ticks, seed {}", config.seed);

    let engine = SimulationEngine::new(config);
    let sink = JsonLines::new(BufWriter::new(io::stdout()));
    let mut driver = Driver::new(engine, &settings, sink);
    driver.handle(GameLoopCommand::Player(PlayerCommand::Start));

    let status = game_loop::run_batch(&mut driver, ticks)?;
    let state = driver.engine().snapshot();
    log::info!(
        "batch finished: {status:?} at tick {}, score {}, level {}",
        state.tick,
        state.score,
        state.level
    );
    Ok(())
}

fn run_realtime(config: SimConfig, settings: LoopSettings) -> anyhow::Result<()> {
    let app = AppState::new();
    app.start_simulation(config, settings, JsonLines::new(io::stdout()))?;

    // The stdin reader owns the only sender, so end of input disconnects the
    // channel and stops the loop.
    let tx = app.take_sender()?;
    std::thread::Builder::new()
        .name("bulwark-stdin".into())
        .spawn(move || forward_stdin(&tx))
        .context("failed to spawn stdin reader")?;

    app.join()?;
    if let Some(frame) = app.latest_snapshot()? {
        log::info!(
            "session ended: {:?}, score {}, level {}",
            frame.state.status,
            frame.state.score,
            frame.state.level
        );
    }
    Ok(())
}

/// Parse stdin lines into loop commands until `quit`, end of input, or the
/// loop going away.
fn forward_stdin(tx: &mpsc::Sender<GameLoopCommand>) {
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("stdin read failed: {err}");
                return;
            }
        };
        match input::parse_line(&line) {
            Ok(Some(command)) => {
                let quit = matches!(command, GameLoopCommand::Shutdown);
                if tx.send(command).is_err() || quit {
                    return;
                }
            }
            Ok(None) => {}
            Err(err) => log::warn!("ignoring {line:?}: {err}"),
        }
    }
    log::info!("stdin closed, stopping");
}
