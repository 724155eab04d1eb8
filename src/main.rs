use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{GameConfig, FRAME_INTERVAL_MS};
use grid_snake::error::AppError;
use grid_snake::game::{Session, TickOutcome};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer::Screen;
use grid_snake::terminal_runtime::TerminalSession;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Classic snake on a fixed grid, in the terminal")]
struct Cli {
    /// JSON config file; defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Milliseconds per game tick.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Points awarded per food.
    #[arg(long)]
    points: Option<u32>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write trace logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let config = resolve_config(&cli)?;
    info!(?config, "starting");

    let mut session = match cli.seed {
        Some(seed) => Session::new_with_seed(config, seed),
        None => Session::new(config),
    };

    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::new(Duration::from_millis(FRAME_INTERVAL_MS));
    let tick_interval = Duration::from_millis(config.tick_interval_ms);
    let mut screen = Screen::Start;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(&session.snapshot(), screen)?;

        for game_input in input.drain()? {
            if game_input == GameInput::Quit {
                info!(score = session.score(), "quit");
                return Ok(());
            }

            match screen {
                Screen::Start => {
                    screen = Screen::Playing;
                    last_tick = Instant::now();
                }
                Screen::Playing => session.apply_input(game_input),
            }
        }

        if !terminal.fits(session.bounds())? {
            last_tick = Instant::now();
            continue;
        }

        if screen == Screen::Playing && last_tick.elapsed() >= tick_interval {
            if let TickOutcome::Collided(_) | TickOutcome::BoardFilled = session.tick() {
                info!(score = session.score(), "final score");
            }
            last_tick = Instant::now();
        }
    }
}

/// Loads the config file, then applies command-line overrides.
fn resolve_config(cli: &Cli) -> Result<GameConfig, AppError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::load_default()?,
    };

    if let Some(width) = cli.width {
        config.grid.width = width;
    }
    if let Some(height) = cli.height {
        config.grid.height = height;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    if let Some(points) = cli.points {
        config.points_per_food = points;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "grid_snake=debug".into()))
        .init();

    Ok(())
}
