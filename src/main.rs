use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use env_logger::{Env, Target};
use grid_snake::app::{App, Control};
use grid_snake::config::{
    user_config_path, Config, ConfigOverrides, INPUT_POLL_MS, THEME, TICK_INTERVAL_MS,
};
use grid_snake::error::ConfigError;
use grid_snake::game::GameState;
use grid_snake::input::{Direction, InputHandler};
use grid_snake::renderer;
use grid_snake::rng::Lcg;
use grid_snake::script::{parse_script, run_script};
use grid_snake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file; defaults to the per-user config when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Initial snake length.
    #[arg(long = "start-length")]
    start_length: Option<u16>,

    /// Initial direction: UP, DOWN, LEFT or RIGHT.
    #[arg(long = "start-direction")]
    start_direction: Option<Direction>,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u32>,

    /// Run headless: one character per tick (U/D/L/R turn, P pause, . wait),
    /// then print the final state as JSON.
    #[arg(long)]
    script: Option<String>,

    /// Write logs to this file (filtered by RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            process::exit(2);
        }
    };

    init_logging(cli.log_file.as_deref(), cli.script.is_some())?;

    let seed = cli.seed.unwrap_or_else(rand::random);

    match cli.script.as_deref() {
        Some(script) => run_headless(config, seed, script),
        None => run_interactive(config, seed),
    }
}

fn resolve_config(cli: &Cli) -> Result<Config, ConfigError> {
    let overrides = ConfigOverrides {
        width: cli.width,
        height: cli.height,
        start_length: cli.start_length,
        start_direction: cli.start_direction,
    };

    Config::resolve(
        cli.config.as_deref(),
        user_config_path().as_deref(),
        overrides,
    )
}

/// The interactive UI owns the terminal, so logs only go to a file there.
/// Headless runs log to stderr, keeping stdout for the JSON result.
fn init_logging(log_file: Option<&Path>, headless: bool) -> io::Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    } else if headless {
        builder.target(Target::Stderr);
    } else {
        return Ok(());
    }

    builder.try_init().map_err(io::Error::other)
}

fn run_headless(config: Config, seed: u32, script: &str) -> io::Result<()> {
    let actions =
        parse_script(script).map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    let mut rng = Lcg::new(seed);
    let initial = GameState::new(config, &mut rng);
    let (state, ticks) = run_script(initial, &actions, &mut rng);
    log::info!(
        "script finished after {ticks} of {} ticks: {} with score {}",
        actions.len(),
        state.status_label(),
        state.score
    );

    let json = serde_json::to_string_pretty(&state).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn run_interactive(config: Config, seed: u32) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new(Duration::from_millis(INPUT_POLL_MS));
    let mut app = App::new(
        config,
        seed,
        Duration::from_millis(TICK_INTERVAL_MS),
        Instant::now(),
    );

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, app.state(), &THEME))?;

        if let Some(game_input) = input.poll_input()? {
            if app.apply_input(game_input, Instant::now()) == Control::Quit {
                break;
            }
        }

        app.advance(Instant::now());
    }

    log::info!("quit with score {}", app.state().score);
    Ok(())
}
