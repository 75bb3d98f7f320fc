use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use island_app::control;
use island_app::game_loop::DEFAULT_TICK_HZ;
use island_app::input::{map_line, KeyAction};
use island_app::state::{AppError, AppState};
use island_core::config::GeometryConfig;
use island_core::enums::GamePhase;
use island_sim::{SimConfig, SimError, SimulationEngine};
use island_terrain::load_hmap;

/// Defend the island: a headless driver for the artillery simulation.
///
/// Type keys followed by Enter: any key starts the round, then w/s raise
/// and lower the cannon, a/d turn the fort, space fires, g pauses, = and -
/// change the mesh detail, q quits.
#[derive(Debug, Parser)]
#[command(name = "island-defender", version)]
struct Cli {
    /// RNG seed for the fleet layout.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// JSON file overriding geometry constants.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Island heightmap (.hmap); the bundled island by default.
    #[arg(long)]
    terrain: Option<PathBuf>,
    /// Game loop cadence.
    #[arg(long, default_value_t = DEFAULT_TICK_HZ)]
    tick_hz: u32,
    /// Print the final snapshot as JSON on exit.
    #[arg(long)]
    json: bool,
}

fn build_engine(cli: &Cli) -> Result<SimulationEngine, SimError> {
    let geometry = match &cli.config {
        Some(path) => GeometryConfig::load(path)?,
        None => GeometryConfig::default(),
    };
    let terrain = cli.terrain.as_deref().map(load_hmap).transpose()?;
    SimulationEngine::new(SimConfig {
        seed: cli.seed,
        geometry,
        terrain,
        ..Default::default()
    })
}

fn current_phase(state: &AppState) -> GamePhase {
    control::get_snapshot(state)
        .ok()
        .flatten()
        .map(|snapshot| snapshot.phase)
        .unwrap_or_default()
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let state = AppState::new();
    control::start_simulation(&state, build_engine(cli)?, cli.tick_hz)?;
    log::info!("press any key and Enter to start, q to quit");

    'input: for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        for action in map_line(&line, current_phase(&state)) {
            match action {
                KeyAction::Command(command) => control::send_command(&state, command)?,
                KeyAction::Quit => break 'input,
                KeyAction::Ignore => {}
            }
        }
    }

    let last = control::get_snapshot(&state)?;
    control::shutdown(&state)?;

    if let Some(snapshot) = last {
        log::info!("{}", island_app::game_loop::status_line(&snapshot));
        if cli.json {
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(err) => log::error!("failed to encode snapshot: {err}"),
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
