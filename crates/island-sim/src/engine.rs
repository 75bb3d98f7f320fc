//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the simulation state and clock, processes player
//! commands, runs the pipeline, and produces `SimSnapshot`s. Completely
//! headless, so tests can drive it with explicit timestamps.

use std::collections::VecDeque;
use std::f32::consts::PI;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use island_boat_ai::profiles::BoatProfile;
use island_core::commands::PlayerCommand;
use island_core::config::{ConfigError, GeometryConfig};
use island_core::constants::{AZIMUTH_STEP, ELEVATION_STEP};
use island_core::enums::GamePhase;
use island_core::events::SimEvent;
use island_core::state::SimSnapshot;
use island_terrain::{
    bundled_island, HeightField, HeightmapError, TerrainGrid, Tessellation, WaveField,
};

use crate::clock::SimulationClock;
use crate::pipeline;
use crate::state::{Arena, SimulationState};
use crate::systems;
use crate::systems::snapshot::SnapshotMeta;
use crate::world_setup;

/// Faults that stop an engine from being built.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("terrain: {0}")]
    Terrain(#[from] HeightmapError),
    #[error("geometry: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for the fleet layout and debris. Same seed = same round.
    pub seed: u64,
    pub geometry: GeometryConfig,
    pub sea: WaveField,
    pub profile: BoatProfile,
    /// Island heightmap; the bundled island when `None`.
    pub terrain: Option<TerrainGrid>,
    pub tessellation: Tessellation,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            geometry: GeometryConfig::default(),
            sea: WaveField::default(),
            profile: BoatProfile::standard(),
            terrain: None,
            tessellation: Tessellation::default(),
        }
    }
}

/// The simulation engine. Owns the state, the arena and the clock.
pub struct SimulationEngine {
    arena: Arena,
    state: SimulationState,
    clock: SimulationClock,
    phase: GamePhase,
    tessellation: Tessellation,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    origin: Instant,
}

impl SimulationEngine {
    /// Build the arena and spawn the fleet. The round starts on the first
    /// `StartRound` command.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.geometry.validate()?;
        let grid = match config.terrain {
            Some(grid) => grid,
            None => bundled_island()?,
        };
        let heights = HeightField::new(grid, &config.geometry);
        let arena = Arena::new(config.geometry, config.sea, heights, config.profile);
        log::debug!("station radius {:.3}", arena.station_radius);

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let state = world_setup::setup_round(&mut rng, &arena);

        Ok(Self {
            arena,
            state,
            clock: SimulationClock::new(),
            phase: GamePhase::default(),
            tessellation: config.tessellation,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            origin: Instant::now(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation to the current wall time.
    pub fn tick(&mut self) -> SimSnapshot {
        let now = self.origin.elapsed().as_secs_f64();
        self.tick_at(now)
    }

    /// Advance the simulation to wall time `now` (seconds on any monotonic
    /// clock) and return the resulting snapshot.
    pub fn tick_at(&mut self, now: f64) -> SimSnapshot {
        self.process_commands(now);

        if self.phase == GamePhase::Running {
            if let Some(frame) = self.clock.advance(now) {
                pipeline::run(&mut self.state, &self.arena, frame, &mut self.events);
                self.latch_round();
            }
        }

        let meta = SnapshotMeta {
            phase: self.phase,
            time: self.clock.sim_time(now),
            frame_rate: self.clock.frame_rate(),
            tessellation: self.tessellation.level(),
        };
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.state, &self.arena, meta, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get a read-only reference to the simulation state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn tessellation(&self) -> Tessellation {
        self.tessellation
    }

    /// Mutable state access for scripted test scenarios.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Process all queued commands.
    fn process_commands(&mut self, now: f64) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, now);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand, now: f64) {
        log::debug!("command {command:?} in {:?}", self.phase);
        match command {
            PlayerCommand::StartRound => {
                if self.phase == GamePhase::Idle {
                    self.clock.start(now);
                    self.phase = GamePhase::Running;
                    self.events.push(SimEvent::RoundStarted);
                    log::info!("round started with {} boats", self.state.boats.len());
                } else {
                    log::warn!("start ignored in {:?}", self.phase);
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Running | GamePhase::Paused => {
                    if self.clock.toggle_pause(now) {
                        self.phase = GamePhase::Running;
                        self.events.push(SimEvent::Resumed);
                    } else {
                        self.phase = GamePhase::Paused;
                        self.events.push(SimEvent::Paused);
                    }
                }
                _ => log::warn!("pause ignored in {:?}", self.phase),
            },
            PlayerCommand::AdjustElevation { direction } => {
                if self.accepts_input() {
                    let fort = &mut self.state.fort;
                    fort.elevation =
                        (fort.elevation + direction.sign() * ELEVATION_STEP).clamp(0.0, PI);
                }
            }
            PlayerCommand::AdjustAzimuth { direction } => {
                if self.accepts_input() {
                    self.state.fort.azimuth += direction.sign() * AZIMUTH_STEP;
                }
            }
            PlayerCommand::Fire => {
                if self.accepts_input() {
                    let geometry = &self.arena.geometry;
                    if systems::projectiles::fire_fort(&mut self.state, geometry) {
                        let fort = self.state.fort;
                        log::debug!(
                            "fort fired at azimuth {:.3}, elevation {:.3}",
                            fort.azimuth,
                            fort.elevation
                        );
                        self.events.push(SimEvent::FortShotFired {
                            azimuth: fort.azimuth,
                            elevation: fort.elevation,
                        });
                    } else {
                        log::debug!("fire ignored, shot still in flight");
                    }
                }
            }
            PlayerCommand::SetTessellation { level } => {
                if self.accepts_input() {
                    match Tessellation::new(level) {
                        Ok(tessellation) => self.tessellation = tessellation,
                        Err(err) => log::warn!("{err}"),
                    }
                }
            }
            PlayerCommand::RefineTessellation => {
                if self.accepts_input() {
                    self.tessellation = self.tessellation.refine();
                }
            }
            PlayerCommand::CoarsenTessellation => {
                if self.accepts_input() {
                    self.tessellation = self.tessellation.coarsen();
                }
            }
        }
    }

    /// Aim, fire and display commands are live while a round is in play.
    fn accepts_input(&self) -> bool {
        let live = matches!(self.phase, GamePhase::Running | GamePhase::Paused);
        if !live {
            log::warn!("command ignored in {:?}", self.phase);
        }
        live
    }

    /// Move to a terminal phase once the round has latched.
    fn latch_round(&mut self) {
        let round = self.state.round;
        let phase = if round.won {
            GamePhase::Won
        } else if round.lost {
            GamePhase::Lost
        } else {
            return;
        };
        self.phase = phase;
        self.clock.halt();
        log::info!(
            "round over: {:?} with score {} and damage {}",
            phase,
            round.score,
            round.damage
        );
    }
}
