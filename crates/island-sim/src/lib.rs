//! Simulation engine for the island defender.
//!
//! Owns the simulation state, runs the ordered tick pipeline against a
//! wall-derived clock, and produces SimSnapshots for a renderer.

pub mod ballistics;
pub mod clock;
pub mod detector;
pub mod engine;
pub mod pipeline;
pub mod state;
pub mod systems;
pub mod world_setup;

pub use island_core as core;
pub use engine::{SimConfig, SimError, SimulationEngine};
