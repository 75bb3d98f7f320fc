//! Headless island defender driver.
//!
//! Runs the simulation engine on its own thread at a fixed cadence and
//! feeds it player commands mapped from key presses.

pub mod control;
pub mod game_loop;
pub mod input;
pub mod state;

pub use island_core as core;
