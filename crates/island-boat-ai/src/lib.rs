//! Boat AI for the island defender simulation.
//!
//! Implements the boat behaviour state machine (approach, station turn,
//! threat response, cannon tracking) and the continuous steering that
//! turns its targets into motion.

pub mod fsm;
pub mod profiles;
pub mod steering;

pub use island_core as core;
