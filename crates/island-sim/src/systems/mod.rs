//! Systems that advance the simulation state each tick.
//!
//! Systems are plain functions over `&mut SimulationState` (or `&` for
//! read-only ones) plus the immutable `Arena`. They own no state.

pub mod aim;
pub mod boat_ai;
pub mod hit_resolution;
pub mod movement;
pub mod particles;
pub mod projectiles;
pub mod snapshot;
