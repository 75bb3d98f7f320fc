//! Simulation snapshot: the complete visible state handed to a renderer
//! after each tick. Everything is in world space.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;

/// Complete read-only view of the simulation after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub phase: GamePhase,
    /// Simulated seconds since the round started, pauses excluded.
    pub time: f64,
    pub frame_rate: f64,
    pub tessellation: u32,
    pub fort: FortView,
    pub boats: Vec<BoatView>,
    /// Active cannonballs.
    pub projectiles: Vec<ProjectileView>,
    /// Positions of airborne debris particles.
    pub particles: Vec<Vec3>,
    pub round: RoundView,
    /// Look-ahead of the fort's current aim, world space.
    pub aim_preview: Vec<Vec3>,
    /// Boat the current aim would hit, if any.
    pub predicted_target: Option<usize>,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FortView {
    pub azimuth: f32,
    pub elevation: f32,
    pub shot_in_flight: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoatView {
    pub index: usize,
    pub position: Vec3,
    pub heading: f32,
    pub speed: f32,
    pub cannon_yaw: f32,
    pub cannon_pitch: f32,
    pub phase: BoatPhase,
    pub destroyed: bool,
    pub threatened: bool,
    pub evading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub shooter: Shooter,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub damage: u32,
    pub damage_ceiling: u32,
    pub score: u32,
    pub boats_total: u32,
    pub won: bool,
    pub lost: bool,
}
