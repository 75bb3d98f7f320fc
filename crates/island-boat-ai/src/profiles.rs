//! Boat behavioural profile.
//!
//! Consolidates the motion limits and tolerances used by the FSM and the
//! steering model.

use serde::{Deserialize, Serialize};

use island_core::constants::*;

/// Motion limits and tolerances for one class of boat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoatProfile {
    /// Top speed in either direction.
    pub max_speed: f32,
    /// Speed change per second.
    pub max_accel: f32,
    /// Hull turn rate (rad/s). The hull only turns while stopped.
    pub turn_rate: f32,
    /// Cannon traverse rate (rad/s).
    pub cannon_turn_rate: f32,
    /// Cruise speed of a stationed boat that has to move.
    pub nominal_speed: f32,
    /// Angles closer than this snap to their target.
    pub angle_tolerance: f32,
    /// Speeds closer than this snap to their target.
    pub speed_tolerance: f32,
    /// Buffer beyond the station radius for the evasion hysteresis.
    pub station_buffer: f32,
}

impl BoatProfile {
    /// The only boat class in the game.
    pub fn standard() -> Self {
        Self {
            max_speed: BOAT_MAX_SPEED,
            max_accel: BOAT_MAX_ACCEL,
            turn_rate: BOAT_TURN_RATE,
            cannon_turn_rate: BOAT_CANNON_TURN_RATE,
            nominal_speed: BOAT_NOMINAL_SPEED,
            angle_tolerance: BOAT_ANGLE_TOLERANCE,
            speed_tolerance: BOAT_SPEED_TOLERANCE,
            station_buffer: STATION_BUFFER,
        }
    }
}

impl Default for BoatProfile {
    fn default() -> Self {
        Self::standard()
    }
}
