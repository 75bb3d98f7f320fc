//! Session geometry.
//!
//! One immutable [`GeometryConfig`] is built at startup and handed to every
//! component that measures anything. Partial JSON overrides are accepted;
//! missing fields fall back to the values in [`crate::constants`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Failure to load a geometry override file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read geometry config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed geometry config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid geometry: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub gravity: f32,

    pub fort_radius: f32,
    pub fort_base_height: f32,
    pub fort_core_radius: f32,
    pub fort_core_raise: f32,
    pub fort_height: f32,
    pub fort_hit_half_band: f32,
    pub fort_spar_offset: f32,
    pub cannon_length: f32,
    pub muzzle_speed: f32,
    pub damage_ceiling: u32,

    pub island_extent: f32,
    pub sea_level_offset: f32,
    pub open_sea_floor: f32,

    pub boat_ring_radius: f32,
    pub boat_length: f32,
    pub boat_height: f32,
    pub boat_deck_half_extent: f32,
    pub boat_cannon_pitch: f32,

    pub ball_radius: f32,
    pub boat_hit_window: f32,
    pub lookahead_dt: f32,
    pub lookahead_max_steps: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            fort_radius: FORT_RADIUS,
            fort_base_height: FORT_BASE_HEIGHT,
            fort_core_radius: FORT_CORE_RADIUS,
            fort_core_raise: FORT_CORE_RAISE,
            fort_height: FORT_HEIGHT,
            fort_hit_half_band: FORT_HIT_HALF_BAND,
            fort_spar_offset: FORT_SPAR_OFFSET,
            cannon_length: CANNON_LENGTH,
            muzzle_speed: MUZZLE_SPEED,
            damage_ceiling: DAMAGE_CEILING,
            island_extent: ISLAND_EXTENT,
            sea_level_offset: SEA_LEVEL_OFFSET,
            open_sea_floor: OPEN_SEA_FLOOR,
            boat_ring_radius: BOAT_RING_RADIUS,
            boat_length: BOAT_LENGTH,
            boat_height: BOAT_HEIGHT,
            boat_deck_half_extent: BOAT_DECK_HALF_EXTENT,
            boat_cannon_pitch: BOAT_CANNON_PITCH,
            ball_radius: BALL_RADIUS,
            boat_hit_window: BOAT_HIT_WINDOW,
            lookahead_dt: LOOKAHEAD_DT,
            lookahead_max_steps: LOOKAHEAD_MAX_STEPS,
        }
    }
}

impl GeometryConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON override from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values that would stall look-ahead or invert the world.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity >= 0.0 {
            return Err(ConfigError::Invalid("gravity must point down"));
        }
        if self.lookahead_dt <= 0.0 || self.lookahead_max_steps == 0 {
            return Err(ConfigError::Invalid("look-ahead must take positive steps"));
        }
        if self.island_extent <= 0.0 {
            return Err(ConfigError::Invalid("island extent must be positive"));
        }
        if self.open_sea_floor >= -self.sea_level_offset {
            return Err(ConfigError::Invalid(
                "open sea floor must lie below the lowest terrain",
            ));
        }
        Ok(())
    }

    /// Half the island side length.
    pub fn island_half_extent(&self) -> f32 {
        self.island_extent / 2.0
    }

    /// Height of the centre of the fort hit volume, midway between the
    /// pivot region and the muzzle ring.
    pub fn fort_core_center(&self) -> f32 {
        3.0 + (self.fort_height - 3.0 + self.fort_spar_offset - self.cannon_length) / 2.0
    }

    /// Horizontal reach of the fort hit volume.
    pub fn fort_hit_radius(&self) -> f32 {
        self.fort_radius + self.fort_base_height + self.ball_radius
    }

    /// Distance from a boat's deck to its muzzle.
    pub fn boat_muzzle_offset(&self) -> f32 {
        self.cannon_length + self.boat_height / 2.0
    }

    /// Launch height used when deriving the station radius.
    pub fn boat_launch_height(&self) -> f32 {
        self.fort_height - self.boat_height / 2.0
    }

    /// Amount subtracted from the raw boat-cannon range to get the
    /// station radius.
    pub fn station_margin(&self) -> f32 {
        2.0 * self.fort_radius + self.fort_base_height
    }

    /// Radial tolerance of the boat hit test.
    pub fn boat_hit_reach(&self) -> f32 {
        self.boat_length / 2.0 + self.ball_radius
    }

    /// Vertical tolerance of the boat hit test.
    pub fn boat_hit_band(&self) -> f32 {
        self.boat_height / 2.0 + self.ball_radius
    }
}
