//! Fundamental geometric and simulation types.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A point mass: position plus velocity, both in world units.
/// x = East, y = Up, z = South (right-handed, y-up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseSpace {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl PhaseSpace {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// True while the point mass is falling.
    pub fn is_descending(&self) -> bool {
        self.velocity.y < 0.0
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Re-express `target` so that turning from `current` toward it takes the
/// shorter way round. Both angles are assumed to lie in `[0, 2π)`.
pub fn shortest_target(current: f32, target: f32) -> f32 {
    let delta = target - current;
    if delta > PI {
        target - TAU
    } else if delta < -PI {
        target + TAU
    } else {
        target
    }
}

/// Bearing of a horizontal point as seen from the origin, measured as
/// `atan2(x, z)`. A point on the +z axis has bearing 0.
pub fn bearing_from_origin(x: f32, z: f32) -> f32 {
    x.atan2(z)
}

/// Rotate a fort-local point about the vertical axis into world space.
///
/// The fort barrel points down local -z; at azimuth 0 local and world
/// coincide.
pub fn fort_to_world(local: Vec3, azimuth: f32) -> Vec3 {
    let (sin, cos) = azimuth.sin_cos();
    Vec3::new(
        local.x * cos - local.z * sin,
        local.y,
        local.x * sin + local.z * cos,
    )
}
