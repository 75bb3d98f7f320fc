//! Plain data held by the simulation state.
//!
//! Components carry no behaviour beyond small derived accessors.
//! Game logic lives in the AI crate and the simulation systems.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::GeometryConfig;
use crate::constants::{FORT_INITIAL_ELEVATION, PARTICLE_COUNT, PARTICLE_PARK_HEIGHT};
use crate::enums::BoatPhase;
use crate::types::PhaseSpace;

/// The player's fort at the world origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fort {
    /// Yaw of the whole fort (radians, unbounded).
    pub azimuth: f32,
    /// Cannon pitch (radians, within [0, π]).
    pub elevation: f32,
}

impl Default for Fort {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: FORT_INITIAL_ELEVATION,
        }
    }
}

impl Fort {
    /// Muzzle state of a fresh shot in fort-local coordinates.
    pub fn muzzle(&self, geometry: &GeometryConfig) -> PhaseSpace {
        let (sin, cos) = self.elevation.sin_cos();
        let offset = geometry.fort_spar_offset;
        let speed = geometry.muzzle_speed;
        PhaseSpace::new(
            Vec3::new(0.0, geometry.fort_height + offset * sin, -offset * cos),
            Vec3::new(0.0, speed * sin, -speed * cos),
        )
    }
}

/// Steering targets and current angles of a boat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Helm {
    /// Signed speed the boat is easing toward.
    pub target_speed: f32,
    /// Signed cruise speed used when a stationed boat has to move.
    pub nominal_speed: f32,
    /// Current hull heading; the boat moves along `(sin, cos)` of it.
    pub heading: f32,
    pub heading_target: f32,
    /// Heading the boat spawned with.
    pub original_heading: f32,
    /// Current cannon yaw.
    pub cannon_yaw: f32,
    pub cannon_yaw_target: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoatFlags {
    pub destroyed: bool,
    /// The station turn has been engaged.
    pub turning: bool,
    /// The fort's aim has been predicted to hit this boat.
    pub threatened: bool,
    /// Cruise direction has been reversed for the current threat.
    pub evading: bool,
    pub particles_spawned: bool,
}

/// A hostile boat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    /// World position; y follows the sea surface.
    pub position: Vec3,
    /// Signed speed along the heading.
    pub speed: f32,
    pub helm: Helm,
    pub cannon_pitch: f32,
    pub phase: BoatPhase,
    pub flags: BoatFlags,
}

impl Boat {
    pub fn is_alive(&self) -> bool {
        !self.flags.destroyed
    }

    /// Planar velocity as (x, z).
    pub fn velocity(&self) -> Vec2 {
        let (sin, cos) = self.helm.heading.sin_cos();
        Vec2::new(self.speed * sin, self.speed * cos)
    }

    /// Squared horizontal distance from the fort.
    pub fn distance_sq(&self) -> f32 {
        self.position.x * self.position.x + self.position.z * self.position.z
    }

    /// Horizontal distance from the fort.
    pub fn distance(&self) -> f32 {
        self.distance_sq().sqrt()
    }

    /// Muzzle state of a fresh shot fired at the boat's current pose.
    pub fn muzzle(&self, geometry: &GeometryConfig) -> PhaseSpace {
        let (sin_pitch, cos_pitch) = self.cannon_pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.helm.cannon_yaw.sin_cos();
        let direction = Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw);
        PhaseSpace::new(
            self.position + direction * geometry.boat_muzzle_offset(),
            direction * geometry.muzzle_speed,
        )
    }
}

/// Coordinate frame a projectile's phase-space point lives in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShotFrame {
    /// Fort-local; rotate by the azimuth frozen at launch to reach world space.
    Fort { launch_azimuth: f32 },
    World,
}

/// A cannonball slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub state: PhaseSpace,
    pub active: bool,
    pub frame: ShotFrame,
}

impl Projectile {
    /// An idle slot in the given frame.
    pub fn idle(frame: ShotFrame) -> Self {
        Self {
            state: PhaseSpace::default(),
            active: false,
            frame,
        }
    }

    /// Position in world space.
    pub fn world_position(&self) -> Vec3 {
        match self.frame {
            ShotFrame::Fort { launch_azimuth } => {
                crate::types::fort_to_world(self.state.position, launch_azimuth)
            }
            ShotFrame::World => self.state.position,
        }
    }

    /// Position used for surface queries. A fort shot follows the fort's
    /// live azimuth; a boat shot is already in world space.
    pub fn surface_position(&self, fort_azimuth: f32) -> Vec3 {
        match self.frame {
            ShotFrame::Fort { .. } => {
                crate::types::fort_to_world(self.state.position, fort_azimuth)
            }
            ShotFrame::World => self.state.position,
        }
    }

    /// Azimuth frozen at launch, if this is a fort shot.
    pub fn launch_azimuth(&self) -> Option<f32> {
        match self.frame {
            ShotFrame::Fort { launch_azimuth } => Some(launch_azimuth),
            ShotFrame::World => None,
        }
    }
}

/// Debris thrown up by a destroyed boat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleBurst {
    pub particles: Vec<PhaseSpace>,
}

impl ParticleBurst {
    /// A parked burst with the given launch velocities.
    pub fn parked(velocities: impl IntoIterator<Item = Vec3>) -> Self {
        let particles = velocities
            .into_iter()
            .take(PARTICLE_COUNT)
            .map(|velocity| {
                PhaseSpace::new(Vec3::new(0.0, PARTICLE_PARK_HEIGHT, 0.0), velocity)
            })
            .collect();
        Self { particles }
    }

    /// Particles that have not been parked.
    pub fn active(&self) -> impl Iterator<Item = &PhaseSpace> {
        self.particles.iter().filter(|p| !is_parked(p))
    }
}

/// Whether a particle sits at the park height.
pub fn is_parked(particle: &PhaseSpace) -> bool {
    particle.position.y <= PARTICLE_PARK_HEIGHT
}

/// Round counters. `won` and `lost` latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Boat shots that struck the fort.
    pub damage: u32,
    /// Boats destroyed.
    pub score: u32,
    pub won: bool,
    pub lost: bool,
}

impl RoundState {
    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }
}
