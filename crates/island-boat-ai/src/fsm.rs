//! Boat behavior finite state machine.
//!
//! Pure functions that compute phase transitions and steering targets for
//! one boat based on its phase, pose and whether the fort's current aim is
//! predicted to hit it. No simulation dependency; operates on plain data.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use island_core::components::{Boat, BoatFlags, Helm};
use island_core::enums::BoatPhase;
use island_core::types::{bearing_from_origin, normalize_angle, shortest_target};

use crate::profiles::BoatProfile;

/// Input to the boat FSM for a single boat.
#[derive(Debug, Clone, Copy)]
pub struct BoatContext {
    pub phase: BoatPhase,
    pub position: Vec3,
    pub helm: Helm,
    pub flags: BoatFlags,
    /// Distance at which boats stop and open fire.
    pub station_radius: f32,
    /// Whether a look-ahead of the fort's live aim ends on this boat.
    pub predicted_hit: bool,
}

impl BoatContext {
    pub fn new(boat: &Boat, station_radius: f32, predicted_hit: bool) -> Self {
        Self {
            phase: boat.phase,
            position: boat.position,
            helm: boat.helm,
            flags: boat.flags,
            station_radius,
            predicted_hit,
        }
    }

    fn distance_sq(&self) -> f32 {
        self.position.x * self.position.x + self.position.z * self.position.z
    }
}

/// Output from the boat FSM.
#[derive(Debug, Clone, Copy)]
pub struct BoatUpdate {
    pub new_phase: BoatPhase,
    pub helm: Helm,
    pub flags: BoatFlags,
    pub phase_changed: bool,
    /// The boat reversed its cruise direction this tick.
    pub started_evading: bool,
}

impl BoatUpdate {
    /// Write the update back onto the boat it was computed for.
    pub fn apply(&self, boat: &mut Boat) {
        boat.phase = self.new_phase;
        boat.helm = self.helm;
        boat.flags = self.flags;
    }
}

/// Evaluate the FSM for one boat. Returns the updated phase, helm and flags.
pub fn evaluate(ctx: &BoatContext, profile: &BoatProfile) -> BoatUpdate {
    let no_change = BoatUpdate {
        new_phase: ctx.phase,
        helm: ctx.helm,
        flags: ctx.flags,
        phase_changed: false,
        started_evading: false,
    };

    // Wrecks only drive their debris.
    if ctx.flags.destroyed {
        return no_change;
    }

    match ctx.phase {
        BoatPhase::Approaching => evaluate_approaching(ctx, profile, no_change),
        BoatPhase::Stationed => evaluate_stationed(ctx, profile, no_change),
    }
}

fn evaluate_approaching(
    ctx: &BoatContext,
    profile: &BoatProfile,
    mut update: BoatUpdate,
) -> BoatUpdate {
    let helm = &mut update.helm;
    let flags = &mut update.flags;
    let d2 = ctx.distance_sq();
    let r2 = ctx.station_radius * ctx.station_radius;

    if d2 < r2 {
        helm.target_speed = 0.0;
    }

    // Engage the quarter turn exactly once.
    if d2 <= r2 && !flags.turning {
        helm.heading = normalize_angle(helm.heading);
        let target = normalize_angle(helm.heading_target + FRAC_PI_2);
        helm.heading_target = shortest_target(helm.heading, target);
        flags.turning = true;
    }

    if (helm.heading - helm.heading_target).abs() < profile.angle_tolerance {
        helm.heading = helm.heading_target;
        if flags.turning {
            update.new_phase = BoatPhase::Stationed;
            update.phase_changed = true;
        }
    }

    update
}

fn evaluate_stationed(
    ctx: &BoatContext,
    profile: &BoatProfile,
    mut update: BoatUpdate,
) -> BoatUpdate {
    let helm = &mut update.helm;
    let flags = &mut update.flags;
    let buffered = ctx.station_radius + profile.station_buffer;
    let d2 = ctx.distance_sq();

    if ctx.predicted_hit {
        helm.target_speed = helm.nominal_speed;
        // Reverse once per threat episode, and only when already outside
        // the buffered radius.
        if d2 > buffered * buffered && !flags.evading {
            helm.nominal_speed = -helm.nominal_speed;
            flags.evading = true;
            update.started_evading = true;
        }
        flags.threatened = true;
    } else if flags.threatened {
        helm.target_speed = 0.0;

        // Swing the cannon back onto the fort.
        let home = normalize_angle(bearing_from_origin(ctx.position.x, ctx.position.z) + PI);
        helm.cannon_yaw = normalize_angle(helm.cannon_yaw);
        helm.cannon_yaw_target = shortest_target(helm.cannon_yaw, home);
        if (helm.cannon_yaw - helm.cannon_yaw_target).abs() < profile.angle_tolerance {
            helm.cannon_yaw = helm.cannon_yaw_target;
        }

        if d2 < buffered * buffered {
            flags.evading = false;
        }
    }

    update
}
