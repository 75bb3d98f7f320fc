//! Continuous boat motion: speed easing, hull and cannon traverse.
//!
//! The FSM only sets targets; these functions move the boat toward them
//! at the profile's rates. The y coordinate is left to the caller, which
//! floats the boat on the sea surface.

use island_core::components::Boat;

use crate::profiles::BoatProfile;

/// Ease a signed speed toward `target` at the profile's acceleration.
///
/// The target is clamped to the profile's speed range and snaps once
/// within the speed tolerance.
pub fn ease_speed(speed: f32, target: f32, profile: &BoatProfile, dt: f32) -> f32 {
    let target = target.clamp(-profile.max_speed, profile.max_speed);
    if (speed - target).abs() <= profile.speed_tolerance {
        return target;
    }
    let step = profile.max_accel * dt;
    (speed + (target - speed).clamp(-step, step)).clamp(-profile.max_speed, profile.max_speed)
}

/// Rotate `angle` toward `target` by at most `rate * dt`, never past it.
pub fn turn_toward(angle: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let step = rate * dt;
    angle + (target - angle).clamp(-step, step)
}

/// Advance one boat by `dt`: speed, planar position, cannon, then hull.
///
/// The hull only turns while the boat is dead in the water.
pub fn advance(boat: &mut Boat, profile: &BoatProfile, dt: f32) {
    if boat.flags.destroyed {
        return;
    }

    boat.speed = ease_speed(boat.speed, boat.helm.target_speed, profile, dt);
    let velocity = boat.velocity();
    boat.position.x += velocity.x * dt;
    boat.position.z += velocity.y * dt;

    boat.helm.cannon_yaw = turn_toward(
        boat.helm.cannon_yaw,
        boat.helm.cannon_yaw_target,
        profile.cannon_turn_rate,
        dt,
    );

    if boat.speed == 0.0 {
        boat.helm.heading = turn_toward(
            boat.helm.heading,
            boat.helm.heading_target,
            profile.turn_rate,
            dt,
        );
    }
}
