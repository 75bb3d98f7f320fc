//! Hit and prediction detection for fort-local projectiles.
//!
//! Fort shots live in fort-local coordinates: the barrel points down local
//! -z, so a shot's distance downrange is `-z`. A boat is "in line" when its
//! range matches that distance and its bearing lines up with the fort
//! azimuth. Confirmed hits use the azimuth frozen at launch; predictions use
//! the live one. The angular window is a fixed angle, so its width in world
//! units grows with range.

use std::f32::consts::{PI, TAU};

use island_core::components::Boat;
use island_core::config::GeometryConfig;
use island_core::types::{bearing_from_origin, PhaseSpace};

/// What a projectile struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Fort,
    Boat(usize),
}

/// Whether `point` is inside the fort hit volume. Rotation invariant, so
/// it accepts fort-local and world positions alike.
pub fn hits_fort(point: &PhaseSpace, geometry: &GeometryConfig) -> bool {
    let p = point.position;
    let reach = geometry.fort_hit_radius();
    p.x * p.x + p.z * p.z < reach * reach
        && (p.y - geometry.fort_core_center()).abs() < geometry.fort_hit_half_band
}

/// First living boat lined up with a fort-local `point` for a fort rotated
/// to `azimuth`.
pub fn boat_in_line(
    point: &PhaseSpace,
    azimuth: f32,
    boats: &[Boat],
    geometry: &GeometryConfig,
) -> Option<usize> {
    let p = point.position;
    let window = geometry.boat_hit_window;
    boats.iter().position(|boat| {
        if !boat.is_alive() {
            return false;
        }
        let in_range = (p.z + boat.distance()).abs() < geometry.boat_hit_reach();
        let offset = (bearing_from_origin(boat.position.x, boat.position.z) + PI + azimuth)
            .rem_euclid(TAU);
        let in_bearing = offset < window || offset > TAU - window;
        let in_height = (p.y - boat.position.y).abs() < geometry.boat_hit_band();
        in_range && in_bearing && in_height
    })
}

/// Confirmed hit test for a live fort shot. Only a falling shot can hit;
/// the fort itself is checked before any boat.
pub fn check_hit(
    shot: &PhaseSpace,
    launch_azimuth: f32,
    boats: &[Boat],
    geometry: &GeometryConfig,
) -> Option<HitTarget> {
    if !shot.is_descending() {
        return None;
    }
    if hits_fort(shot, geometry) {
        return Some(HitTarget::Fort);
    }
    boat_in_line(shot, launch_azimuth, boats, geometry).map(HitTarget::Boat)
}

/// Which boat a hypothetical shot ending at `terminal` would hit, if the
/// fort were rotated to `live_azimuth`. No descending requirement.
pub fn predict_hit(
    terminal: &PhaseSpace,
    live_azimuth: f32,
    boats: &[Boat],
    geometry: &GeometryConfig,
) -> Option<usize> {
    boat_in_line(terminal, live_azimuth, boats, geometry)
}

/// Whether a world-space boat shot has come down on the fort.
pub fn strikes_fort(shot: &PhaseSpace, geometry: &GeometryConfig) -> bool {
    shot.is_descending() && hits_fort(shot, geometry)
}
