//! Ballistic integrator and trajectory look-ahead.
//!
//! Pure physics on phase-space points: no state access. The same step is
//! used for live projectiles (variable dt), debris, and look-ahead
//! (fixed dt, run to the surface in one call).

use glam::Vec3;

use island_core::config::GeometryConfig;
use island_core::types::PhaseSpace;

/// Advance a point mass by `dt`: position first, then vertical velocity.
pub fn step(point: &mut PhaseSpace, gravity: f32, dt: f32) {
    point.position += point.velocity * dt;
    point.velocity.y += gravity * dt;
}

/// Where a look-ahead ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAhead {
    /// State at the first step at or below the surface.
    pub terminal: PhaseSpace,
    pub steps: usize,
    /// False if the step cap ran out before reaching the surface.
    pub landed: bool,
}

/// Integrate with the fixed look-ahead step until the point is at or below
/// `surface(position)`. Always takes at least one step.
pub fn look_ahead(
    start: PhaseSpace,
    geometry: &GeometryConfig,
    surface: impl Fn(Vec3) -> f32,
) -> LookAhead {
    let mut point = start;
    for steps in 1..=geometry.lookahead_max_steps {
        step(&mut point, geometry.gravity, geometry.lookahead_dt);
        if point.position.y <= surface(point.position) {
            return LookAhead {
                terminal: point,
                steps,
                landed: true,
            };
        }
    }
    LookAhead {
        terminal: point,
        steps: geometry.lookahead_max_steps,
        landed: false,
    }
}

/// Sampled look-ahead polyline: the start position followed by every
/// airborne step (the terminal point is not included).
pub fn trajectory(
    start: PhaseSpace,
    geometry: &GeometryConfig,
    surface: impl Fn(Vec3) -> f32,
) -> Vec<Vec3> {
    let mut points = vec![start.position];
    let mut point = start;
    for _ in 0..geometry.lookahead_max_steps {
        step(&mut point, geometry.gravity, geometry.lookahead_dt);
        if point.position.y <= surface(point.position) {
            break;
        }
        points.push(point.position);
    }
    points
}

/// Distance at which a boat stops to shell the fort.
///
/// Fires a boat cannon at its fixed pitch from a boat-height origin down
/// to sea level, then pulls the range in by the fort's footprint.
pub fn station_radius(geometry: &GeometryConfig) -> f32 {
    let (sin, cos) = geometry.boat_cannon_pitch.sin_cos();
    let start = PhaseSpace::new(
        Vec3::new(0.0, geometry.boat_launch_height(), 0.0),
        Vec3::new(0.0, geometry.muzzle_speed * sin, -geometry.muzzle_speed * cos),
    );
    let end = look_ahead(start, geometry, |_| 0.0);
    end.terminal.position.z.abs() - geometry.station_margin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_invariant() {
        let g = GeometryConfig::default();
        let dt = 0.016;
        let mut p = PhaseSpace::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, -6.0));
        for _ in 0..200 {
            let before = p.velocity;
            step(&mut p, g.gravity, dt);
            assert!((p.velocity.y - (before.y + g.gravity * dt)).abs() < 1e-5);
            assert!(p.velocity.y < before.y, "vertical velocity must fall monotonically");
            assert_eq!(p.velocity.x, 4.0);
            assert_eq!(p.velocity.z, -6.0);
        }
    }

    #[test]
    fn test_step_moves_before_accelerating() {
        let mut p = PhaseSpace::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        step(&mut p, -10.0, 0.5);
        // Position uses the pre-step velocity.
        assert_eq!(p.position.y, 0.5);
        assert_eq!(p.velocity.y, -4.0);
    }

    #[test]
    fn test_look_ahead_takes_at_least_one_step() {
        let g = GeometryConfig::default();
        let start = PhaseSpace::new(Vec3::new(0.0, -5.0, 0.0), Vec3::ZERO);
        let end = look_ahead(start, &g, |_| 0.0);
        assert!(end.landed);
        assert_eq!(end.steps, 1);
    }

    #[test]
    fn test_look_ahead_step_cap() {
        let g = GeometryConfig {
            lookahead_max_steps: 10,
            ..GeometryConfig::default()
        };
        let start = PhaseSpace::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1000.0, 0.0));
        let end = look_ahead(start, &g, |_| 0.0);
        assert!(!end.landed);
        assert_eq!(end.steps, 10);
    }

    #[test]
    fn test_trajectory_stays_above_surface() {
        let g = GeometryConfig::default();
        let start = PhaseSpace::new(Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, 6.0, -10.0));
        let points = trajectory(start, &g, |_| 0.0);
        assert_eq!(points[0], start.position);
        assert!(points.len() > 2);
        assert!(points.iter().all(|p| p.y > 0.0));

        let end = look_ahead(start, &g, |_| 0.0);
        assert_eq!(points.len(), end.steps, "one sample per airborne step plus the start");
    }

    #[test]
    fn test_station_radius() {
        let r = station_radius(&GeometryConfig::default());
        // ~14.7 of range minus the 2.25 fort footprint.
        assert!((12.0..13.0).contains(&r), "station radius {r}");
    }
}
