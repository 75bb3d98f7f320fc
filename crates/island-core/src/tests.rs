#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::components::*;
    use crate::config::{ConfigError, GeometryConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::SimSnapshot;
    use crate::types::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_player_command_tagged_json() {
        let cmd = PlayerCommand::AdjustAzimuth {
            direction: Nudge::Decrease,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"AdjustAzimuth\""), "got {json}");

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"SetTessellation","level":8}"#).unwrap();
        assert_eq!(parsed, PlayerCommand::SetTessellation { level: 8 });

        let fire: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
        assert_eq!(fire, PlayerCommand::Fire);
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::RoundStarted,
            SimEvent::BoatDestroyed { boat: 3, score: 1 },
            SimEvent::FortHit { boat: 0, damage: 12 },
            SimEvent::RoundLost { damage: 4001 },
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, back);
        }
    }

    #[test]
    fn test_snapshot_default_is_idle() {
        let snap = SimSnapshot::default();
        assert_eq!(snap.phase, GamePhase::Idle);
        assert!(snap.boats.is_empty());
        assert!(snap.predicted_target.is_none());
        let json = serde_json::to_string(&snap).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
        assert!(!GamePhase::Paused.is_terminal());
        assert!(!GamePhase::Idle.is_terminal());
    }

    #[test]
    fn test_fort_core_center() {
        // Midway between the pivot region and the muzzle ring.
        assert!((GeometryConfig::default().fort_core_center() - 3.615).abs() < EPS);
        assert!((FORT_HEIGHT - 3.75).abs() < EPS);
        assert!((FORT_SPAR_OFFSET - 1.23).abs() < EPS);
    }

    #[test]
    fn test_geometry_partial_override() {
        let config = GeometryConfig::from_json_str(r#"{ "muzzle_speed": 15.0 }"#).unwrap();
        assert_eq!(config.muzzle_speed, 15.0);
        assert_eq!(config.fort_radius, FORT_RADIUS, "unspecified fields keep defaults");
        assert_eq!(config.lookahead_max_steps, LOOKAHEAD_MAX_STEPS);
    }

    #[test]
    fn test_fort_core_center_follows_overrides() {
        let config = GeometryConfig::from_json_str(r#"{ "fort_height": 4.75 }"#).unwrap();
        assert!((config.fort_core_center() - 4.115).abs() < EPS);
    }

    #[test]
    fn test_geometry_rejects_floor_above_terrain() {
        let result = GeometryConfig::from_json_str(r#"{ "open_sea_floor": -1.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = GeometryConfig::from_json_str(r#"{ "gravity": 9.8 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = GeometryConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_geometry_derived_values() {
        let g = GeometryConfig::default();
        assert!((g.fort_hit_radius() - 1.45).abs() < EPS);
        assert!((g.boat_muzzle_offset() - 1.25).abs() < EPS);
        assert!((g.boat_launch_height() - 3.25).abs() < EPS);
        assert!((g.boat_hit_reach() - 1.2).abs() < EPS);
        assert!((g.boat_hit_band() - 0.7).abs() < EPS);
        assert!((g.island_half_extent() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((normalize_angle(TAU + 0.5) - 0.5).abs() < EPS);
        assert_eq!(normalize_angle(0.0), 0.0);
        let tiny = normalize_angle(-1e-9);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn test_shortest_target() {
        // 0.1 -> 6.0 is shorter going backwards through zero.
        let t = shortest_target(0.1, 6.0);
        assert!((t - (6.0 - TAU)).abs() < EPS);
        // 6.0 -> 0.1 is shorter going forwards.
        let t = shortest_target(6.0, 0.1);
        assert!((t - (0.1 + TAU)).abs() < EPS);
        // Already short.
        assert_eq!(shortest_target(1.0, 2.0), 2.0);
    }

    #[test]
    fn test_fort_to_world() {
        let barrel = Vec3::new(0.0, 2.0, -10.0);
        // Azimuth 0 leaves the barrel pointing down -z.
        let p = fort_to_world(barrel, 0.0);
        assert!((p - barrel).length() < EPS);
        // Quarter turn swings it onto +x.
        let p = fort_to_world(barrel, FRAC_PI_2);
        assert!((p - Vec3::new(10.0, 2.0, 0.0)).length() < 1e-4, "got {p}");
        // Half turn points it at +z.
        let p = fort_to_world(barrel, PI);
        assert!((p - Vec3::new(0.0, 2.0, 10.0)).length() < 1e-4, "got {p}");
    }

    #[test]
    fn test_fort_muzzle() {
        let geometry = GeometryConfig::default();
        let fort = Fort {
            azimuth: 0.0,
            elevation: 0.0,
        };
        let muzzle = fort.muzzle(&geometry);
        assert!((muzzle.position - Vec3::new(0.0, FORT_HEIGHT, -FORT_SPAR_OFFSET)).length() < EPS);
        assert!((muzzle.velocity - Vec3::new(0.0, 0.0, -MUZZLE_SPEED)).length() < EPS);

        let fort = Fort::default();
        let muzzle = fort.muzzle(&geometry);
        assert!((muzzle.velocity.length() - MUZZLE_SPEED).abs() < 1e-4);
        assert!(muzzle.velocity.y > 0.0, "default elevation points upward");
    }

    #[test]
    fn test_boat_velocity_follows_heading() {
        let boat = Boat {
            speed: 2.0,
            helm: Helm {
                heading: FRAC_PI_2,
                ..Default::default()
            },
            ..Default::default()
        };
        let v = boat.velocity();
        assert!((v.x - 2.0).abs() < EPS);
        assert!(v.y.abs() < EPS);
    }

    #[test]
    fn test_boat_muzzle_points_along_cannon_yaw() {
        let geometry = GeometryConfig::default();
        let boat = Boat {
            position: Vec3::new(0.0, 0.0, -20.0),
            cannon_pitch: BOAT_CANNON_PITCH,
            helm: Helm {
                cannon_yaw: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let muzzle = boat.muzzle(&geometry);
        assert!(muzzle.velocity.z > 0.0, "yaw 0 fires toward +z");
        assert!(muzzle.position.z > boat.position.z);
        assert!(((muzzle.position - boat.position).length() - geometry.boat_muzzle_offset()).abs() < EPS);
    }

    #[test]
    fn test_projectile_world_position_uses_launch_azimuth() {
        let mut shot = Projectile::idle(ShotFrame::Fort {
            launch_azimuth: FRAC_PI_2,
        });
        shot.state.position = Vec3::new(0.0, 1.0, -4.0);
        let p = shot.world_position();
        assert!((p - Vec3::new(4.0, 1.0, 0.0)).length() < 1e-4);
        assert_eq!(shot.launch_azimuth(), Some(FRAC_PI_2));

        let boat_shot = Projectile::idle(ShotFrame::World);
        assert_eq!(boat_shot.launch_azimuth(), None);
    }

    #[test]
    fn test_parked_burst_has_no_active_particles() {
        let burst = ParticleBurst::parked(std::iter::repeat(Vec3::Y).take(PARTICLE_COUNT + 5));
        assert_eq!(burst.particles.len(), PARTICLE_COUNT);
        assert_eq!(burst.active().count(), 0);
    }
}
