//! Spawn factories for the hostile fleet and its debris bursts.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use island_core::components::{Boat, BoatFlags, Helm, ParticleBurst};
use island_core::constants::{BOAT_COUNT, BOAT_RING_SLOTS, PARTICLE_COUNT, PARTICLE_SPEED};
use island_core::enums::BoatPhase;

use crate::state::{Arena, SimulationState};

/// Fresh state for a round: the fleet on its ring plus parked bursts.
pub fn setup_round(rng: &mut ChaCha8Rng, arena: &Arena) -> SimulationState {
    let boats = spawn_fleet(rng, arena);
    let bursts = spawn_bursts(rng);
    SimulationState::new(boats, bursts)
}

/// Place every boat on a distinct ring slot, bow toward the fort.
pub fn spawn_fleet(rng: &mut ChaCha8Rng, arena: &Arena) -> [Boat; BOAT_COUNT] {
    let mut taken = [false; BOAT_RING_SLOTS as usize];
    std::array::from_fn(|_| {
        let slot = loop {
            let candidate = rng.gen_range(0..BOAT_RING_SLOTS) as usize;
            if !taken[candidate] {
                taken[candidate] = true;
                break candidate;
            }
        };
        let angle = slot as f32 / (BOAT_RING_SLOTS / 2) as f32 * PI;
        let multiplier = 0.5 + rng.gen_range(0..5) as f32 / 10.0;
        spawn_boat(arena, angle, multiplier)
    })
}

/// A single boat at `angle` on the ring, cruising at `multiplier` of top speed.
pub fn spawn_boat(arena: &Arena, angle: f32, multiplier: f32) -> Boat {
    let radius = arena.geometry.boat_ring_radius;
    let (sin, cos) = angle.sin_cos();
    let (x, z) = (-radius * sin, -radius * cos);
    Boat {
        position: Vec3::new(x, arena.sea.height(x, z, 0.0), z),
        speed: arena.profile.max_speed * multiplier,
        helm: Helm {
            target_speed: arena.profile.max_speed,
            nominal_speed: arena.profile.nominal_speed,
            heading: angle,
            heading_target: angle,
            original_heading: angle,
            cannon_yaw: angle,
            cannon_yaw_target: angle,
        },
        cannon_pitch: arena.geometry.boat_cannon_pitch,
        phase: BoatPhase::Approaching,
        flags: BoatFlags::default(),
    }
}

/// One parked burst per boat with pre-drawn spherical launch velocities.
pub fn spawn_bursts(rng: &mut ChaCha8Rng) -> [ParticleBurst; BOAT_COUNT] {
    std::array::from_fn(|_| {
        let velocities: Vec<Vec3> = (0..PARTICLE_COUNT)
            .map(|_| {
                let elevation = rng.gen_range(0..100) as f32 / 100.0 * PI;
                let bearing = rng.gen_range(0..100) as f32 / 100.0 * TAU;
                let speed = PARTICLE_SPEED * (10 + rng.gen_range(0..90)) as f32 / 100.0;
                let (sin_el, cos_el) = elevation.sin_cos();
                let (sin_br, cos_br) = bearing.sin_cos();
                Vec3::new(cos_el * sin_br, sin_el, cos_el * cos_br) * speed
            })
            .collect();
        ParticleBurst::parked(velocities)
    })
}
