//! Debris system: seeds a burst when its boat goes down, then flies and
//! parks the particles.

use island_core::components::is_parked;
use island_core::constants::PARTICLE_PARK_HEIGHT;

use crate::ballistics;
use crate::state::{Arena, SimulationState};

pub fn run(state: &mut SimulationState, arena: &Arena, dt: f32) {
    let gravity = arena.geometry.gravity;
    let decks = state.decks();

    for (boat, burst) in state.boats.iter_mut().zip(state.bursts.iter_mut()) {
        if boat.flags.destroyed {
            // Seed exactly once, at the wreck.
            if !boat.flags.particles_spawned {
                for particle in &mut burst.particles {
                    particle.position = boat.position;
                }
                boat.flags.particles_spawned = true;
            }
            for particle in burst.particles.iter_mut().filter(|p| !is_parked(p)) {
                ballistics::step(particle, gravity, dt);
            }
        }

        for particle in burst.particles.iter_mut().filter(|p| !is_parked(p)) {
            if arena.heights.is_below_surface(particle.position, &decks) {
                particle.position.y = PARTICLE_PARK_HEIGHT;
            }
        }
    }
}
