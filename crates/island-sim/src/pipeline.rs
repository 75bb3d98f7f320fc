//! The ordered per-tick pipeline.

use island_core::events::SimEvent;

use crate::clock::FrameTime;
use crate::state::{Arena, SimulationState};
use crate::systems;

/// Advance the state by one frame. Stops as soon as the round latches.
pub fn run(
    state: &mut SimulationState,
    arena: &Arena,
    frame: FrameTime,
    events: &mut Vec<SimEvent>,
) {
    if state.round.is_over() {
        return;
    }
    let t = frame.t as f32;
    let dt = frame.dt as f32;

    // 1. Boat AI against the fort's aim as it stood at the end of last tick
    let aim = systems::aim::solve(state, arena);
    systems::boat_ai::run(state, arena, aim.target, events);
    // 2. Boat motion, deck height, re-arming
    systems::movement::run(state, arena, t, dt);
    systems::projectiles::arm_boat_shots(state, &arena.geometry);
    // 3. Ballistic integration
    systems::projectiles::integrate(state, &arena.geometry, dt);
    // 4. Hits and latches
    systems::hit_resolution::run(state, arena, events);
    if state.round.is_over() {
        return;
    }
    // 5. Retirement
    systems::projectiles::retire(state, arena);
    // 6. Debris
    systems::particles::run(state, arena, dt);
}
