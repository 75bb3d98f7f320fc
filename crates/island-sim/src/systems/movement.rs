//! Boat motion: steering toward the helm targets, then floating on the sea.

use island_boat_ai::steering;

use crate::state::{Arena, SimulationState};

/// Advance every living boat by `dt` and set its deck to the sea surface
/// at simulated time `t`.
pub fn run(state: &mut SimulationState, arena: &Arena, t: f32, dt: f32) {
    for boat in state.boats.iter_mut().filter(|b| b.is_alive()) {
        steering::advance(boat, &arena.profile, dt);
        boat.position.y = arena.sea.height(boat.position.x, boat.position.z, t);
    }
}
