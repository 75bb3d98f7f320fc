//! Boat AI system: runs the behaviour FSM for every boat afloat.

use island_boat_ai::fsm::{evaluate, BoatContext};
use island_core::enums::BoatPhase;
use island_core::events::SimEvent;

use crate::state::{Arena, SimulationState};

/// Evaluate the FSM for each living boat. `predicted` is the boat the
/// fort's live aim would hit, if any.
pub fn run(
    state: &mut SimulationState,
    arena: &Arena,
    predicted: Option<usize>,
    events: &mut Vec<SimEvent>,
) {
    for (index, boat) in state.boats.iter_mut().enumerate() {
        if !boat.is_alive() {
            continue;
        }

        let ctx = BoatContext::new(boat, arena.station_radius, predicted == Some(index));
        let update = evaluate(&ctx, &arena.profile);
        update.apply(boat);

        if update.phase_changed && update.new_phase == BoatPhase::Stationed {
            log::debug!("boat {index} on station at {:.2}", boat.distance());
            events.push(SimEvent::BoatStationed { boat: index });
        }
        if update.started_evading {
            log::debug!("boat {index} evading");
            events.push(SimEvent::BoatEvading { boat: index });
        }
    }
}
