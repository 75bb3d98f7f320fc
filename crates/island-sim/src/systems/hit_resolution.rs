//! Hit resolution system: fort shot against the fleet, boat shots against
//! the fort, and the win/loss latches.
//!
//! A shot is not consumed by a hit. It keeps flying until it retires, so a
//! boat shot lodged in the fort scores damage on every tick it stays there.

use island_core::events::SimEvent;

use crate::detector::{self, HitTarget};
use crate::state::{Arena, SimulationState};

pub fn run(state: &mut SimulationState, arena: &Arena, events: &mut Vec<SimEvent>) {
    if state.round.is_over() {
        return;
    }
    resolve_fort_shot(state, arena, events);
    if state.round.is_over() {
        return;
    }
    resolve_boat_shots(state, arena, events);
}

fn resolve_fort_shot(state: &mut SimulationState, arena: &Arena, events: &mut Vec<SimEvent>) {
    let shot = state.fort_shot;
    let Some(launch_azimuth) = shot.launch_azimuth() else {
        return;
    };
    if !shot.active {
        return;
    }

    // The fort's own volume is not a target for its own cannon.
    let Some(HitTarget::Boat(index)) =
        detector::check_hit(&shot.state, launch_azimuth, &state.boats, &arena.geometry)
    else {
        return;
    };

    state.boats[index].flags.destroyed = true;
    state.round.score += 1;
    let score = state.round.score;
    log::info!("boat {index} destroyed, score {score}");
    events.push(SimEvent::BoatDestroyed { boat: index, score });

    if score as usize == state.boats.len() {
        state.round.won = true;
        events.push(SimEvent::RoundWon { score });
    }
}

fn resolve_boat_shots(state: &mut SimulationState, arena: &Arena, events: &mut Vec<SimEvent>) {
    let ceiling = arena.geometry.damage_ceiling;
    for (index, shot) in state.boat_shots.iter().enumerate() {
        if !shot.active || !detector::strikes_fort(&shot.state, &arena.geometry) {
            continue;
        }
        if state.round.damage <= ceiling {
            state.round.damage += 1;
            events.push(SimEvent::FortHit {
                boat: index,
                damage: state.round.damage,
            });
        } else {
            state.round.lost = true;
            events.push(SimEvent::RoundLost {
                damage: state.round.damage,
            });
            return;
        }
    }
}
