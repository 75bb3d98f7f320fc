//! Cannonball lifecycle: arming, flight and retirement.

use island_core::components::{Projectile, ShotFrame};
use island_core::config::GeometryConfig;

use crate::ballistics;
use crate::state::{Arena, SimulationState};

/// Arm the fort cannon at the current aim. Returns false, changing nothing,
/// while the previous shot is still in flight.
pub fn fire_fort(state: &mut SimulationState, geometry: &GeometryConfig) -> bool {
    if state.fort_shot.active {
        return false;
    }
    state.fort_shot = Projectile {
        state: state.fort.muzzle(geometry),
        active: true,
        frame: ShotFrame::Fort {
            launch_azimuth: state.fort.azimuth,
        },
    };
    true
}

/// Give every living boat with a free slot a fresh shot from its muzzle.
pub fn arm_boat_shots(state: &mut SimulationState, geometry: &GeometryConfig) {
    for (boat, shot) in state.boats.iter().zip(state.boat_shots.iter_mut()) {
        if boat.is_alive() && !shot.active {
            *shot = Projectile {
                state: boat.muzzle(geometry),
                active: true,
                frame: ShotFrame::World,
            };
        }
    }
}

/// Step every active shot by `dt`.
pub fn integrate(state: &mut SimulationState, geometry: &GeometryConfig, dt: f32) {
    for shot in shots_mut(state).filter(|s| s.active) {
        ballistics::step(&mut shot.state, geometry.gravity, dt);
    }
}

/// Retire shots that have dropped below the surface under them. The fort
/// shot is placed over the island through the fort's current azimuth.
pub fn retire(state: &mut SimulationState, arena: &Arena) {
    let decks = state.decks();
    let azimuth = state.fort.azimuth;
    for shot in shots_mut(state).filter(|s| s.active) {
        if arena.heights.is_below_surface(shot.surface_position(azimuth), &decks) {
            shot.active = false;
        }
    }
}

fn shots_mut(state: &mut SimulationState) -> impl Iterator<Item = &mut Projectile> {
    std::iter::once(&mut state.fort_shot).chain(state.boat_shots.iter_mut())
}
