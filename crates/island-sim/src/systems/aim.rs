//! Look-ahead of the fort's live aim.
//!
//! Drives both the boats' threat prediction and the aim preview handed to
//! the renderer.

use glam::Vec3;

use island_core::types::fort_to_world;

use crate::ballistics::{self, LookAhead};
use crate::detector;
use crate::state::{Arena, SimulationState};

/// Where the current aim lands and whom it would hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimSolution {
    pub landing: LookAhead,
    pub target: Option<usize>,
}

/// Fly a hypothetical shot from the current fort pose down to the surface.
pub fn solve(state: &SimulationState, arena: &Arena) -> AimSolution {
    let geometry = &arena.geometry;
    let azimuth = state.fort.azimuth;
    let decks = state.decks();
    let landing = ballistics::look_ahead(state.fort.muzzle(geometry), geometry, |p| {
        arena.heights.height_at(fort_to_world(p, azimuth), &decks)
    });
    let target = detector::predict_hit(&landing.terminal, azimuth, &state.boats, geometry);
    AimSolution { landing, target }
}

/// World-space polyline of the current aim.
pub fn preview(state: &SimulationState, arena: &Arena) -> Vec<Vec3> {
    let geometry = &arena.geometry;
    let azimuth = state.fort.azimuth;
    let decks = state.decks();
    ballistics::trajectory(state.fort.muzzle(geometry), geometry, |p| {
        arena.heights.height_at(fort_to_world(p, azimuth), &decks)
    })
    .into_iter()
    .map(|p| fort_to_world(p, azimuth))
    .collect()
}
