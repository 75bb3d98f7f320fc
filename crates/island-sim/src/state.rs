//! The simulation aggregate and the immutable arena it plays out in.

use glam::Vec3;

use island_boat_ai::profiles::BoatProfile;
use island_core::components::{Boat, Fort, ParticleBurst, Projectile, RoundState, ShotFrame};
use island_core::config::GeometryConfig;
use island_core::constants::BOAT_COUNT;
use island_terrain::{HeightField, WaveField};

use crate::ballistics;

/// Everything that stays fixed for a session.
#[derive(Debug, Clone)]
pub struct Arena {
    pub geometry: GeometryConfig,
    pub sea: WaveField,
    pub heights: HeightField,
    pub profile: BoatProfile,
    /// Distance at which boats stop to shell the fort.
    pub station_radius: f32,
}

impl Arena {
    pub fn new(
        geometry: GeometryConfig,
        sea: WaveField,
        heights: HeightField,
        profile: BoatProfile,
    ) -> Self {
        let station_radius = ballistics::station_radius(&geometry);
        Self {
            geometry,
            sea,
            heights,
            profile,
            station_radius,
        }
    }
}

/// Mutable world state. Boats, their projectile slots and their debris
/// bursts share indices for the whole round.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub fort: Fort,
    pub boats: [Boat; BOAT_COUNT],
    /// Fort-local; carries its launch azimuth.
    pub fort_shot: Projectile,
    pub boat_shots: [Projectile; BOAT_COUNT],
    pub bursts: [ParticleBurst; BOAT_COUNT],
    pub round: RoundState,
}

impl SimulationState {
    pub fn new(boats: [Boat; BOAT_COUNT], bursts: [ParticleBurst; BOAT_COUNT]) -> Self {
        Self {
            fort: Fort::default(),
            boats,
            fort_shot: Projectile::idle(ShotFrame::Fort { launch_azimuth: 0.0 }),
            boat_shots: [Projectile::idle(ShotFrame::World); BOAT_COUNT],
            bursts,
            round: RoundState::default(),
        }
    }

    /// Deck positions of the boats still afloat.
    pub fn decks(&self) -> Vec<Vec3> {
        self.boats
            .iter()
            .filter(|b| b.is_alive())
            .map(|b| b.position)
            .collect()
    }
}
