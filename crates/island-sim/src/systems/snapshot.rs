//! Snapshot system: reads the state and builds a complete SimSnapshot.
//!
//! This system is read-only; it never modifies the state.

use glam::Vec3;

use island_core::components::Boat;
use island_core::enums::{GamePhase, Shooter};
use island_core::events::SimEvent;
use island_core::state::*;

use crate::state::{Arena, SimulationState};
use crate::systems::aim;

/// Engine-level values the state does not carry.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotMeta {
    pub phase: GamePhase,
    pub time: f64,
    pub frame_rate: f64,
    pub tessellation: u32,
}

/// Build a complete SimSnapshot from the current state.
pub fn build_snapshot(
    state: &SimulationState,
    arena: &Arena,
    meta: SnapshotMeta,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        phase: meta.phase,
        time: meta.time,
        frame_rate: meta.frame_rate,
        tessellation: meta.tessellation,
        fort: FortView {
            azimuth: state.fort.azimuth,
            elevation: state.fort.elevation,
            shot_in_flight: state.fort_shot.active,
        },
        boats: state
            .boats
            .iter()
            .enumerate()
            .map(|(index, boat)| build_boat(index, boat))
            .collect(),
        projectiles: build_projectiles(state),
        particles: build_particles(state),
        round: RoundView {
            damage: state.round.damage,
            damage_ceiling: arena.geometry.damage_ceiling,
            score: state.round.score,
            boats_total: state.boats.len() as u32,
            won: state.round.won,
            lost: state.round.lost,
        },
        aim_preview: aim::preview(state, arena),
        predicted_target: aim::solve(state, arena).target,
        events,
    }
}

fn build_boat(index: usize, boat: &Boat) -> BoatView {
    BoatView {
        index,
        position: boat.position,
        heading: boat.helm.heading,
        speed: boat.speed,
        cannon_yaw: boat.helm.cannon_yaw,
        cannon_pitch: boat.cannon_pitch,
        phase: boat.phase,
        destroyed: boat.flags.destroyed,
        threatened: boat.flags.threatened,
        evading: boat.flags.evading,
    }
}

/// Active shots in world space, the fort's first.
fn build_projectiles(state: &SimulationState) -> Vec<ProjectileView> {
    let fort = state.fort_shot.active.then(|| ProjectileView {
        shooter: Shooter::Fort,
        position: state.fort_shot.world_position(),
    });
    let boats = state
        .boat_shots
        .iter()
        .enumerate()
        .filter(|(_, shot)| shot.active)
        .map(|(index, shot)| ProjectileView {
            shooter: Shooter::Boat(index),
            position: shot.world_position(),
        });
    fort.into_iter().chain(boats).collect()
}

fn build_particles(state: &SimulationState) -> Vec<Vec3> {
    state
        .bursts
        .iter()
        .flat_map(|burst| burst.active().map(|p| p.position))
        .collect()
}
