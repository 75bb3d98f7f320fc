//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    RoundStarted,
    Paused,
    Resumed,
    /// The fort cannon fired.
    FortShotFired { azimuth: f32, elevation: f32 },
    /// A fort shot struck a boat.
    BoatDestroyed { boat: usize, score: u32 },
    /// A boat shot struck the fort.
    FortHit { boat: usize, damage: u32 },
    /// A boat reached its station and began firing.
    BoatStationed { boat: usize },
    /// A stationed boat reversed course to dodge the fort's aim.
    BoatEvading { boat: usize },
    RoundWon { score: u32 },
    RoundLost { damage: u32 },
}
