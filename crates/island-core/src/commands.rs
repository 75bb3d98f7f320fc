//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Nudge;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Round control ---
    /// Start the round. Ignored once started or finished.
    StartRound,
    /// Pause or resume simulated time.
    TogglePause,

    // --- Fort ---
    /// Raise or lower the cannon by one step, clamped to [0, π].
    AdjustElevation { direction: Nudge },
    /// Rotate the fort by one step. Unbounded.
    AdjustAzimuth { direction: Nudge },
    /// Fire the fort cannon. Ignored while a shot is in flight.
    Fire,

    // --- Terrain ---
    /// Set the terrain tessellation (power of two in [4, 32]).
    SetTessellation { level: u32 },
    /// Double the tessellation if below the maximum.
    RefineTessellation,
    /// Halve the tessellation if above the minimum.
    CoarsenTessellation,
}
