//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Overall round phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command.
    #[default]
    Idle,
    Running,
    Paused,
    /// Every boat destroyed. Terminal.
    Won,
    /// Fort damage ceiling exceeded. Terminal.
    Lost,
}

impl GamePhase {
    /// Whether the round has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Behaviour phase of a boat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoatPhase {
    /// Closing in from the starting ring.
    #[default]
    Approaching,
    /// Holding station inside the firing radius.
    Stationed,
}

/// Direction of an incremental aim adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nudge {
    Increase,
    Decrease,
}

impl Nudge {
    pub fn sign(self) -> f32 {
        match self {
            Nudge::Increase => 1.0,
            Nudge::Decrease => -1.0,
        }
    }
}

/// Who fired a cannonball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shooter {
    Fort,
    Boat(usize),
}
