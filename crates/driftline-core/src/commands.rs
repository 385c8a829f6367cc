//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::TowerArchetype;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Placement ---
    /// Begin placement of a tower type. Replaces any pending selection.
    SelectTower { archetype: TowerArchetype },
    /// Attempt to place the selected tower at a pixel coordinate.
    PlaceTower { x: f64, y: f64 },
    /// Drop the pending placement selection.
    CancelPlacement,

    // --- Session control ---
    /// Start the wave machine (from setup).
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
