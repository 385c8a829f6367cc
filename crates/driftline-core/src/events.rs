//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyArchetype, TowerArchetype};
use crate::errors::PlacementError;

/// Events produced during one tick, delivered with the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave began releasing enemies.
    WaveStarted { wave: u32, size: u32 },
    /// One enemy entered the path.
    EnemySpawned { archetype: EnemyArchetype },
    /// Enemy destroyed by tower fire.
    EnemyKilled { reward: u32, score: u64 },
    /// Enemy reached the final waypoint alive.
    EnemyLeaked { penalty: u64 },
    /// Enemy scrolled off the map during a shift. No scoring.
    EnemyScrolledOff,
    /// A tower fired a shot.
    ShotFired { archetype: TowerArchetype },
    /// Tower placed successfully.
    TowerPlaced {
        archetype: TowerArchetype,
        col: i32,
        row: i32,
    },
    /// Tower scrolled off the grid during a shift.
    TowerEvicted { col: i32, row: i32 },
    /// Placement request rejected.
    PlacementRejected { reason: PlacementError },
    /// The map shifted one cell.
    MapShifted,
}
