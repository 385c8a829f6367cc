//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyArchetype, TargetingPolicy, TowerArchetype};
use crate::types::Point;

/// Stable identifier assigned at spawn, used to order snapshot views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Pixel position. Attached to enemies and towers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Progress along the path polyline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathFollower {
    /// Index of the last waypoint reached. Always < path length.
    pub path_index: usize,
}

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
    pub max_hp: i32,
}

/// Enemy identity and movement stats, resolved from the archetype profile
/// at spawn time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyInfo {
    pub archetype: EnemyArchetype,
    /// Pixels per tick.
    pub speed: f64,
}

/// Tower identity, grid cell, and firing state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TowerInfo {
    pub archetype: TowerArchetype,
    pub col: i32,
    pub row: i32,
    /// Targeting radius in pixels.
    pub range: f64,
    /// Hit points removed per shot.
    pub damage: i32,
    /// Ticks between shots.
    pub reload_time: u32,
    /// Ticks until the tower may fire again. 0 = ready.
    pub reload: u32,
    pub targeting: TargetingPolicy,
}

/// Ephemeral visual record of a shot. Not consumed by game logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletTrail {
    pub from: Point,
    pub to: Point,
    /// Remaining ticks before the trail is removed.
    pub life: u32,
    pub color: String,
}

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a tower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower;

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}
