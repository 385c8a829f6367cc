//! Game state snapshot — the complete visible state handed to the
//! rendering layer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Point, SimTime};

/// Complete read-only game state built after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub bullets: Vec<BulletView>,
    /// Current path polyline, spawn to base. Never stale across a shift.
    pub path: Vec<Point>,
    pub hud: HudView,
    pub placement: PlacementView,
    /// Events produced during this tick.
    pub events: Vec<GameEvent>,
}

/// A visible enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub archetype: EnemyArchetype,
    pub x: f64,
    pub y: f64,
    pub hp: i32,
    pub max_hp: i32,
    pub color: String,
    /// Last waypoint reached.
    pub path_index: usize,
}

/// A visible tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: u32,
    pub archetype: TowerArchetype,
    pub x: f64,
    pub y: f64,
    pub col: i32,
    pub row: i32,
    pub range: f64,
    /// Ticks until the tower may fire again.
    pub reload: u32,
    pub reload_time: u32,
}

/// A bullet trail still fading out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub from: Point,
    pub to: Point,
    pub life: u32,
    pub color: String,
}

/// Scalar HUD values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub money: u32,
    /// Wave counter shown to the player.
    pub wave: u32,
    pub enemies_alive: u32,
    /// Seconds until the next wave (0 while spawning).
    pub countdown_secs: u32,
    pub score: u64,
    pub high_score: u64,
}

/// Pending tower placement, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacementView {
    pub selected: Option<TowerArchetype>,
}
