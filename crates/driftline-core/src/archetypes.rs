//! Archetype stat profiles.
//!
//! Consolidates the fixed per-variant parameters for enemies and towers.
//! Behavior is resolved by archetype tag at spawn/update time, so adding a
//! variant means adding a profile here, not touching the tick code.

use crate::enums::{EnemyArchetype, TargetingPolicy, TowerArchetype};

/// Fixed stats for an enemy archetype.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    /// Movement speed in pixels per tick.
    pub speed: f64,
    /// Starting hit points.
    pub hp: i32,
    /// Render color for the view layer.
    pub color: &'static str,
}

/// Fixed stats for a tower archetype.
#[derive(Debug, Clone, Copy)]
pub struct TowerProfile {
    /// Targeting radius in pixels (Euclidean).
    pub range: f64,
    /// Ticks between shots.
    pub reload_time: u32,
    /// Hit points removed per shot.
    pub damage: i32,
    /// Placement cost.
    pub cost: u32,
    /// Target selection policy.
    pub targeting: TargetingPolicy,
    /// Bullet-trail lifetime in ticks.
    pub trail_life: u32,
    /// Bullet-trail render color.
    pub trail_color: &'static str,
}

/// Get the stat profile for an enemy archetype.
pub fn enemy_profile(archetype: EnemyArchetype) -> EnemyProfile {
    match archetype {
        EnemyArchetype::Normal => EnemyProfile {
            speed: 1.5,
            hp: 50,
            color: "red",
        },
        EnemyArchetype::Fast => EnemyProfile {
            speed: 3.5,
            hp: 30,
            color: "purple",
        },
        EnemyArchetype::Slow => EnemyProfile {
            speed: 1.0,
            hp: 75,
            color: "blue",
        },
    }
}

/// Get the stat profile for a tower archetype.
pub fn tower_profile(archetype: TowerArchetype) -> TowerProfile {
    match archetype {
        TowerArchetype::Pulse => TowerProfile {
            range: 120.0,
            reload_time: 30,
            damage: 10,
            cost: 100,
            targeting: TargetingPolicy::FirstInRange,
            trail_life: 15,
            trail_color: "yellow",
        },
        TowerArchetype::Lance => TowerProfile {
            range: 500.0,
            reload_time: 120,
            damage: 25,
            cost: 250,
            targeting: TargetingPolicy::Nearest,
            trail_life: 20,
            trail_color: "cyan",
        },
    }
}
