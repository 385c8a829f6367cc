//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy variant with fixed stats and movement behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Baseline walker.
    Normal,
    /// Quick but fragile. Unlocked in later waves.
    Fast,
    /// Slow and durable.
    Slow,
}

/// Tower variant with fixed range, reload, and damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerArchetype {
    /// Short-range rapid-fire tower.
    Pulse,
    /// Long-range heavy tower with a slow reload.
    Lance,
}

/// How a tower selects its target among enemies in range.
///
/// Both policies are deliberate alternatives, chosen per archetype rather
/// than inferred: `FirstInRange` takes the first roster-order enemy inside
/// the range circle, `Nearest` the minimum-distance one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetingPolicy {
    FirstInRange,
    Nearest,
}

/// How `is_path_cell` decides whether a grid cell lies on the path.
///
/// An explicit configuration choice: the three tests are not equivalent
/// for diagonal or near-cell-boundary segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathCellPolicy {
    /// Axis-aligned segment span containment (assumes horizontal/vertical
    /// segments). The default.
    #[default]
    AxisAlignedSpan,
    /// Perpendicular point-to-segment distance within a fraction of the
    /// cell size. Supports non-axis-aligned segments.
    SegmentDistance,
    /// Exact cell coincidence with rounded path vertices only.
    VertexOnly,
}

/// Whether the enemy route is fixed or periodically scrolled and extended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathMode {
    /// Path fixed at construction.
    Fixed,
    /// Path shifts one cell per interval, dropping old waypoints and
    /// procedurally appending new ones.
    #[default]
    Drifting,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first wave; towers may already be placed.
    #[default]
    Setup,
    Running,
    Paused,
}
