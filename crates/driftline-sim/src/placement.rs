//! Tower placement validation.
//!
//! A placement succeeds iff funds, bounds, occupancy, and the path-cell
//! test all pass; on failure nothing is mutated. Success atomically spends
//! the cost, claims the occupancy key, and spawns the tower entity.

use std::collections::HashSet;

use hecs::World;

use driftline_core::archetypes::tower_profile;
use driftline_core::config::GridConfig;
use driftline_core::enums::TowerArchetype;
use driftline_core::errors::PlacementError;
use driftline_core::grid::{is_path_cell, snap_to_grid, GridSnap};
use driftline_core::types::Point;

use crate::economy::EconomyState;
use crate::world_setup;

/// Validate and perform a placement request at pixel `(x, y)`.
#[allow(clippy::too_many_arguments)]
pub fn try_place(
    world: &mut World,
    occupancy: &mut HashSet<(i32, i32)>,
    economy: &mut EconomyState,
    path: &[Point],
    grid: &GridConfig,
    archetype: TowerArchetype,
    x: f64,
    y: f64,
    id_counter: &mut u32,
) -> Result<GridSnap, PlacementError> {
    let profile = tower_profile(archetype);

    if economy.money < profile.cost {
        return Err(PlacementError::InsufficientFunds {
            cost: profile.cost,
            money: economy.money,
        });
    }

    let snap = snap_to_grid(x, y, grid.cell_size);

    if snap.col < 0
        || snap.row < 0
        || snap.col >= grid.cols as i32
        || snap.row >= grid.rows as i32
    {
        return Err(PlacementError::OutOfBounds {
            col: snap.col,
            row: snap.row,
        });
    }
    if occupancy.contains(&(snap.col, snap.row)) {
        return Err(PlacementError::CellOccupied {
            col: snap.col,
            row: snap.row,
        });
    }
    if is_path_cell(snap.col, snap.row, path, grid.cell_size, grid.path_cell_policy) {
        return Err(PlacementError::OnPath {
            col: snap.col,
            row: snap.row,
        });
    }

    // All checks passed; mutate funds, occupancy, and roster together.
    let spent = economy.try_spend(profile.cost);
    debug_assert!(spent);
    occupancy.insert((snap.col, snap.row));
    world_setup::spawn_tower(world, archetype, snap, id_counter);

    Ok(snap)
}
