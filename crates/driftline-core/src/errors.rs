//! Player-action error taxonomy.
//!
//! Every failure here is a rejected placement: recoverable by construction,
//! with no state mutated. There are no fatal error states in the core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a tower placement request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlacementError {
    #[error("not enough money: need {cost}, have {money}")]
    InsufficientFunds { cost: u32, money: u32 },

    #[error("cell ({col}, {row}) is outside the grid")]
    OutOfBounds { col: i32, row: i32 },

    #[error("cell ({col}, {row}) already holds a tower")]
    CellOccupied { col: i32, row: i32 },

    #[error("cell ({col}, {row}) lies on the path")]
    OnPath { col: i32, row: i32 },

    #[error("no tower type selected")]
    NoSelection,
}
