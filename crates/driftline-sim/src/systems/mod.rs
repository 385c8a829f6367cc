//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for the
//! snapshot). They do not own entity state — all of it lives in components;
//! scheduler, path, economy, and occupancy state are passed in explicitly.

pub mod cleanup;
pub mod map_shift;
pub mod movement;
pub mod snapshot;
pub mod tower_combat;
pub mod trail_decay;
pub mod wave_scheduler;
