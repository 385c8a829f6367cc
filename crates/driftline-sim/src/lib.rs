//! Simulation engine for DRIFTLINE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the rendering layer.

pub mod economy;
pub mod engine;
pub mod path;
pub mod placement;
pub mod systems;
pub mod world_setup;

pub use driftline_core as core;
pub use engine::{GameEngine, SimConfig};

#[cfg(test)]
mod tests;
