//! Core types and definitions for the DRIFTLINE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, config, events, snapshot views, and grid math.
//! It has no dependency on any runtime framework or rendering layer.

pub mod archetypes;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod grid;
pub mod state;
pub mod types;
