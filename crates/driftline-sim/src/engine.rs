//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs world, the path provider, and all session
//! state, processes queued player commands at tick boundaries, runs the
//! systems in order, and produces a `GameStateSnapshot` per tick.
//! Completely headless, enabling deterministic testing.

use std::collections::{HashSet, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use driftline_core::commands::PlayerCommand;
use driftline_core::config::GameConfig;
use driftline_core::enums::{GamePhase, TowerArchetype};
use driftline_core::errors::PlacementError;
use driftline_core::events::GameEvent;
use driftline_core::state::GameStateSnapshot;
use driftline_core::types::{Point, SimTime};

use crate::economy::EconomyState;
use crate::path::{default_route, PathProvider};
use crate::placement;
use crate::systems;
use crate::systems::wave_scheduler::WaveState;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Gameplay tunables.
    pub config: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            config: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: GameConfig,
    rng: ChaCha8Rng,
    path: PathProvider,
    /// Grid cells holding a tower. One entry per placed tower.
    occupancy: HashSet<(i32, i32)>,
    wave: WaveState,
    economy: EconomyState,
    pending_placement: Option<TowerArchetype>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    next_unit_id: u32,
}

impl GameEngine {
    /// Create an engine on the default route.
    pub fn new(config: SimConfig) -> Self {
        let route = default_route(&config.config.grid);
        Self::with_route(config, route)
    }

    /// Create an engine on a caller-supplied route.
    pub fn with_route(config: SimConfig, route: Vec<Point>) -> Self {
        let SimConfig { seed, config } = config;
        let path = PathProvider::new(route, &config.shift, &config.grid);
        let wave = WaveState::new(&config.wave);
        let economy = EconomyState::new(&config.economy);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            path,
            occupancy: HashSet::new(),
            wave,
            economy,
            pending_placement: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            next_unit_id: 0,
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            self.path.points(),
            &self.wave,
            &self.economy,
            self.pending_placement,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current route.
    pub fn path(&self) -> &[Point] {
        self.path.points()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the occupancy set.
    #[cfg(test)]
    pub fn occupancy(&self) -> &HashSet<(i32, i32)> {
        &self.occupancy
    }

    /// Get a read-only reference to the economy state.
    #[cfg(test)]
    pub fn economy(&self) -> &EconomyState {
        &self.economy
    }

    /// Get a read-only reference to the wave scheduler state.
    #[cfg(test)]
    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Setup {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::SelectTower { archetype } => {
                self.pending_placement = Some(archetype);
            }
            PlayerCommand::CancelPlacement => {
                self.pending_placement = None;
            }
            PlayerCommand::PlaceTower { x, y } => {
                let Some(archetype) = self.pending_placement else {
                    self.events.push(GameEvent::PlacementRejected {
                        reason: PlacementError::NoSelection,
                    });
                    return;
                };
                match placement::try_place(
                    &mut self.world,
                    &mut self.occupancy,
                    &mut self.economy,
                    self.path.points(),
                    &self.config.grid,
                    archetype,
                    x,
                    y,
                    &mut self.next_unit_id,
                ) {
                    Ok(snap) => {
                        // Selection is consumed by a successful placement;
                        // a rejected one keeps it pending.
                        self.pending_placement = None;
                        self.events.push(GameEvent::TowerPlaced {
                            archetype,
                            col: snap.col,
                            row: snap.row,
                        });
                    }
                    Err(reason) => {
                        self.events.push(GameEvent::PlacementRejected { reason });
                    }
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave scheduling and spawning
        let Some(&spawn_point) = self.path.points().first() else {
            return;
        };
        systems::wave_scheduler::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            &self.config.wave,
            spawn_point,
            &mut self.next_unit_id,
            &mut self.events,
        );
        // 2. Enemy movement
        systems::movement::run(&mut self.world, self.path.points());
        // 3. Map shift (path mutation + dependent remapping, same tick)
        systems::map_shift::run(
            &mut self.world,
            &mut self.path,
            &mut self.occupancy,
            &mut self.wave,
            &mut self.rng,
            &self.config.grid,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 4. Tower targeting and firing
        systems::tower_combat::run(&mut self.world, &mut self.next_unit_id, &mut self.events);
        // 5. Bullet-trail fade
        systems::trail_decay::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Cleanup (kills, leaks, scoring)
        systems::cleanup::run(
            &mut self.world,
            &mut self.wave,
            &mut self.economy,
            &self.config.economy,
            self.path.points().len(),
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }
}
