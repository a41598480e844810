//! # Swarm Core
//!
//! The flocking motion engine behind the swarm simulation.
//!
//! This crate contains:
//! - Per-agent steering (cohesion, separation, alignment, target seeking)
//! - Velocity and position integration on a toroidal world
//! - The world step driver with compute-then-commit tick semantics
//! - Spatial hashing for neighbour candidate lookup
//! - Statistics and structured logging
//!
//! ## Example
//!
//! ```
//! use swarm_core::config::AppConfig;
//! use swarm_core::world::World;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(7);
//! let mut world = World::new(config).unwrap();
//! world.step();
//! assert_eq!(world.agent_positions().len(), 50);
//! ```

/// Steering rules and motion integration for a single agent
pub mod agent;
/// Configuration management for simulation parameters
pub mod config;
/// Tick metrics collection and logging setup
pub mod metrics;
/// Read-only agent snapshots for the compute phase of a tick
pub mod snapshot;
/// Spatial hashing for neighbour candidate queries
pub mod spatial_hash;
/// Tick systems (flocking compute phase, statistics)
pub mod systems;
/// World state and the step driver
pub mod world;

pub use agent::{AgentLogic, WorldBounds};
pub use config::{AppConfig, FlockingParams};
pub use metrics::{init_logging, Metrics};
pub use swarm_data::{Agent, AgentId, DistanceHistogram, SimulationMode, Target, TickStats};
pub use world::World;
