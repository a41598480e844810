//! Core data structures for the swarm simulation.
//!
//! Everything in here is plain data. Behaviour lives in `swarm_core`, which
//! extends these types through logic traits.

pub mod data;

pub use data::agent::{Agent, AgentId, Target};
pub use data::stats::{DistanceHistogram, TickStats};
pub use data::{SimulationMode, UpdateOrder};
pub use glam::DVec2;
