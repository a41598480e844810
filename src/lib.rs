//! Two-dimensional flocking simulation.
//!
//! `model` re-exports the engine from `swarm_core`; `app` is the headless
//! driver that feeds it input, steps it and reports on it.

pub mod app;
pub mod model;

pub use app::{App, InputEvent, RunSummary, ShutdownManager};
pub use swarm_core::config::AppConfig;
pub use swarm_core::world::World;
