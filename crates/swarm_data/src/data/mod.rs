//! Shared data types for agents, targets and per-tick statistics.

pub mod agent;
pub mod stats;

use serde::{Deserialize, Serialize};

/// Which of the two simulation variants is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMode {
    /// Pure flocking: cohesion, separation and alignment only.
    Flocking,
    /// Flocking plus steering towards the nearest placed target.
    #[default]
    TargetSeeking,
}

impl SimulationMode {
    #[must_use]
    pub fn seeks_targets(self) -> bool {
        matches!(self, Self::TargetSeeking)
    }
}

/// How a tick applies agent updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// Every agent reads the pre-tick state; all writes are committed afterwards.
    #[default]
    Snapshot,
    /// Agents are updated in place in index order, so later agents observe
    /// the already-moved earlier ones.
    Sequential,
}
