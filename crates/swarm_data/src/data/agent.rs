use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an agent within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

/// A single flocking agent.
///
/// Two agents are the same agent only if their `id`s match; equal positions
/// say nothing about identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub position: DVec2,
    pub velocity: DVec2,
}

impl Agent {
    #[must_use]
    pub fn new(id: AgentId, position: DVec2, velocity: DVec2) -> Self {
        Self {
            id,
            position,
            velocity,
        }
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

/// A point of interest agents steer towards. Never moves once placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub position: DVec2,
}

impl Target {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
        }
    }
}

impl From<DVec2> for Target {
    fn from(position: DVec2) -> Self {
        Self { position }
    }
}
