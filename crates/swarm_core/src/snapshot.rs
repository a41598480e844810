use glam::DVec2;
use serde::{Deserialize, Serialize};
use swarm_data::{Agent, Target};

/// Frozen pre-tick state every agent reads during the compute phase.
#[derive(Clone, Debug, Default)]
pub struct InternalAgentSnapshot {
    pub agents: Vec<Agent>,
    pub positions: Vec<DVec2>,
}

impl InternalAgentSnapshot {
    /// Refills the buffers from `agents`, reusing their allocations.
    pub fn capture(&mut self, agents: &[Agent]) {
        self.agents.clear();
        self.agents.extend_from_slice(agents);
        self.positions.clear();
        self.positions.extend(agents.iter().map(|a| a.position));
    }
}

/// Read-only view handed to renderers and analytics between ticks.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub agents: Vec<Agent>,
    pub targets: Vec<Target>,
    pub width: f64,
    pub height: f64,
}
