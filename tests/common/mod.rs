pub mod macros;

use glam::DVec2;
use swarm_lib::model::config::AppConfig;
use swarm_lib::model::state::{Agent, AgentId, SimulationMode, UpdateOrder};
use swarm_lib::model::world::World;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    agents: Vec<Agent>,
    targets: Vec<DVec2>,
}

#[allow(dead_code)]
impl WorldBuilder {
    /// Empty target-seeking world with no random agents or targets.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.agent_count = 0;
        config.world.seed = Some(0);
        config.targets.initial_targets = 0;
        Self {
            config,
            agents: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_random_agents(mut self, count: usize) -> Self {
        self.config.world.agent_count = count;
        self
    }

    pub fn flocking_only(mut self) -> Self {
        self.config.mode = SimulationMode::Flocking;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.config.world.update_order = UpdateOrder::Sequential;
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn with_target(mut self, x: f64, y: f64) -> Self {
        self.targets.push(DVec2::new(x, y));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for agent in self.agents {
            world.spawn_agent(agent);
        }
        for target in self.targets {
            world
                .add_target(target)
                .expect("Failed to place target in test builder");
        }
        world
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    position: DVec2,
    velocity: DVec2,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            position: DVec2::new(400.0, 300.0),
            velocity: DVec2::ZERO,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = DVec2::new(x, y);
        self
    }

    pub fn moving(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = DVec2::new(vx, vy);
        self
    }

    /// Id 0; [`World::spawn_agent`] assigns the real one.
    pub fn build(self) -> Agent {
        Agent::new(AgentId(0), self.position, self.velocity)
    }
}
