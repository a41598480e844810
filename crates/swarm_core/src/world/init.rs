use crate::agent::{AgentLogic, WorldBounds};
use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::snapshot::InternalAgentSnapshot;
use crate::spatial_hash::SpatialHash;
use crate::world::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use swarm_data::{Agent, AgentId, Target};

impl World {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let mut rng = if let Some(seed) = config.world.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let bounds = WorldBounds::new(config.world.width, config.world.height);

        let agents = spawn_agents(config.world.agent_count, &bounds, &config, &mut rng);

        let mut targets = Vec::new();
        if config.mode.seeks_targets() {
            for _ in 0..config.targets.initial_targets {
                targets.push(Target {
                    position: bounds.random_point(&mut rng),
                });
            }
        }

        tracing::info!(
            agents = agents.len(),
            targets = targets.len(),
            mode = ?config.mode,
            fingerprint = %config.fingerprint(),
            "World created"
        );

        Ok(Self {
            tick: 0,
            spatial_hash: SpatialHash::new(
                config.flocking.perception_radius,
                bounds.width,
                bounds.height,
            ),
            snapshot: InternalAgentSnapshot::default(),
            accelerations: Vec::with_capacity(agents.len()),
            metrics: Metrics::new(),
            bounds,
            agents,
            targets,
            rng,
            config,
        })
    }

    /// Replaces the population with `agent_count` fresh agents. Targets and
    /// the tick counter are kept.
    pub fn reinitialize(&mut self, agent_count: usize) -> anyhow::Result<()> {
        let mut config = self.config.clone();
        config.world.agent_count = agent_count;
        config.validate()?;
        self.agents = spawn_agents(agent_count, &self.bounds, &config, &mut self.rng);
        self.config = config;
        tracing::info!(agents = agent_count, "Population reinitialized");
        Ok(())
    }

    /// Adds a pre-built agent. Intended for tests and scripted setups;
    /// the id is reassigned to the next free index.
    pub fn spawn_agent(&mut self, mut agent: Agent) -> AgentId {
        let id = AgentId(self.agents.len() as u32);
        agent.id = id;
        agent.position = self.bounds.wrap(agent.position);
        self.agents.push(agent);
        id
    }
}

fn spawn_agents(
    count: usize,
    bounds: &WorldBounds,
    config: &AppConfig,
    rng: &mut ChaCha8Rng,
) -> Vec<Agent> {
    (0..count)
        .map(|i| Agent::new_random_with_rng(AgentId(i as u32), bounds, config.flocking.max_speed, rng))
        .collect()
}
