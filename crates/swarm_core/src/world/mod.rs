//! World state: the fixed agent population, the growing target list and the
//! buffers reused across ticks.

mod init;
mod update;

use crate::agent::WorldBounds;
use crate::config::{AppConfig, FlockingParams};
use crate::metrics::Metrics;
use crate::snapshot::{InternalAgentSnapshot, WorldSnapshot};
use crate::spatial_hash::SpatialHash;
use crate::systems::stats;
use glam::DVec2;
use rand_chacha::ChaCha8Rng;
use swarm_data::{Agent, DistanceHistogram, Target, TickStats};

/// Owns every agent and target. Mutated only by [`World::step`] and the
/// between-tick control methods; readers look at it between ticks.
pub struct World {
    pub(crate) tick: u64,
    pub(crate) config: AppConfig,
    pub(crate) bounds: WorldBounds,
    pub(crate) agents: Vec<Agent>,
    pub(crate) targets: Vec<Target>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) spatial_hash: SpatialHash,
    pub(crate) snapshot: InternalAgentSnapshot,
    pub(crate) accelerations: Vec<DVec2>,
    pub(crate) metrics: Metrics,
}

impl World {
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn agent_positions(&self) -> Vec<DVec2> {
        self.agents.iter().map(|a| a.position).collect()
    }

    pub fn target_positions(&self) -> Vec<DVec2> {
        self.targets.iter().map(|t| t.position).collect()
    }

    /// Every agent-to-target distance, grouped by target.
    pub fn target_distances(&self) -> Vec<f64> {
        stats::target_distances(&self.agents, &self.targets)
    }

    pub fn distance_histogram(&self, bins: usize) -> DistanceHistogram {
        use stats::HistogramLogic;
        DistanceHistogram::from_distances(&self.target_distances(), bins)
    }

    pub fn stats(&self) -> TickStats {
        stats::compute_tick_stats(self.tick, &self.agents, &self.targets)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            agents: self.agents.clone(),
            targets: self.targets.clone(),
            width: self.bounds.width,
            height: self.bounds.height,
        }
    }

    /// Places a target, wrapping it into the world. Non-finite points are rejected.
    pub fn add_target(&mut self, point: DVec2) -> anyhow::Result<()> {
        anyhow::ensure!(point.is_finite(), "Target position must be finite");
        let position = self.bounds.wrap(point);
        self.targets.push(Target { position });
        tracing::debug!(x = position.x, y = position.y, targets = self.targets.len(), "Target placed");
        Ok(())
    }

    /// Places a target at a uniformly random point.
    pub fn add_random_target(&mut self) -> DVec2 {
        let position = self.bounds.random_point(&mut self.rng);
        self.targets.push(Target { position });
        tracing::debug!(x = position.x, y = position.y, targets = self.targets.len(), "Random target placed");
        position
    }

    /// Applies control-panel changes. Takes effect on the next tick.
    pub fn apply_params(&mut self, params: FlockingParams) -> anyhow::Result<()> {
        params.validate()?;
        if params.perception_radius != self.config.flocking.perception_radius {
            self.spatial_hash
                .resize(params.perception_radius, self.bounds.width, self.bounds.height);
        }
        self.config.flocking.max_speed = params.max_speed;
        self.config.flocking.perception_radius = params.perception_radius;
        tracing::info!(
            max_speed = params.max_speed,
            perception_radius = params.perception_radius,
            "Flocking parameters updated"
        );
        Ok(())
    }
}
