use crate::agent::{AgentLogic, WorldBounds};
use crate::config::AppConfig;
use crate::snapshot::InternalAgentSnapshot;
use crate::spatial_hash::SpatialHash;
use glam::DVec2;
use rayon::prelude::*;
use swarm_data::{Agent, Target};

pub struct FlockingContext<'a> {
    pub config: &'a AppConfig,
    pub snapshot: &'a InternalAgentSnapshot,
    pub spatial_hash: &'a SpatialHash,
    /// Empty when the running mode does not seek targets.
    pub targets: &'a [Target],
}

/// Compute phase: the acceleration of every agent, read from the snapshot only.
///
/// `out[i]` belongs to `ctx.snapshot.agents[i]`.
pub fn compute_accelerations_parallel(ctx: &FlockingContext, out: &mut Vec<DVec2>) {
    let agents = &ctx.snapshot.agents;
    let radius = ctx.config.flocking.perception_radius;
    agents
        .par_iter()
        .map_init(Vec::new, |candidates, agent| {
            ctx.spatial_hash
                .query_into(agent.position, radius, candidates);
            agent.steering(
                candidates.iter().map(|&idx| &agents[idx]),
                ctx.targets,
                ctx.config,
            )
        })
        .collect_into_vec(out);
}

/// Commit phase: applies the accelerations computed for this tick.
pub fn apply_accelerations_sequential(
    agents: &mut [Agent],
    accelerations: &[DVec2],
    max_speed: f64,
    bounds: &WorldBounds,
) {
    debug_assert_eq!(agents.len(), accelerations.len());
    for (agent, &acceleration) in agents.iter_mut().zip(accelerations) {
        agent.integrate(acceleration, max_speed, bounds);
    }
}

/// In-place update in index order: agent `i` sees agents `0..i` already moved.
pub fn update_in_place_sequential(
    agents: &mut [Agent],
    targets: &[Target],
    config: &AppConfig,
    bounds: &WorldBounds,
) {
    for i in 0..agents.len() {
        let acceleration = agents[i].steering(agents.iter(), targets, config);
        agents[i].integrate(acceleration, config.flocking.max_speed, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_data::AgentId;

    fn pair() -> Vec<Agent> {
        vec![
            Agent::new(AgentId(0), DVec2::new(100.0, 100.0), DVec2::new(1.0, 0.0)),
            Agent::new(AgentId(1), DVec2::new(110.0, 100.0), DVec2::new(-1.0, 0.0)),
        ]
    }

    #[test]
    fn test_parallel_matches_brute_force() {
        let config = AppConfig::default();
        let agents = pair();
        let mut snapshot = InternalAgentSnapshot::default();
        snapshot.capture(&agents);
        let mut hash = SpatialHash::new(50.0, 800.0, 600.0);
        hash.build(&snapshot.positions);

        let ctx = FlockingContext {
            config: &config,
            snapshot: &snapshot,
            spatial_hash: &hash,
            targets: &[],
        };
        let mut out = Vec::new();
        compute_accelerations_parallel(&ctx, &mut out);

        for (agent, acc) in agents.iter().zip(&out) {
            assert_eq!(*acc, agent.calculate_behavior(&agents, &config.flocking));
        }
    }

    #[test]
    fn test_in_place_order_dependence() {
        let config = AppConfig::default();
        let bounds = WorldBounds::new(800.0, 600.0);

        let mut in_place = pair();
        update_in_place_sequential(&mut in_place, &[], &config, &bounds);

        let mut committed = pair();
        let snapshot = committed.clone();
        let accs: Vec<DVec2> = snapshot
            .iter()
            .map(|a| a.calculate_behavior(&snapshot, &config.flocking))
            .collect();
        apply_accelerations_sequential(&mut committed, &accs, config.flocking.max_speed, &bounds);

        // The first agent sees identical input either way; the second does not.
        assert_eq!(in_place[0].position, committed[0].position);
        assert_ne!(in_place[1].velocity, committed[1].velocity);
    }
}
