mod common;

use common::{AgentBuilder, WorldBuilder};
use glam::DVec2;
use swarm_lib::model::config::{AppConfig, FlockingParams};
use swarm_lib::model::state::SimulationMode;
use swarm_lib::model::world::World;
use swarm_lib::model::AgentLogic;

#[test]
fn test_default_world_population() {
    let mut config = AppConfig::default();
    config.world.seed = Some(11);
    let world = World::new(config).unwrap();

    assert_eq!(world.agents().len(), 50);
    assert_eq!(world.targets().len(), 1);
    assert_in_bounds!(world);
    for agent in world.agents() {
        assert!(agent.velocity.x.abs() <= 1.0 && agent.velocity.y.abs() <= 1.0);
    }
}

#[test]
fn test_flocking_preset_starts_without_targets() {
    let mut config = AppConfig::flocking_only();
    config.world.seed = Some(11);
    let world = World::new(config).unwrap();
    assert!(world.targets().is_empty());
    assert!(world.target_distances().is_empty());
}

#[test]
fn test_invariants_hold_over_many_ticks() {
    let mut world = WorldBuilder::new()
        .with_seed(5)
        .with_random_agents(200)
        .with_target(400.0, 300.0)
        .build();

    let mut targets_seen = world.targets().len();
    for tick in 0..300 {
        if tick % 50 == 0 {
            world.add_random_target();
        }
        world.step();
        assert_eq!(world.agents().len(), 200);
        assert!(world.targets().len() >= targets_seen);
        targets_seen = world.targets().len();
        assert_speed_bounded!(world);
        assert_in_bounds!(world);
    }
    assert_eq!(world.tick(), 300);
    assert_eq!(world.metrics().tick_count(), 300);
}

#[test]
fn test_snapshot_step_matches_brute_force_update() {
    let mut world = WorldBuilder::new()
        .with_seed(21)
        .with_random_agents(120)
        .with_target(100.0, 100.0)
        .with_target(650.0, 420.0)
        .build();
    world.run(10);

    let before = world.agents().to_vec();
    let targets = world.targets().to_vec();
    let config = world.config().clone();
    let bounds = world.bounds();

    let mut expected = before.clone();
    for agent in &mut expected {
        agent.update(&before, &targets, &config, &bounds);
    }

    world.step();

    for (got, want) in world.agents().iter().zip(&expected) {
        assert_eq!(got.id, want.id);
        assert_eq!(got.position, want.position);
        assert_eq!(got.velocity, want.velocity);
    }
}

#[test]
fn test_snapshot_step_is_order_independent() {
    let agents: Vec<_> = (0..6)
        .map(|i| {
            AgentBuilder::new()
                .at(300.0 + 7.0 * i as f64, 300.0 + 3.0 * (i % 3) as f64)
                .moving(0.3 * i as f64 - 0.8, 0.5)
                .build()
        })
        .collect();

    let mut forward = WorldBuilder::new();
    for a in &agents {
        forward = forward.with_agent(a.clone());
    }
    let mut forward = forward.with_target(500.0, 500.0).build();

    let mut reversed = WorldBuilder::new();
    for a in agents.iter().rev() {
        reversed = reversed.with_agent(a.clone());
    }
    let mut reversed = reversed.with_target(500.0, 500.0).build();

    forward.step();
    reversed.step();

    let n = agents.len();
    for i in 0..n {
        assert_vec_close!(
            forward.agents()[i].position,
            reversed.agents()[n - 1 - i].position
        );
        assert_vec_close!(
            forward.agents()[i].velocity,
            reversed.agents()[n - 1 - i].velocity
        );
    }
}

#[test]
fn test_sequential_order_reads_moved_neighbors() {
    let build = |sequential: bool| {
        let mut builder = WorldBuilder::new()
            .with_agent(AgentBuilder::new().at(100.0, 100.0).moving(1.0, 0.0).build())
            .with_agent(AgentBuilder::new().at(110.0, 100.0).moving(-1.0, 0.0).build());
        if sequential {
            builder = builder.sequential();
        }
        builder.build()
    };
    let mut snapshot = build(false);
    let mut in_place = build(true);
    snapshot.step();
    in_place.step();

    assert_eq!(snapshot.agents()[0].velocity, in_place.agents()[0].velocity);
    assert_ne!(snapshot.agents()[1].velocity, in_place.agents()[1].velocity);
}

#[test]
fn test_add_target_wraps_and_rejects_non_finite() {
    let mut world = WorldBuilder::new().build();
    world.add_target(DVec2::new(810.0, -10.0)).unwrap();
    assert_eq!(world.target_positions(), vec![DVec2::new(10.0, 590.0)]);

    assert!(world.add_target(DVec2::new(f64::NAN, 1.0)).is_err());
    assert!(world.add_target(DVec2::new(1.0, f64::INFINITY)).is_err());
    assert_eq!(world.targets().len(), 1);
}

#[test]
fn test_random_targets_inside_world() {
    let mut world = WorldBuilder::new().with_seed(8).build();
    for _ in 0..100 {
        let p = world.add_random_target();
        assert!(world.bounds().contains(p));
    }
    assert_eq!(world.targets().len(), 100);
}

#[test]
fn test_target_distances_cover_every_pair() {
    let mut world = WorldBuilder::new()
        .with_agent(AgentBuilder::new().at(0.0, 0.0).build())
        .with_agent(AgentBuilder::new().at(30.0, 40.0).build())
        .with_target(0.0, 0.0)
        .with_target(60.0, 80.0)
        .build();
    assert_eq!(world.target_distances(), vec![0.0, 50.0, 100.0, 50.0]);

    let histogram = world.distance_histogram(10);
    assert_eq!(histogram.total(), 4);
    assert_eq!(histogram.counts[0], 1);
    assert_eq!(histogram.counts[5], 2);
    assert_eq!(histogram.counts[9], 1);

    world.step();
    assert_eq!(world.target_distances().len(), 4);
}

#[test]
fn test_apply_params_between_ticks() {
    let mut world = WorldBuilder::new()
        .with_agent(AgentBuilder::new().at(100.0, 100.0).moving(1.5, 0.0).build())
        .build();

    world
        .apply_params(FlockingParams {
            max_speed: 0.5,
            perception_radius: 120.0,
        })
        .unwrap();
    world.step();
    assert!((world.agents()[0].velocity.length() - 0.5).abs() < 1e-12);

    let rejected = world.apply_params(FlockingParams {
        max_speed: -1.0,
        perception_radius: 120.0,
    });
    assert!(rejected.is_err());
    assert_eq!(world.config().flocking.max_speed, 0.5);
}

#[test]
fn test_larger_perception_radius_finds_far_neighbors() {
    let mut world = WorldBuilder::new()
        .with_agent(AgentBuilder::new().at(100.0, 100.0).build())
        .with_agent(AgentBuilder::new().at(180.0, 100.0).build())
        .build();

    world.step();
    assert_eq!(world.agents()[0].velocity, DVec2::ZERO);

    world
        .apply_params(FlockingParams {
            max_speed: 2.0,
            perception_radius: 100.0,
        })
        .unwrap();
    world.step();
    assert!(world.agents()[0].velocity.x > 0.0, "agents should now attract");
}

#[test]
fn test_reinitialize_changes_population_only() {
    let mut world = WorldBuilder::new()
        .with_seed(2)
        .with_random_agents(50)
        .with_target(10.0, 10.0)
        .build();
    world.run(5);

    world.reinitialize(120).unwrap();
    assert_eq!(world.agents().len(), 120);
    assert_eq!(world.targets().len(), 1);
    assert_eq!(world.tick(), 5);
    assert_in_bounds!(world);

    assert!(world.reinitialize(20_000).is_err());
    assert_eq!(world.agents().len(), 120);
}

#[test]
fn test_stats_and_snapshot_views() {
    let mut config = AppConfig::default();
    config.world.seed = Some(4);
    config.mode = SimulationMode::TargetSeeking;
    let mut world = World::new(config).unwrap();
    world.run(3);

    let stats = world.stats();
    assert_eq!(stats.tick, 3);
    assert_eq!(stats.agent_count, 50);
    assert_eq!(stats.target_count, 1);
    assert!(stats.max_speed <= 2.0);
    assert!(stats.mean_target_distance.is_some());

    let snapshot = world.snapshot();
    assert_eq!(snapshot.agents.len(), 50);
    assert_eq!(snapshot.width, 800.0);
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"tick\":3"));
}
