use crate::systems::flocking::{self, FlockingContext};
use crate::world::World;
use std::time::Instant;
use swarm_data::{Target, UpdateOrder};

impl World {
    /// Advances every agent by one tick.
    ///
    /// With [`UpdateOrder::Snapshot`] all agents read the state as it was at
    /// the start of the tick: accelerations are computed in parallel from a
    /// frozen copy and committed afterwards, so the result does not depend on
    /// iteration order. [`UpdateOrder::Sequential`] updates agents in place in
    /// index order instead.
    ///
    /// The population never changes size here.
    pub fn step(&mut self) {
        let started = Instant::now();
        self.tick += 1;

        let seeking = self.config.mode.seeks_targets();
        let targets: &[Target] = if seeking {
            self.targets.as_slice()
        } else {
            &[]
        };

        match self.config.world.update_order {
            UpdateOrder::Snapshot => {
                self.snapshot.capture(&self.agents);
                self.spatial_hash.build(&self.snapshot.positions);

                let ctx = FlockingContext {
                    config: &self.config,
                    snapshot: &self.snapshot,
                    spatial_hash: &self.spatial_hash,
                    targets,
                };
                flocking::compute_accelerations_parallel(&ctx, &mut self.accelerations);
                flocking::apply_accelerations_sequential(
                    &mut self.agents,
                    &self.accelerations,
                    self.config.flocking.max_speed,
                    &self.bounds,
                );
            }
            UpdateOrder::Sequential => {
                flocking::update_in_place_sequential(
                    &mut self.agents,
                    targets,
                    &self.config,
                    &self.bounds,
                );
            }
        }

        let elapsed = started.elapsed();
        self.metrics
            .record_tick(elapsed, self.agents.len(), self.targets.len());
        tracing::debug!(tick = self.tick, elapsed_us = elapsed.as_micros() as u64, "Tick complete");
    }

    /// Runs `ticks` steps back to back.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }
}
