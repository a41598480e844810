pub mod input;
pub mod report;
pub mod shutdown;

pub use input::InputEvent;
pub use shutdown::ShutdownManager;

use anyhow::Result;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use swarm_core::config::AppConfig;
use swarm_core::systems::stats::DEFAULT_HISTOGRAM_BINS;
use swarm_core::world::World;
use swarm_data::{DistanceHistogram, TickStats};
use swarm_io::HistoryLogger;

/// What a finished run looked like.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed: Duration,
    pub final_stats: TickStats,
    pub histogram: DistanceHistogram,
}

/// Headless display driver: drains input, steps the world once, hands the
/// result to the history log, repeats until told to quit.
pub struct App {
    pub world: World,
    pub running: bool,
    pub shutdown: ShutdownManager,
    history: HistoryLogger,
    pending: VecDeque<InputEvent>,
    paced: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            world: World::new(config)?,
            running: true,
            shutdown: ShutdownManager::new(),
            history: HistoryLogger::new_dummy(),
            pending: VecDeque::new(),
            paced: true,
        })
    }

    #[must_use]
    pub fn with_history(mut self, history: HistoryLogger) -> Self {
        self.history = history;
        self
    }

    /// Run as fast as possible instead of at `target_fps`.
    #[must_use]
    pub fn unpaced(mut self) -> Self {
        self.paced = false;
        self
    }

    /// Queues an event for the start of the next tick.
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Applies every queued event. The queue is always drained; the first
    /// failure is returned after the rest have been applied.
    fn handle_events(&mut self) -> Result<()> {
        let mut first_error = None;
        while let Some(event) = self.pending.pop_front() {
            if let Err(e) = self.apply_event(event) {
                tracing::warn!(error = %e, "Input event rejected");
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn apply_event(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::PlaceTarget(point) => self.world.add_target(point)?,
            InputEvent::AddRandomTarget => {
                self.world.add_random_target();
            }
            InputEvent::SetParams(params) => self.world.apply_params(params)?,
            InputEvent::Reset { agent_count } => self.world.reinitialize(agent_count)?,
            InputEvent::Quit => self.running = false,
        }
        Ok(())
    }

    /// One iteration of the driver loop. Returns `false` once the app should stop.
    pub fn tick(&mut self) -> Result<bool> {
        if self.shutdown.is_shutdown_requested() {
            self.running = false;
        }
        self.handle_events()?;
        if !self.running {
            return Ok(false);
        }

        self.world.step();
        if self.history.is_enabled() {
            self.history.record(&self.world.stats())?;
        }
        Ok(true)
    }

    /// Runs until `max_ticks` is reached, a quit event arrives or shutdown is requested.
    pub fn run(&mut self, max_ticks: Option<u64>) -> Result<RunSummary> {
        let started = Instant::now();
        let frame = Duration::from_secs_f64(1.0 / self.world.config().target_fps as f64);
        let mut ticks = 0u64;

        while max_ticks.map_or(true, |max| ticks < max) {
            let frame_start = Instant::now();
            if !self.tick()? {
                break;
            }
            ticks += 1;

            if self.paced {
                let spent = frame_start.elapsed();
                if spent < frame {
                    std::thread::sleep(frame - spent);
                }
            }
        }

        self.history.flush()?;
        let summary = RunSummary {
            ticks,
            elapsed: started.elapsed(),
            final_stats: self.world.stats(),
            histogram: self.world.distance_histogram(DEFAULT_HISTOGRAM_BINS),
        };
        tracing::info!(
            ticks = summary.ticks,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            mean_tick_us = self.world.metrics().mean_tick_duration().as_micros() as u64,
            mean_speed = summary.final_stats.mean_speed,
            "Run finished"
        );
        Ok(summary)
    }
}
