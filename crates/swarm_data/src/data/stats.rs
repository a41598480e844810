use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Population summary captured after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickStats {
    pub tick: u64,
    pub agent_count: usize,
    pub target_count: usize,
    pub mean_speed: f64,
    pub max_speed: f64,
    /// Mean over every agent-to-target pair; `None` without targets.
    pub mean_target_distance: Option<f64>,
    pub centroid: DVec2,
}

/// Equal-width histogram over `[min, max]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceHistogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<usize>,
}

impl DistanceHistogram {
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        if self.counts.is_empty() {
            0.0
        } else {
            (self.max - self.min) / self.counts.len() as f64
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(lower, upper, count)` for every bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let lower = self.min + width * i as f64;
            (lower, lower + width, count)
        })
    }
}
