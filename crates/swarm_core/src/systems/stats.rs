use glam::DVec2;
use swarm_data::{Agent, DistanceHistogram, Target, TickStats};

pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Every agent-to-target distance, target-major: all agents for the first
/// target, then all agents for the second, and so on.
pub fn target_distances(agents: &[Agent], targets: &[Target]) -> Vec<f64> {
    targets
        .iter()
        .flat_map(|t| agents.iter().map(move |a| a.position.distance(t.position)))
        .collect()
}

pub trait HistogramLogic {
    fn from_distances(distances: &[f64], bins: usize) -> Self;
}

impl HistogramLogic for DistanceHistogram {
    /// Equal-width bins over `[min, max]`; the last bin includes `max`.
    ///
    /// When every value is identical the range widens to `value ± 0.5`.
    /// Non-finite values are dropped.
    fn from_distances(distances: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = distances.iter().copied().filter(|d| d.is_finite()).collect();
        if finite.is_empty() {
            return Self {
                min: 0.0,
                max: 1.0,
                counts: vec![0; bins],
            };
        }

        let mut min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0; bins];
        for d in finite {
            let idx = (((d - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Self { min, max, counts }
    }
}

pub fn compute_tick_stats(tick: u64, agents: &[Agent], targets: &[Target]) -> TickStats {
    let mut stats = TickStats {
        tick,
        agent_count: agents.len(),
        target_count: targets.len(),
        ..Default::default()
    };
    if agents.is_empty() {
        return stats;
    }

    let n = agents.len() as f64;
    let mut speed_sum = 0.0;
    let mut centroid = DVec2::ZERO;
    for a in agents {
        let speed = a.speed();
        speed_sum += speed;
        stats.max_speed = stats.max_speed.max(speed);
        centroid += a.position;
    }
    stats.mean_speed = speed_sum / n;
    stats.centroid = centroid / n;

    if !targets.is_empty() {
        let distances = target_distances(agents, targets);
        stats.mean_target_distance =
            Some(distances.iter().sum::<f64>() / distances.len() as f64);
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_data::AgentId;

    fn agent_at(id: u32, x: f64, y: f64) -> Agent {
        Agent::new(AgentId(id), DVec2::new(x, y), DVec2::new(1.0, 0.0))
    }

    #[test]
    fn test_target_distances_order() {
        let agents = vec![agent_at(0, 0.0, 0.0), agent_at(1, 3.0, 4.0)];
        let targets = vec![Target::new(0.0, 0.0), Target::new(6.0, 8.0)];
        assert_eq!(target_distances(&agents, &targets), vec![0.0, 5.0, 10.0, 5.0]);
    }

    #[test]
    fn test_histogram_bins() {
        let h = DistanceHistogram::from_distances(&[0.0, 1.0, 2.0, 9.0, 10.0], 10);
        assert_eq!(h.min, 0.0);
        assert_eq!(h.max, 10.0);
        assert_eq!(h.counts, vec![1, 1, 1, 0, 0, 0, 0, 0, 0, 2]);
        assert_eq!(h.total(), 5);
    }

    #[test]
    fn test_histogram_degenerate_range() {
        let h = DistanceHistogram::from_distances(&[4.0, 4.0, 4.0], 10);
        assert_eq!(h.min, 3.5);
        assert_eq!(h.max, 4.5);
        assert_eq!(h.counts[5], 3);
        assert_eq!(h.total(), 3);
    }

    #[test]
    fn test_histogram_empty() {
        let h = DistanceHistogram::from_distances(&[], DEFAULT_HISTOGRAM_BINS);
        assert_eq!(h.counts.len(), 10);
        assert_eq!(h.total(), 0);
    }

    #[test]
    fn test_tick_stats() {
        let agents = vec![agent_at(0, 0.0, 0.0), agent_at(1, 4.0, 0.0)];
        let stats = compute_tick_stats(3, &agents, &[Target::new(2.0, 0.0)]);
        assert_eq!(stats.tick, 3);
        assert_eq!(stats.agent_count, 2);
        assert_eq!(stats.centroid, DVec2::new(2.0, 0.0));
        assert_eq!(stats.mean_speed, 1.0);
        assert_eq!(stats.mean_target_distance, Some(2.0));
    }

    #[test]
    fn test_tick_stats_without_targets() {
        let stats = compute_tick_stats(0, &[agent_at(0, 1.0, 1.0)], &[]);
        assert_eq!(stats.mean_target_distance, None);
    }
}
