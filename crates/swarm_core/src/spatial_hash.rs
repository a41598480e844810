use glam::DVec2;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

#[derive(Clone, Debug, Default)]
/// Uniform grid over the world used to find neighbour candidates.
///
/// Uses the "offset array" layout (like compressed sparse rows):
/// `cell_offsets[i]..cell_offsets[i+1]` indexes into `agent_indices` for all
/// agents whose position falls in cell `i`.
///
/// Queries only narrow the candidate set. Callers still apply the exact
/// distance test, and candidates come back in ascending index order so a
/// filtered scan sums neighbours in the same order as a brute-force one.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use swarm_core::spatial_hash::SpatialHash;
///
/// let mut spatial = SpatialHash::new(10.0, 100.0, 100.0);
/// let positions = vec![DVec2::new(15.0, 15.0), DVec2::new(25.0, 25.0), DVec2::new(85.0, 85.0)];
/// spatial.build(&positions);
///
/// let mut nearby = Vec::new();
/// spatial.query_into(DVec2::new(15.0, 15.0), 20.0, &mut nearby);
/// assert_eq!(nearby, vec![0, 1]);
/// ```
pub struct SpatialHash {
    pub cell_size: f64,
    pub width: f64,
    pub height: f64,
    pub cols: usize,
    pub rows: usize,
    pub cell_offsets: Vec<usize>,
    pub agent_indices: Vec<usize>,
}

impl SpatialHash {
    /// Creates an empty hash covering a `width` x `height` world.
    ///
    /// A `cell_size` equal to the perception radius keeps every query to a
    /// 3x3 block of cells.
    pub fn new(cell_size: f64, width: f64, height: f64) -> Self {
        let mut hash = Self {
            cell_size: cell_size.max(f64::EPSILON),
            width,
            height,
            ..Default::default()
        };
        hash.resize(cell_size, width, height);
        hash
    }

    /// Re-dimensions the grid. Existing contents are discarded.
    pub fn resize(&mut self, cell_size: f64, width: f64, height: f64) {
        self.cell_size = cell_size.max(f64::EPSILON);
        self.width = width;
        self.height = height;
        // Keep the grid bounded when the radius is tiny compared to the world
        self.cols = ((width / self.cell_size).ceil() as usize).clamp(1, 1024);
        self.rows = ((height / self.cell_size).ceil() as usize).clamp(1, 1024);
        self.cell_size = self
            .cell_size
            .max(width / self.cols as f64)
            .max(height / self.rows as f64);
        self.cell_offsets = vec![0; self.cols * self.rows + 1];
        self.agent_indices.clear();
    }

    /// Flat cell index for a world coordinate.
    ///
    /// Non-finite or out-of-range coordinates return `None`.
    #[inline]
    pub fn get_cell_idx(&self, p: DVec2) -> Option<usize> {
        if !p.is_finite() {
            return None;
        }
        if p.x.abs() > i32::MAX as f64 * self.cell_size
            || p.y.abs() > i32::MAX as f64 * self.cell_size
        {
            return None;
        }

        let cx = (p.x / self.cell_size).floor() as i32;
        let cy = (p.y / self.cell_size).floor() as i32;
        if cx < 0 || cx >= self.cols as i32 || cy < 0 || cy >= self.rows as i32 {
            None
        } else {
            Some((cy as usize * self.cols) + cx as usize)
        }
    }

    /// Rebuilds the grid from scratch. Counting runs in parallel.
    pub fn build(&mut self, positions: &[DVec2]) {
        let cell_count = self.cols * self.rows;

        let atomic_counts: Vec<AtomicUsize> =
            (0..cell_count).map(|_| AtomicUsize::new(0)).collect();
        positions.par_iter().for_each(|&p| {
            if let Some(idx) = self.get_cell_idx(p) {
                atomic_counts[idx].fetch_add(1, AtomicOrdering::Relaxed);
            }
        });

        self.cell_offsets.clear();
        self.cell_offsets.reserve(cell_count + 1);
        let mut running = 0;
        self.cell_offsets.push(0);
        for count in atomic_counts {
            running += count.into_inner();
            self.cell_offsets.push(running);
        }

        self.agent_indices.clear();
        self.agent_indices.resize(running, 0);
        let mut cursor = self.cell_offsets[..cell_count].to_vec();
        for (agent_idx, &p) in positions.iter().enumerate() {
            if let Some(cell_idx) = self.get_cell_idx(p) {
                self.agent_indices[cursor[cell_idx]] = agent_idx;
                cursor[cell_idx] += 1;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.agent_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agent_indices.is_empty()
    }

    /// Calls `callback` for every agent in the cells overlapping the square
    /// of half-size `radius` around `center`, in no particular order.
    pub fn query_callback<F>(&self, center: DVec2, radius: f64, mut callback: F)
    where
        F: FnMut(usize),
    {
        if !center.is_finite() || !radius.is_finite() {
            return;
        }
        let min_cx = (((center.x - radius) / self.cell_size).floor() as i32).max(0);
        let max_cx = (((center.x + radius) / self.cell_size).floor() as i32).min(self.cols as i32 - 1);
        let min_cy = (((center.y - radius) / self.cell_size).floor() as i32).max(0);
        let max_cy = (((center.y + radius) / self.cell_size).floor() as i32).min(self.rows as i32 - 1);

        for cy in min_cy..=max_cy {
            for cx in min_cx..=max_cx {
                let cell_idx = (cy as usize * self.cols) + cx as usize;
                let start = self.cell_offsets[cell_idx];
                let end = self.cell_offsets[cell_idx + 1];
                for &agent_idx in &self.agent_indices[start..end] {
                    callback(agent_idx);
                }
            }
        }
    }

    /// Candidate indices near `center`, sorted ascending.
    #[inline]
    pub fn query_into(&self, center: DVec2, radius: f64, result: &mut Vec<usize>) {
        result.clear();
        self.query_callback(center, radius, |idx| result.push(idx));
        result.sort_unstable();
    }
}
