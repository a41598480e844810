use crate::config::{AppConfig, FlockingConfig};
use glam::DVec2;
use rand::Rng;
use swarm_data::{Agent, AgentId, Target};

/// Rectangular toroidal world. Leaving one edge re-enters at the opposite one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
}

impl WorldBounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Maps `p` into `[0, width) x [0, height)`.
    #[inline]
    #[must_use]
    pub fn wrap(&self, p: DVec2) -> DVec2 {
        DVec2::new(wrap_axis(p.x, self.width), wrap_axis(p.y, self.height))
    }

    #[must_use]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    /// Uniformly random point inside the bounds.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> DVec2 {
        DVec2::new(
            rng.gen::<f64>() * self.width,
            rng.gen::<f64>() * self.height,
        )
    }
}

#[inline]
fn wrap_axis(v: f64, extent: f64) -> f64 {
    let wrapped = v.rem_euclid(extent);
    // rem_euclid of a tiny negative value rounds up to `extent` itself
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

const MAX_SHRINK_STEPS: usize = 8;

/// Rescales `velocity` to `max_speed` if it is faster, keeping its direction.
#[inline]
#[must_use]
pub fn clamp_speed(velocity: DVec2, max_speed: f64) -> DVec2 {
    let speed = velocity.length();
    if speed <= max_speed {
        return velocity;
    }
    if max_speed <= 0.0 {
        return DVec2::ZERO;
    }
    let mut clamped = velocity * (max_speed / speed);
    // the rescale can land a few ulps above the limit
    for _ in 0..MAX_SHRINK_STEPS {
        if clamped.length() <= max_speed {
            return clamped;
        }
        clamped *= 1.0 - f64::EPSILON;
    }
    if clamped.length() <= max_speed {
        clamped
    } else {
        DVec2::ZERO
    }
}

pub trait AgentLogic {
    /// Random position inside `bounds`, velocity uniform in
    /// `[-max_speed/2, max_speed/2)` on each axis.
    fn new_random_with_rng<R: Rng>(
        id: AgentId,
        bounds: &WorldBounds,
        max_speed: f64,
        rng: &mut R,
    ) -> Self;

    /// Combined cohesion, separation and alignment acceleration.
    fn calculate_behavior(&self, neighbors: &[Agent], flocking: &FlockingConfig) -> DVec2;

    /// Same as [`AgentLogic::calculate_behavior`] over any neighbour sequence.
    fn calculate_behavior_from<'a, I>(&self, neighbors: I, flocking: &FlockingConfig) -> DVec2
    where
        I: IntoIterator<Item = &'a Agent>;

    /// Unit vector towards the closest target, or zero.
    fn seek_nearest_target(&self, targets: &[Target]) -> DVec2;

    /// Flocking acceleration plus the weighted seek term when targets exist.
    fn steering<'a, I>(&self, neighbors: I, targets: &[Target], config: &AppConfig) -> DVec2
    where
        I: IntoIterator<Item = &'a Agent>;

    /// Applies `acceleration`, clamps speed, moves and wraps.
    fn integrate(&mut self, acceleration: DVec2, max_speed: f64, bounds: &WorldBounds);

    /// One full tick for this agent against a neighbour snapshot that may
    /// include the agent itself.
    fn update(
        &mut self,
        neighbors: &[Agent],
        targets: &[Target],
        config: &AppConfig,
        bounds: &WorldBounds,
    );
}

impl AgentLogic for Agent {
    fn new_random_with_rng<R: Rng>(
        id: AgentId,
        bounds: &WorldBounds,
        max_speed: f64,
        rng: &mut R,
    ) -> Self {
        let position = bounds.random_point(rng);
        let velocity = DVec2::new(rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5) * max_speed;
        Agent::new(id, position, velocity)
    }

    fn calculate_behavior(&self, neighbors: &[Agent], flocking: &FlockingConfig) -> DVec2 {
        self.calculate_behavior_from(neighbors, flocking)
    }

    fn calculate_behavior_from<'a, I>(&self, neighbors: I, flocking: &FlockingConfig) -> DVec2
    where
        I: IntoIterator<Item = &'a Agent>,
    {
        let mut cohesion = DVec2::ZERO;
        let mut separation = DVec2::ZERO;
        let mut alignment = DVec2::ZERO;
        let mut total = 0usize;

        for other in neighbors {
            if other.id == self.id {
                continue;
            }
            let offset = self.position - other.position;
            let distance = offset.length();
            if distance < flocking.perception_radius {
                cohesion += other.position;
                if distance > 0.0 && distance >= flocking.min_separation_distance {
                    separation += offset / (distance * distance);
                }
                alignment += other.velocity;
                total += 1;
            }
        }

        if total == 0 {
            return DVec2::ZERO;
        }

        let n = total as f64;
        let cohesion = (cohesion / n - self.position) * flocking.cohesion_weight;
        let separation = separation * flocking.separation_weight;
        let alignment = (alignment / n - self.velocity) * flocking.alignment_weight;
        cohesion + separation + alignment
    }

    fn seek_nearest_target(&self, targets: &[Target]) -> DVec2 {
        let mut nearest: Option<(f64, DVec2)> = None;
        for target in targets {
            let d = self.position.distance_squared(target.position);
            // strict comparison keeps the first of equally distant targets
            if nearest.map_or(true, |(best, _)| d < best) {
                nearest = Some((d, target.position));
            }
        }

        let Some((_, point)) = nearest else {
            return DVec2::ZERO;
        };
        let direction = point - self.position;
        let distance = direction.length();
        if distance > 0.0 {
            direction / distance
        } else {
            DVec2::ZERO
        }
    }

    fn steering<'a, I>(&self, neighbors: I, targets: &[Target], config: &AppConfig) -> DVec2
    where
        I: IntoIterator<Item = &'a Agent>,
    {
        let mut acceleration = self.calculate_behavior_from(neighbors, &config.flocking);
        if !targets.is_empty() {
            acceleration += self.seek_nearest_target(targets) * config.targets.seek_weight;
        }
        acceleration
    }

    fn integrate(&mut self, acceleration: DVec2, max_speed: f64, bounds: &WorldBounds) {
        let velocity = clamp_speed(self.velocity + acceleration, max_speed);
        if velocity.is_finite() {
            self.velocity = velocity;
        } else {
            tracing::warn!(agent = %self.id, "non-finite velocity discarded");
            self.velocity = DVec2::ZERO;
        }
        self.position = bounds.wrap(self.position + self.velocity);
    }

    fn update(
        &mut self,
        neighbors: &[Agent],
        targets: &[Target],
        config: &AppConfig,
        bounds: &WorldBounds,
    ) {
        let acceleration = self.steering(neighbors, targets, config);
        self.integrate(acceleration, config.flocking.max_speed, bounds);
    }
}
