//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Missing sections and keys fall back to the
//! defaults of the target-seeking variant.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command line flags (override both)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! mode = "target_seeking"
//! target_fps = 30
//!
//! [world]
//! width = 800.0
//! height = 600.0
//! agent_count = 50
//! seed = 42
//!
//! [flocking]
//! max_speed = 2.0
//! perception_radius = 50.0
//! ```

use serde::{Deserialize, Serialize};
use swarm_data::{SimulationMode, UpdateOrder};

/// World-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Initial population. Only read at construction or explicit reinitialisation.
    pub agent_count: usize,
    pub seed: Option<u64>,
    pub update_order: UpdateOrder,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            agent_count: 50,
            seed: None,
            update_order: UpdateOrder::Snapshot,
        }
    }
}

/// Steering weights and limits for the three flocking rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FlockingConfig {
    pub max_speed: f64,
    pub perception_radius: f64,
    pub cohesion_weight: f64,
    pub separation_weight: f64,
    pub alignment_weight: f64,
    /// Neighbours closer than this give no separation push.
    pub min_separation_distance: f64,
}

impl Default for FlockingConfig {
    fn default() -> Self {
        Self {
            max_speed: 2.0,
            perception_radius: 50.0,
            cohesion_weight: 0.01,
            separation_weight: 0.05,
            alignment_weight: 0.05,
            min_separation_distance: 1e-9,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TargetConfig {
    pub seek_weight: f64,
    /// Random targets placed at start in target-seeking mode.
    pub initial_targets: usize,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            seek_weight: 0.05,
            initial_targets: 1,
        }
    }
}

/// Parameters the control panel may change between ticks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FlockingParams {
    pub max_speed: f64,
    pub perception_radius: f64,
}

impl FlockingParams {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.max_speed.is_finite() && self.max_speed >= 0.0,
            "Max speed must be finite and non-negative"
        );
        anyhow::ensure!(
            self.perception_radius.is_finite() && self.perception_radius > 0.0,
            "Perception radius must be finite and positive"
        );
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub flocking: FlockingConfig,
    pub targets: TargetConfig,
    pub target_fps: u64,
    pub mode: SimulationMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            flocking: FlockingConfig::default(),
            targets: TargetConfig::default(),
            target_fps: 30,
            mode: SimulationMode::TargetSeeking,
        }
    }
}

impl AppConfig {
    /// The plain flocking variant: no targets, 60 frames per second.
    #[must_use]
    pub fn flocking_only() -> Self {
        Self {
            targets: TargetConfig {
                initial_targets: 0,
                ..Default::default()
            },
            target_fps: 60,
            mode: SimulationMode::Flocking,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn params(&self) -> FlockingParams {
        FlockingParams {
            max_speed: self.flocking.max_speed,
            perception_radius: self.flocking.perception_radius,
        }
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(
            self.world.width.is_finite() && self.world.width > 0.0,
            "World width must be positive"
        );
        anyhow::ensure!(
            self.world.height.is_finite() && self.world.height > 0.0,
            "World height must be positive"
        );
        anyhow::ensure!(
            self.world.agent_count <= 10000,
            "Agent count too large (max 10000)"
        );

        // Flocking validation
        self.params().validate()?;
        anyhow::ensure!(
            self.flocking.cohesion_weight.is_finite() && self.flocking.cohesion_weight >= 0.0,
            "Cohesion weight must be finite and non-negative"
        );
        anyhow::ensure!(
            self.flocking.separation_weight.is_finite() && self.flocking.separation_weight >= 0.0,
            "Separation weight must be finite and non-negative"
        );
        anyhow::ensure!(
            self.flocking.alignment_weight.is_finite() && self.flocking.alignment_weight >= 0.0,
            "Alignment weight must be finite and non-negative"
        );
        anyhow::ensure!(
            self.flocking.min_separation_distance.is_finite() && self.flocking.min_separation_distance >= 0.0,
            "Minimum separation distance must be finite and non-negative"
        );

        // Target validation
        anyhow::ensure!(
            self.targets.seek_weight.is_finite() && self.targets.seek_weight >= 0.0,
            "Seek weight must be finite and non-negative"
        );

        // Target FPS validation
        anyhow::ensure!(self.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Parses and validates a `config.toml` document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of every setting that changes how agents move.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.flocking).as_bytes());
        hasher.update(format!("{:?}", self.targets).as_bytes());
        hasher.update(format!("{:?}", self.mode).as_bytes());
        hex::encode(hasher.finalize())
    }
}
