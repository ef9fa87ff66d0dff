//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every section has defaults, so a file only needs
//! the keys it wants to override.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 1280.0
//! height = 720.0
//! seed = 42
//!
//! [population]
//! initial_agents = 40
//! initial_food = 20
//! initial_sites = 2
//!
//! [resources]
//! site_infinite = true
//! ```

use objectlife_data::Factors;
use serde::{Deserialize, Serialize};

/// Arena and clock configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub seed: Option<u64>,
    /// Edge length of a spatial hash cell, in arena units.
    pub grid_cell_size: f64,
    /// Aging, hunger decay and direction assignment run every this many ticks.
    pub lifecycle_interval: u64,
    pub target_fps: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            seed: None,
            grid_cell_size: 96.0,
            lifecycle_interval: 60,
            target_fps: 30,
        }
    }
}

/// Counts used when the simulation is seeded.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PopulationConfig {
    pub initial_agents: usize,
    pub initial_food: usize,
    pub initial_sites: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            initial_agents: 20,
            initial_food: 20,
            initial_sites: 2,
        }
    }
}

/// Starting state and tunable factors of every agent.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AgentConfig {
    pub initial_speed: f64,
    pub initial_age: f64,
    pub initial_size: f64,
    pub initial_hunger: f64,
    pub max_age: f64,
    pub max_births: u32,
    pub aging_factor: f64,
    pub sizing_factor: f64,
    pub hunger_factor: f64,
    /// Scale of every random perturbation (wander steps, birth jitter).
    pub entropy_factor: f64,
    /// Food-per-agent ratio at or below which fed agents go to work.
    pub work_threshold: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            initial_speed: 5.0,
            initial_age: 10.0,
            initial_size: 30.0,
            initial_hunger: 0.5,
            max_age: 100.0,
            max_births: 3,
            aging_factor: 2.0,
            sizing_factor: 2.0,
            hunger_factor: 1.0,
            entropy_factor: 1.0,
            work_threshold: 2.0,
        }
    }
}

impl AgentConfig {
    /// The factor bundle copied into each new agent.
    #[must_use]
    pub fn factors(&self) -> Factors {
        Factors {
            aging: self.aging_factor,
            sizing: self.sizing_factor,
            hunger: self.hunger_factor,
            entropy: self.entropy_factor,
            work_threshold: self.work_threshold,
        }
    }
}

/// Food and site economics.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ResourceConfig {
    /// Upper bound of a food's utility; a new site starts at twice this.
    pub max_utility: u32,
    /// Site visits needed per production round, and foods produced per round.
    pub work_needed: u32,
    /// Sites never lose utility when set.
    pub site_infinite: bool,
    pub food_size: f64,
    pub site_size: f64,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            max_utility: 3,
            work_needed: 5,
            site_infinite: false,
            food_size: 10.0,
            site_size: 10.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TrailConfig {
    pub record_paths: bool,
    pub path_history_limit: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            record_paths: true,
            path_history_limit: 50,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub population: PopulationConfig,
    pub agent: AgentConfig,
    pub resources: ResourceConfig,
    pub trail: TrailConfig,
}

impl AppConfig {
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
            self.world.grid_cell_size.is_finite() && self.world.grid_cell_size > 0.0,
            "Grid cell size must be positive"
        );
        anyhow::ensure!(
            self.world.lifecycle_interval > 0,
            "Lifecycle interval must be positive"
        );
        anyhow::ensure!(self.world.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.world.target_fps <= 240, "Target FPS too high (max 240)");

        // Agent validation
        anyhow::ensure!(
            self.agent.initial_speed.is_finite() && self.agent.initial_speed > 0.0,
            "Initial speed must be positive"
        );
        anyhow::ensure!(
            self.agent.initial_size.is_finite() && self.agent.initial_size > 0.0,
            "Initial size must be positive"
        );
        anyhow::ensure!(
            self.agent.max_age.is_finite() && self.agent.max_age > 0.0,
            "Max age must be positive"
        );
        anyhow::ensure!(
            self.agent.initial_age.is_finite() && self.agent.initial_age >= 0.0,
            "Initial age must be non-negative"
        );
        anyhow::ensure!(
            self.agent.initial_hunger.is_finite(),
            "Initial hunger must be finite"
        );
        anyhow::ensure!(
            self.agent.aging_factor.is_finite() && self.agent.aging_factor >= 0.0,
            "Aging factor must be non-negative"
        );
        anyhow::ensure!(
            self.agent.sizing_factor.is_finite() && self.agent.sizing_factor >= 0.0,
            "Sizing factor must be non-negative"
        );
        anyhow::ensure!(
            self.agent.hunger_factor.is_finite() && self.agent.hunger_factor >= 0.0,
            "Hunger factor must be non-negative"
        );
        anyhow::ensure!(
            self.agent.entropy_factor.is_finite() && self.agent.entropy_factor >= 0.0,
            "Entropy factor must be non-negative"
        );
        anyhow::ensure!(
            self.agent.work_threshold.is_finite() && self.agent.work_threshold >= 0.0,
            "Work threshold must be non-negative"
        );

        // Resource validation
        anyhow::ensure!(
            self.resources.max_utility > 0,
            "Max utility must be positive"
        );
        anyhow::ensure!(
            self.resources.work_needed > 0,
            "Work quota must be positive"
        );
        anyhow::ensure!(
            self.resources.food_size.is_finite() && self.resources.food_size > 0.0,
            "Food size must be positive"
        );
        anyhow::ensure!(
            self.resources.site_size.is_finite() && self.resources.site_size > 0.0,
            "Site size must be positive"
        );

        // Trail validation
        anyhow::ensure!(
            !self.trail.record_paths || self.trail.path_history_limit > 0,
            "Path history limit must be positive when recording paths"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of every parameter that affects simulation outcomes.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.population).as_bytes());
        hasher.update(format!("{:?}", self.agent).as_bytes());
        hasher.update(format!("{:?}", self.resources).as_bytes());
        hex::encode(hasher.finalize())
    }
}
