pub mod shutdown;

pub use shutdown::ShutdownManager;

use crate::model::config::AppConfig;
use crate::model::world::World;
use anyhow::{Context, Result};
use objectlife_data::LiveEvent;
use std::path::Path;
use std::time::Duration;

/// Exit status of a run cut short by a shutdown request (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Host loop around a [`World`]: decides when to tick and when to stop.
pub struct App {
    pub world: World,
    /// Stop after this many ticks even if the world is not over.
    pub max_ticks: Option<u64>,
    pub shutdown: ShutdownManager,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            world: World::new(config)?,
            max_ticks: None,
            shutdown: ShutdownManager::new(),
        })
    }

    /// Reads `path` if it exists, otherwise falls back to defaults.
    pub fn load_config(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        AppConfig::from_toml(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    pub fn should_stop(&self) -> bool {
        self.world.is_over()
            || self.shutdown.is_shutdown_requested()
            || self.max_ticks.is_some_and(|max| self.world.tick >= max)
    }

    /// Runs one tick and traces its events.
    pub fn step(&mut self) -> Vec<LiveEvent> {
        let events = self.world.update();
        for event in &events {
            tracing::trace!(event = ?event, "Live event");
        }
        events
    }

    /// Ticks as fast as possible until the world is over or the budget runs out.
    pub fn run_headless(&mut self) -> Result<()> {
        tracing::info!(seed = self.world.seed(), "Running headless");
        while !self.should_stop() {
            self.step();
        }
        self.finish()
    }

    /// Ticks at the configured frame rate until stopped or interrupted.
    pub async fn run_realtime(&mut self) -> Result<()> {
        let fps = self.world.config.world.target_fps.max(1);
        tracing::info!(seed = self.world.seed(), fps, "Running in real time");

        self.shutdown.listen_for_ctrl_c();
        let mut interval = tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        while !self.should_stop() {
            interval.tick().await;
            self.step();
        }
        self.finish()
    }

    fn finish(&mut self) -> Result<()> {
        if self.shutdown.is_shutdown_requested() {
            self.shutdown.set_exit_code(INTERRUPTED_EXIT_CODE);
        }
        tracing::info!(
            tick = self.world.tick,
            over = self.world.is_over(),
            agents = self.world.agent_count(),
            foods = self.world.food_count(),
            sites = self.world.site_count(),
            "Run finished"
        );
        self.shutdown.cleanup(&self.world)
    }
}
