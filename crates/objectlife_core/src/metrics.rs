//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and counters for monitoring population
//! dynamics over a run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

pub const BIRTHS: &str = "births";
pub const DEATHS: &str = "deaths";
pub const FOOD_EATEN: &str = "food_eaten";
pub const SITE_VISITS: &str = "site_visits";
pub const FOOD_PRODUCED: &str = "food_produced";

/// Ticks between periodic `info!` summaries.
const LOG_EVERY: u64 = 1000;

/// Metrics collector for simulation statistics.
pub struct Metrics {
    tick_count: AtomicU64,
    agent_count: AtomicU64,
    food_count: AtomicU64,
    site_count: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            agent_count: AtomicU64::new(0),
            food_count: AtomicU64::new(0),
            site_count: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration and the population after it.
    pub fn record_tick(&self, duration: Duration, agents: usize, foods: usize, sites: usize) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.agent_count.store(agents as u64, Ordering::Relaxed);
        self.food_count.store(foods as u64, Ordering::Relaxed);
        self.site_count.store(sites as u64, Ordering::Relaxed);

        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick % LOG_EVERY == 0 {
            tracing::info!(
                tick = tick,
                agents = agents,
                foods = foods,
                sites = sites,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn increment_counter(&self, name: &str) {
        self.add_to_counter(name, 1);
    }

    pub fn add_to_counter(&self, name: &str, amount: u64) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(amount, Ordering::Relaxed);
    }

    /// Current value of a named counter; zero if it was never touched.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn agent_count(&self) -> u64 {
        self.agent_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_count(&self) -> u64 {
        self.food_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn site_count(&self) -> u64 {
        self.site_count.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the final counters of a run.
    pub fn log_summary(&self) {
        tracing::info!(
            ticks = self.tick_count(),
            agents = self.agent_count(),
            foods = self.food_count(),
            sites = self.site_count(),
            births = self.counter(BIRTHS),
            deaths = self.counter(DEATHS),
            food_eaten = self.counter(FOOD_EATEN),
            site_visits = self.counter(SITE_VISITS),
            food_produced = self.counter(FOOD_PRODUCED),
            elapsed_ms = self.elapsed().as_millis() as u64,
            "Simulation summary"
        );
    }
}

/// Installs a fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
