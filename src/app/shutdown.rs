//! Graceful shutdown handling for the application.
//!
//! Provides Ctrl-C handling and the cleanup run before the process exits.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Manages graceful shutdown of the application.
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
    snapshot_path: Option<PathBuf>,
    exit_code: i32,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
            snapshot_path: None,
            exit_code: 0,
        }
    }

    /// Sets where the final world snapshot is written on exit.
    pub fn set_snapshot_path(&mut self, path: Option<PathBuf>) {
        self.snapshot_path = path;
    }

    pub fn snapshot_path(&self) -> Option<&PathBuf> {
        self.snapshot_path.as_ref()
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Spawns a task that flags shutdown on Ctrl-C. Needs a Tokio runtime.
    pub fn listen_for_ctrl_c(&self) {
        let flag = Arc::clone(&self.shutdown_requested);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                flag.store(true, Ordering::SeqCst);
            }
        });
    }

    pub fn set_exit_code(&mut self, code: i32) {
        self.exit_code = code;
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Logs the run summary and writes the final snapshot if one was asked for.
    pub fn cleanup(&self, world: &crate::model::world::World) -> Result<()> {
        tracing::info!("Performing shutdown cleanup...");
        world.metrics.log_summary();

        if let Some(path) = &self.snapshot_path {
            let json = world.snapshot().to_json()?;
            std::fs::write(path, json)
                .with_context(|| format!("writing snapshot to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Snapshot written");
        }

        tracing::info!("Cleanup complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;
    use crate::model::world::World;

    #[test]
    fn test_shutdown_manager_new() {
        let manager = ShutdownManager::new();
        assert!(!manager.is_shutdown_requested());
        assert!(manager.snapshot_path().is_none());
        assert_eq!(manager.exit_code(), 0);
    }

    #[test]
    fn test_shutdown_request() {
        let manager = ShutdownManager::new();
        manager.request_shutdown();
        assert!(manager.is_shutdown_requested());
    }

    #[test]
    fn test_exit_code() {
        let mut manager = ShutdownManager::new();
        manager.set_exit_code(1);
        assert_eq!(manager.exit_code(), 1);
    }

    #[test]
    fn test_cleanup_writes_snapshot() {
        let path = std::env::temp_dir().join(format!("objectlife_snapshot_{}.json", std::process::id()));
        let mut manager = ShutdownManager::new();
        manager.set_snapshot_path(Some(path.clone()));

        let mut config = AppConfig::default();
        config.world.seed = Some(1);
        let world = World::new(config).unwrap();
        manager.cleanup(&world).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"agents\""));
        std::fs::remove_file(&path).ok();
    }
}
