//! # Objectlife Core
//!
//! Deterministic simulation rules for Objectlife, a small artificial-life
//! arena where agents wander, eat, work at sites, mate and die.
//!
//! This crate holds the rules and nothing that owns a population:
//! - Agent creation, the status machine and birthing
//! - Steering: easing, separation, edge reflection and contact slides
//! - Periodic aging, hunger decay and heading assignment
//! - Site production
//! - Spatial hashing for nearest-target queries
//! - Configuration, snapshots, metrics and structured logging
//!
//! The tick loop that drives these rules lives in the root crate.
//!
//! ## Example
//!
//! ```
//! use objectlife_core::config::AgentConfig;
//! use objectlife_core::lifecycle::{create_agent_with_rng, update_status, Census};
//! use objectlife_core::rng::create_rng;
//! use objectlife_data::{AgentStatus, Position};
//!
//! let (mut rng, _seed) = create_rng(Some(42));
//! let mut agent = create_agent_with_rng(Position::new(10.0, 10.0), &AgentConfig::default(), &mut rng);
//!
//! // A fresh agent is hungry enough to look for food when some exists.
//! let census = Census { agents: 1, foods: 3, sites: 1 };
//! assert_eq!(update_status(&mut agent, &census), AgentStatus::Eat);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Feedback effect presets for renderers
pub mod effects;
/// Errors raised by exogenous input
pub mod error;
/// Agent lifecycle management (creation, status machine, birth)
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Seeded randomness helpers
pub mod rng;
/// Read-only world views for renderers
pub mod snapshot;
/// Spatial hashing for nearest-target queries
pub mod spatial_hash;
/// Movement and population systems
pub mod systems;

pub use error::SimError;
pub use metrics::{init_logging, Metrics};
pub use systems::steering::Arena;
