//! Plain data shared by the simulation core, the orchestrator and any host.
//!
//! Nothing in this crate draws randomness or mutates other entities; it only
//! describes agents, resources and the events a tick can raise.

pub mod data;

pub use data::agent::{Agent, AgentStatus, Direction, Factors, Position, Target};
pub use data::event::{DeathCause, Effect, EffectKind, LiveEvent};
pub use data::resource::{Food, FoodStatus, Site};
