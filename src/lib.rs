//! Objectlife: agents that wander, eat, work at sites, mate and die.
//!
//! The rules live in `objectlife_core`; this crate owns the tick loop
//! ([`model::world::World`]) and the host loop around it ([`app::App`]).

pub mod app;
pub mod model;
