use crate::model::config::AppConfig;
use crate::model::lifecycle::Census;
use crate::model::metrics::Metrics;
use crate::model::spatial_hash::SpatialHash;
use objectlife_core::Arena;
use objectlife_data::{Agent, Food, Site};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use uuid::Uuid;

pub mod commands;
pub mod finalize;
pub mod init;
pub mod state;
pub mod update;

pub use commands::InputCommand;

/// The orchestrator: owns every arena, the spatial index and the RNG.
///
/// Entities live in plain `Vec`s in insertion order, which is also the
/// order the tick visits them. Agents refer to each other and to resources
/// only through [`Target`](objectlife_data::Target) handles, resolved
/// through the id maps below whenever they are used.
pub struct World {
    pub config: AppConfig,
    pub tick: u64,
    pub agents: Vec<Agent>,
    pub foods: Vec<Food>,
    pub sites: Vec<Site>,
    pub spatial_hash: SpatialHash,
    pub metrics: Metrics,
    pub(crate) rng: ChaCha8Rng,
    seed: u64,
    census: Census,
    agent_index: HashMap<Uuid, usize>,
    food_index: HashMap<Uuid, usize>,
    site_index: HashMap<Uuid, usize>,
    over_logged: bool,
}

impl World {
    #[must_use]
    pub fn arena(&self) -> Arena {
        Arena {
            width: self.config.world.width,
            height: self.config.world.height,
        }
    }

    /// Seed of the RNG stream this world was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
