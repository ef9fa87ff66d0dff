use super::World;
use crate::model::config::AppConfig;
use crate::model::lifecycle::{create_agent_with_rng, create_food_with_rng, create_site_with_rng, Census};
use crate::model::metrics::Metrics;
use crate::model::spatial_hash::SpatialHash;
use objectlife_core::rng::{create_rng, uniform};
use objectlife_data::Position;
use rand::Rng;
use std::collections::HashMap;

impl World {
    /// Builds and seeds a world from a validated configuration.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let (rng, seed) = create_rng(config.world.seed);
        tracing::info!(
            seed = seed,
            config = %config.fingerprint(),
            agents = config.population.initial_agents,
            foods = config.population.initial_food,
            sites = config.population.initial_sites,
            "Seeding world"
        );

        let mut world = Self {
            spatial_hash: SpatialHash::new(config.world.grid_cell_size),
            config,
            tick: 0,
            agents: Vec::new(),
            foods: Vec::new(),
            sites: Vec::new(),
            metrics: Metrics::new(),
            rng,
            seed,
            census: Census::default(),
            agent_index: HashMap::new(),
            food_index: HashMap::new(),
            site_index: HashMap::new(),
            over_logged: false,
        };
        world.seed_population();
        world.reindex();
        Ok(world)
    }

    /// A world with no entities, for hosts and tests that place everything
    /// themselves.
    pub fn empty(config: AppConfig) -> anyhow::Result<Self> {
        let mut config = config;
        config.population.initial_agents = 0;
        config.population.initial_food = 0;
        config.population.initial_sites = 0;
        Self::new(config)
    }

    /// Food and sites land uniformly in the arena. Agents walk in from the
    /// edges: each round places one just past a vertical edge and one just
    /// past a horizontal edge, so an odd count rounds up.
    fn seed_population(&mut self) {
        let population = self.config.population.clone();

        for _ in 0..population.initial_food {
            let position = self.random_position();
            let food = create_food_with_rng(position, &self.config.resources, &mut self.rng);
            self.foods.push(food);
        }
        for _ in 0..population.initial_sites {
            let position = self.random_position();
            let site = create_site_with_rng(position, &self.config.resources, &mut self.rng);
            self.sites.push(site);
        }

        let (width, height) = (self.config.world.width, self.config.world.height);
        let half = self.config.agent.initial_size / 2.0;
        for _ in 0..population.initial_agents.div_ceil(2) {
            let x = if self.rng.gen_bool(0.5) { -half } else { width + half };
            let y = uniform(&mut self.rng, 0.0, height);
            self.push_new_agent(Position::new(x, y));

            let x = uniform(&mut self.rng, 0.0, width);
            let y = if self.rng.gen_bool(0.5) { -half } else { height + half };
            self.push_new_agent(Position::new(x, y));
        }
    }

    pub(crate) fn random_position(&mut self) -> Position {
        let x = uniform(&mut self.rng, 0.0, self.config.world.width);
        let y = uniform(&mut self.rng, 0.0, self.config.world.height);
        Position::new(x, y)
    }

    fn push_new_agent(&mut self, position: Position) {
        let agent = create_agent_with_rng(position, &self.config.agent, &mut self.rng);
        self.agents.push(agent);
    }
}
