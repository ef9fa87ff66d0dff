use super::World;
use crate::model::lifecycle::{create_agent_with_rng, create_food_with_rng, create_site_with_rng};
use objectlife_core::error::{Result, SimError};
use objectlife_data::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exogenous spawn request from a host, e.g. a click on the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputCommand {
    SpawnAgent { x: f64, y: f64 },
    SpawnFood { x: f64, y: f64 },
    SpawnSite { x: f64, y: f64 },
}

impl World {
    /// Applies a host command and returns the id of the new entity.
    ///
    /// Entities added between ticks join the live sets immediately and are
    /// bucketed by the next tick's index rebuild.
    pub fn apply(&mut self, command: InputCommand) -> Result<Uuid> {
        match command {
            InputCommand::SpawnAgent { x, y } => self.spawn_agent_at(x, y),
            InputCommand::SpawnFood { x, y } => self.spawn_food_at(x, y),
            InputCommand::SpawnSite { x, y } => self.spawn_site_at(x, y),
        }
    }

    pub fn spawn_agent_at(&mut self, x: f64, y: f64) -> Result<Uuid> {
        SimError::check_coordinate(x, y)?;
        let agent = create_agent_with_rng(Position::new(x, y), &self.config.agent, &mut self.rng);
        let id = agent.id;
        self.insert_agent(agent);
        tracing::debug!(id = %id, x, y, "Spawned agent");
        Ok(id)
    }

    pub fn spawn_food_at(&mut self, x: f64, y: f64) -> Result<Uuid> {
        SimError::check_coordinate(x, y)?;
        let food = create_food_with_rng(Position::new(x, y), &self.config.resources, &mut self.rng);
        let id = food.id;
        self.insert_food(food);
        tracing::debug!(id = %id, x, y, "Spawned food");
        Ok(id)
    }

    pub fn spawn_site_at(&mut self, x: f64, y: f64) -> Result<Uuid> {
        SimError::check_coordinate(x, y)?;
        let site = create_site_with_rng(Position::new(x, y), &self.config.resources, &mut self.rng);
        let id = site.id;
        self.insert_site(site);
        tracing::debug!(id = %id, x, y, "Spawned site");
        Ok(id)
    }
}
