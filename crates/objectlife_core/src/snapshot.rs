use objectlife_data::{Agent, AgentStatus, Food, FoodStatus, Position, Site};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub display_size: f64,
    pub status: AgentStatus,
    pub age: f64,
    pub hunger: f64,
    pub heading: f64,
    /// Empty unless trail recording is on.
    pub path: Vec<Position>,
}

impl From<&Agent> for AgentSnapshot {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            x: agent.position.x,
            y: agent.position.y,
            size: agent.size,
            display_size: agent.display_size(),
            status: agent.status,
            age: agent.age,
            hunger: agent.hunger,
            heading: agent.heading,
            path: agent.path.iter().copied().collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FoodSnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub utility: f64,
    pub status: FoodStatus,
}

impl From<&Food> for FoodSnapshot {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id,
            x: food.position.x,
            y: food.position.y,
            size: food.size,
            utility: food.utility,
            status: food.status,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SiteSnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub utility: u32,
    pub work_done: u32,
}

impl From<&Site> for SiteSnapshot {
    fn from(site: &Site) -> Self {
        Self {
            id: site.id,
            x: site.position.x,
            y: site.position.y,
            size: site.size,
            utility: site.utility,
            work_done: site.work_done,
        }
    }
}

/// Read-only view of the arenas handed to renderers and dumps.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    pub is_over: bool,
    pub agents: Vec<AgentSnapshot>,
    pub foods: Vec<FoodSnapshot>,
    pub sites: Vec<SiteSnapshot>,
}

impl WorldSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AgentConfig, ResourceConfig};
    use crate::lifecycle::{create_agent_with_rng, create_food_with_rng, create_site_with_rng};
    use crate::rng::create_rng;

    #[test]
    fn test_snapshot_serializes_statuses_lowercase() {
        let (mut rng, _) = create_rng(Some(12));
        let pos = Position::new(4.0, 2.0);
        let agent = create_agent_with_rng(pos, &AgentConfig::default(), &mut rng);
        let food = create_food_with_rng(pos, &ResourceConfig::default(), &mut rng);
        let site = create_site_with_rng(pos, &ResourceConfig::default(), &mut rng);

        let snapshot = WorldSnapshot {
            tick: 3,
            width: 100.0,
            height: 100.0,
            is_over: false,
            agents: vec![AgentSnapshot::from(&agent)],
            foods: vec![FoodSnapshot::from(&food)],
            sites: vec![SiteSnapshot::from(&site)],
        };

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"doodle\""));
        assert!(json.contains("\"fresh\""));
        assert!(json.contains("\"work_done\": 0"));
        assert_eq!(snapshot.agents[0].display_size, agent.display_size());
    }
}
