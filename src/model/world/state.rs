use super::World;
use crate::model::lifecycle::Census;
use crate::model::snapshot::{AgentSnapshot, FoodSnapshot, SiteSnapshot, WorldSnapshot};
use objectlife_data::{Agent, Food, Position, Site, Target};
use uuid::Uuid;

impl World {
    /// Agents not yet resolved dead.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_alive()).count()
    }

    /// Food not yet eaten.
    #[must_use]
    pub fn food_count(&self) -> usize {
        self.foods.iter().filter(|f| f.is_available()).count()
    }

    #[must_use]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn census(&self) -> Census {
        self.census
    }

    pub(crate) fn live_census(&self) -> Census {
        Census {
            agents: self.agent_count(),
            foods: self.food_count(),
            sites: self.site_count(),
        }
    }

    /// Rebuilds the id maps and the census from the arenas.
    pub(crate) fn reindex(&mut self) {
        self.agent_index = self.agents.iter().enumerate().map(|(i, a)| (a.id, i)).collect();
        self.food_index = self.foods.iter().enumerate().map(|(i, f)| (f.id, i)).collect();
        self.site_index = self.sites.iter().enumerate().map(|(i, s)| (s.id, i)).collect();
        self.census = self.live_census();
    }

    #[must_use]
    pub fn agent(&self, id: Uuid) -> Option<&Agent> {
        self.agent_index.get(&id).and_then(|&i| self.agents.get(i))
    }

    #[must_use]
    pub fn food(&self, id: Uuid) -> Option<&Food> {
        self.food_index.get(&id).and_then(|&i| self.foods.get(i))
    }

    #[must_use]
    pub fn site(&self, id: Uuid) -> Option<&Site> {
        self.site_index.get(&id).and_then(|&i| self.sites.get(i))
    }

    pub(crate) fn food_slot(&self, id: Uuid) -> Option<usize> {
        self.food_index.get(&id).copied()
    }

    pub(crate) fn site_slot(&self, id: Uuid) -> Option<usize> {
        self.site_index.get(&id).copied()
    }

    /// Position and size of a live destination, or `None` if it has died,
    /// been eaten or been removed.
    pub(crate) fn resolve(&self, target: Target) -> Option<(Position, f64)> {
        match target {
            Target::Agent(id) => self
                .agent(id)
                .filter(|a| a.is_alive())
                .map(|a| (a.position, a.size)),
            Target::Food(id) => self
                .food(id)
                .filter(|f| f.is_available())
                .map(|f| (f.position, f.size)),
            Target::Site(id) => self.site(id).map(|s| (s.position, s.size)),
        }
    }

    pub(crate) fn insert_agent(&mut self, agent: Agent) {
        let alive = agent.is_alive();
        self.agent_index.insert(agent.id, self.agents.len());
        self.agents.push(agent);
        if alive {
            self.census.agents += 1;
        }
    }

    pub(crate) fn insert_food(&mut self, food: Food) {
        let available = food.is_available();
        self.food_index.insert(food.id, self.foods.len());
        self.foods.push(food);
        if available {
            self.census.foods += 1;
        }
    }

    pub(crate) fn insert_site(&mut self, site: Site) {
        self.site_index.insert(site.id, self.sites.len());
        self.sites.push(site);
        self.census.sites += 1;
    }

    /// Read-only view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            width: self.config.world.width,
            height: self.config.world.height,
            is_over: self.is_over(),
            agents: self.agents.iter().map(AgentSnapshot::from).collect(),
            foods: self.foods.iter().map(FoodSnapshot::from).collect(),
            sites: self.sites.iter().map(SiteSnapshot::from).collect(),
        }
    }
}
