use super::World;
use objectlife_data::{Agent, Food};

impl World {
    /// Drops every food item eaten this tick.
    pub(crate) fn sweep_foods(&mut self) {
        self.foods.retain(Food::is_available);
        self.reindex();
    }

    /// Drops every agent resolved dead this tick and refreshes the id maps.
    pub(crate) fn sweep_agents(&mut self) {
        self.agents.retain(Agent::is_alive);
        self.reindex();
    }

    /// True once no food and no sites remain, or every agent has died.
    ///
    /// The world keeps ticking regardless; stopping is the host's call.
    #[must_use]
    pub fn is_over(&self) -> bool {
        (self.food_count() == 0 && self.site_count() == 0) || self.agent_count() == 0
    }

    /// Logs the end condition the first time it holds.
    pub(crate) fn check_over(&mut self) {
        if !self.over_logged && self.is_over() {
            self.over_logged = true;
            tracing::info!(
                tick = self.tick,
                agents = self.agent_count(),
                foods = self.food_count(),
                sites = self.site_count(),
                "Simulation over"
            );
        }
    }
}
