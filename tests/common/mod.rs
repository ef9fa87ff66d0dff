pub mod macros;

use objectlife_lib::model::config::AppConfig;
use objectlife_lib::model::state::{AgentStatus, Direction};
use objectlife_lib::model::world::World;
use uuid::Uuid;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    agents: Vec<AgentBuilder>,
    foods: Vec<(f64, f64, Option<f64>)>,
    sites: Vec<(f64, f64, Option<u32>)>,
}

#[allow(dead_code)]
impl WorldBuilder {
    /// Empty arena, fixed seed, trail recording on.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.seed = Some(42);
        Self {
            config,
            agents: Vec::new(),
            foods: Vec::new(),
            sites: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agent(mut self, agent: AgentBuilder) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn with_food(mut self, x: f64, y: f64) -> Self {
        self.foods.push((x, y, None));
        self
    }

    pub fn with_food_utility(mut self, x: f64, y: f64, utility: f64) -> Self {
        self.foods.push((x, y, Some(utility)));
        self
    }

    pub fn with_site(mut self, x: f64, y: f64) -> Self {
        self.sites.push((x, y, None));
        self
    }

    pub fn with_site_utility(mut self, x: f64, y: f64, utility: u32) -> Self {
        self.sites.push((x, y, Some(utility)));
        self
    }

    /// Builds the world, returning it with the ids of the agents in the
    /// order they were added.
    pub fn build(self) -> (World, Vec<Uuid>) {
        let mut world = World::empty(self.config).expect("Failed to create world in test builder");

        for (x, y, utility) in self.foods {
            world.spawn_food_at(x, y).expect("food spawn");
            if let (Some(u), Some(food)) = (utility, world.foods.last_mut()) {
                food.utility = u;
            }
        }
        for (x, y, utility) in self.sites {
            world.spawn_site_at(x, y).expect("site spawn");
            if let (Some(u), Some(site)) = (utility, world.sites.last_mut()) {
                site.utility = u;
            }
        }

        let mut ids = Vec::new();
        for template in self.agents {
            let id = world.spawn_agent_at(template.x, template.y).expect("agent spawn");
            let agent = world.agents.last_mut().expect("agent just spawned");
            template.apply(agent);
            ids.push(id);
        }

        (world, ids)
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    x: f64,
    y: f64,
    hunger: Option<f64>,
    age: Option<f64>,
    max_age: Option<f64>,
    births: Option<(u32, u32)>,
    direction: Option<(f64, f64)>,
    ready_to_work: Option<bool>,
    status: Option<AgentStatus>,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            hunger: None,
            age: None,
            max_age: None,
            births: None,
            direction: None,
            ready_to_work: None,
            status: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn hunger(mut self, hunger: f64) -> Self {
        self.hunger = Some(hunger);
        self
    }

    pub fn age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn max_age(mut self, max_age: f64) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Births already given and the cap.
    pub fn births(mut self, count: u32, max: u32) -> Self {
        self.births = Some((count, max));
        self
    }

    pub fn heading(mut self, dx: f64, dy: f64) -> Self {
        self.direction = Some((dx, dy));
        self
    }

    pub fn ready_to_work(mut self, ready: bool) -> Self {
        self.ready_to_work = Some(ready);
        self
    }

    pub fn status(mut self, status: AgentStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn apply(self, agent: &mut objectlife_lib::model::state::Agent) {
        if let Some(h) = self.hunger {
            agent.hunger = h;
        }
        if let Some(a) = self.age {
            agent.age = a;
        }
        if let Some(m) = self.max_age {
            agent.max_age = m;
        }
        if let Some((count, max)) = self.births {
            agent.birth_count = count;
            agent.max_births = max;
        }
        if let Some((dx, dy)) = self.direction {
            agent.direction = Direction::normalized(dx, dy);
        }
        if let Some(r) = self.ready_to_work {
            agent.ready_to_work = r;
        }
        if let Some(s) = self.status {
            agent.status = s;
        }
    }
}
