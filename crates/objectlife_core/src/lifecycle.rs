use crate::config::{AgentConfig, ResourceConfig};
use crate::rng::{jitter, next_id, uniform};
use objectlife_data::{Agent, AgentStatus, DeathCause, Food, Position, Site};
use rand::Rng;
use std::collections::VecDeque;

/// Hunger at or above which an agent with births left goes looking for a mate.
pub const MATE_HUNGER: f64 = 1.2;
/// Hunger at or below which an agent goes looking for food.
pub const EAT_HUNGER: f64 = 0.5;
/// Lowest food utility a new food item can roll.
pub const MIN_FOOD_UTILITY: f64 = 0.5;

/// Live population counts consulted by the status machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    /// Agents not yet resolved dead.
    pub agents: usize,
    /// Food not yet eaten.
    pub foods: usize,
    pub sites: usize,
}

impl Census {
    /// Food available per living agent.
    pub fn food_ratio(&self) -> f64 {
        if self.agents == 0 {
            f64::INFINITY
        } else {
            self.foods as f64 / self.agents as f64
        }
    }
}

pub fn create_agent_with_rng<R: Rng>(position: Position, config: &AgentConfig, rng: &mut R) -> Agent {
    Agent {
        id: next_id(rng),
        parent_id: None,
        position,
        size: config.initial_size,
        speed: config.initial_speed,
        age: config.initial_age,
        max_age: config.max_age,
        hunger: config.initial_hunger,
        birth_count: 0,
        max_births: config.max_births,
        status: AgentStatus::Doodle,
        ready_to_work: true,
        direction: None,
        target_direction: None,
        destination: None,
        heading: 0.0,
        path: VecDeque::new(),
        factors: config.factors(),
    }
}

pub fn create_food_with_rng<R: Rng>(position: Position, config: &ResourceConfig, rng: &mut R) -> Food {
    let utility = uniform(rng, MIN_FOOD_UTILITY, f64::from(config.max_utility));
    Food::new(next_id(rng), position, config.food_size, utility)
}

pub fn create_site_with_rng<R: Rng>(position: Position, config: &ResourceConfig, rng: &mut R) -> Site {
    Site::new(
        next_id(rng),
        position,
        config.site_size,
        config.max_utility.saturating_mul(2),
    )
}

/// Re-evaluates an agent's status from its hunger, age and birth budget.
///
/// The branches are checked in a fixed order and only the first match
/// applies:
///
/// 1. `hunger >= 1.2` with births left: `Mate`.
/// 2. `0.5 < hunger <= 1.2`: `Work` if food is scarce (ratio at or below the
///    work threshold) and the agent is ready, else `Doodle`.
/// 3. `0 < hunger <= 0.5`: `Eat` if any food is left, otherwise mark ready
///    and `Work`.
/// 4. `hunger <= 0`: `Dead`.
/// 5. `age >= max_age`: `Dead`.
///
/// The death checks come last, so old age only claims agents that are
/// well fed with no births left; everyone else keeps acting until they
/// starve. An agent matching no branch keeps its current status.
pub fn update_status(agent: &mut Agent, census: &Census) -> AgentStatus {
    debug_assert!(agent.hunger.is_finite(), "hunger went non-finite");
    debug_assert!(agent.age.is_finite(), "age went non-finite");

    let hunger = agent.hunger;
    if hunger >= MATE_HUNGER && agent.birth_count < agent.max_births {
        agent.status = AgentStatus::Mate;
    } else if hunger > EAT_HUNGER && hunger <= MATE_HUNGER {
        agent.status = if census.food_ratio() <= agent.factors.work_threshold && agent.ready_to_work {
            AgentStatus::Work
        } else {
            AgentStatus::Doodle
        };
    } else if hunger > 0.0 && hunger <= EAT_HUNGER {
        if census.foods > 0 {
            agent.status = AgentStatus::Eat;
        } else {
            agent.ready_to_work = true;
            agent.status = AgentStatus::Work;
        }
    } else if hunger <= 0.0 || agent.age >= agent.max_age {
        agent.status = AgentStatus::Dead;
    }
    agent.status
}

pub fn death_cause(agent: &Agent) -> DeathCause {
    if agent.hunger <= 0.0 {
        DeathCause::Starvation
    } else {
        DeathCause::OldAge
    }
}

/// Reproduces if the birth budget allows.
///
/// The child appears next to the parent with the configured starting age
/// and speed, inherits the parent's hunger and factors, and is sized from
/// the parent's age and satiety. Children are born without a birth budget
/// of their own: a newborn carries the parent's full hunger and sits next to
/// it, so a fertile newborn would mate again before the tick ends. Giving
/// birth costs the parent two thirds of its hunger. Past the cap nothing is
/// spawned and the parent drops back to `Doodle`.
pub fn give_birth<R: Rng>(parent: &mut Agent, config: &AgentConfig, rng: &mut R) -> Option<Agent> {
    if parent.birth_count >= parent.max_births {
        parent.status = AgentStatus::Doodle;
        return None;
    }

    let birth_size =
        parent.size + parent.age / 10.0 * parent.hunger * parent.factors.sizing / 3.0;
    parent.birth_count += 1;

    let spread = parent.factors.entropy;
    let position = Position::new(
        parent.position.x + jitter(rng, spread),
        parent.position.y + jitter(rng, spread),
    );
    let child = Agent {
        id: next_id(rng),
        parent_id: Some(parent.id),
        position,
        size: birth_size,
        speed: config.initial_speed,
        age: config.initial_age,
        max_age: config.max_age,
        hunger: parent.hunger,
        birth_count: 0,
        max_births: 0,
        status: AgentStatus::Doodle,
        ready_to_work: true,
        direction: None,
        target_direction: None,
        destination: None,
        heading: 0.0,
        path: VecDeque::new(),
        factors: parent.factors,
    };

    parent.hunger /= 3.0;
    Some(child)
}
