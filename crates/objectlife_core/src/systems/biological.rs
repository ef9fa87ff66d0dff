//! Slow per-agent clocks: aging, hunger decay and picking a wander heading.

use crate::rng::jitter;
use objectlife_data::{Agent, AgentStatus, Direction};
use rand::Rng;

/// Hunger lost per periodic update, before the hunger factor.
pub const HUNGER_DECAY: f64 = 0.1;

/// Age gained per periodic update for each status, before the aging factor.
#[must_use]
pub const fn aging_rate(status: AgentStatus) -> f64 {
    match status {
        AgentStatus::Mate => 1.2,
        AgentStatus::Doodle => 1.0,
        AgentStatus::Eat => 0.7,
        AgentStatus::Work => 1.5,
        AgentStatus::Dead => 0.0,
    }
}

pub fn aging(agent: &mut Agent) {
    agent.age += aging_rate(agent.status) * agent.factors.aging;
}

pub fn hungering(agent: &mut Agent) {
    agent.hunger -= HUNGER_DECAY * agent.factors.hunger;
}

/// Gives a heading-less agent a random one. A draw that lands on the zero
/// vector leaves it heading-less until the next update.
pub fn directing<R: Rng + ?Sized>(agent: &mut Agent, rng: &mut R) {
    if agent.direction.is_none() {
        let spread = agent.factors.entropy;
        let dx = jitter(rng, spread);
        let dy = jitter(rng, spread);
        agent.direction = Direction::normalized(dx, dy);
    }
}

/// The periodic update run on every living agent each lifecycle interval.
pub fn periodic_update<R: Rng + ?Sized>(agent: &mut Agent, rng: &mut R) {
    if !agent.is_alive() {
        return;
    }
    aging(agent);
    hungering(agent);
    directing(agent, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::lifecycle::create_agent_with_rng;
    use crate::rng::create_rng;
    use objectlife_data::Position;

    fn agent() -> Agent {
        let (mut rng, _) = create_rng(Some(4));
        create_agent_with_rng(Position::new(0.0, 0.0), &AgentConfig::default(), &mut rng)
    }

    #[test]
    fn test_aging_depends_on_status() {
        let mut a = agent();
        a.status = AgentStatus::Work;
        aging(&mut a);
        // 10 + 1.5 * 2
        assert!((a.age - 13.0).abs() < 1e-12);

        a.status = AgentStatus::Eat;
        aging(&mut a);
        assert!((a.age - 14.4).abs() < 1e-12);
    }

    #[test]
    fn test_hungering_decays_by_factor() {
        let mut a = agent();
        a.factors.hunger = 2.0;
        hungering(&mut a);
        assert!((a.hunger - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_directing_assigns_unit_heading_once() {
        let (mut rng, _) = create_rng(Some(6));
        let mut a = agent();
        directing(&mut a, &mut rng);
        let first = a.direction.unwrap();
        assert!((first.magnitude() - 1.0).abs() < 1e-12);

        directing(&mut a, &mut rng);
        assert_eq!(a.direction, Some(first));
    }

    #[test]
    fn test_zero_entropy_never_gets_heading() {
        let (mut rng, _) = create_rng(Some(6));
        let mut a = agent();
        a.factors.entropy = 0.0;
        directing(&mut a, &mut rng);
        assert!(a.direction.is_none());
    }

    #[test]
    fn test_periodic_update_skips_dead() {
        let (mut rng, _) = create_rng(Some(6));
        let mut a = agent();
        a.status = AgentStatus::Dead;
        periodic_update(&mut a, &mut rng);
        assert_eq!(a.age, 10.0);
        assert!(a.direction.is_none());
    }
}
