use super::steering::{ease_toward, reflect, separate, Arena, Separation};
use crate::rng::jitter;
use objectlife_data::{Agent, Direction, Position};
use rand::Rng;

/// Ticks between trail samples while wandering.
pub const WANDER_TRAIL_EVERY: u64 = 5;
/// Ticks between trail samples while seeking.
pub const SEEK_TRAIL_EVERY: u64 = 10;

/// Outcome of one wander step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderStep {
    pub position: Position,
    pub direction: Option<Direction>,
}

/// One wander step.
///
/// With a heading the agent bounces off the arena edge it has crossed, keeps
/// its distance from `neighbours` and advances `speed` units. Without one it
/// takes a small random step on each axis, scaled by its entropy factor.
pub fn wander_step<R, I>(agent: &Agent, neighbours: I, arena: &Arena, rng: &mut R) -> WanderStep
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = Position>,
{
    match agent.direction {
        Some(dir) => {
            let dir = reflect(dir, &agent.position, agent.size, arena);
            let mut position = separate(
                agent.position,
                neighbours,
                Separation::wander(agent.size, agent.speed),
            );
            position.x += dir.dx() * agent.speed;
            position.y += dir.dy() * agent.speed;
            WanderStep {
                position,
                direction: Some(dir),
            }
        }
        None => {
            let spread = agent.factors.entropy;
            let dx = jitter(rng, spread);
            let dy = jitter(rng, spread);
            WanderStep {
                position: Position::new(agent.position.x + dx, agent.position.y + dy),
                direction: None,
            }
        }
    }
}

/// Outcome of one seek step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekStep {
    /// Clear of the destination; move to `position`.
    Advance {
        position: Position,
        direction: Option<Direction>,
        target_direction: Option<Direction>,
    },
    /// The next step would overlap the destination. The agent has not moved;
    /// the caller resolves the reach and then slides the agent off.
    Contact {
        direction: Option<Direction>,
        target_direction: Option<Direction>,
        /// Distance from the would-be next position to the destination.
        contact_dist: f64,
    },
}

/// One step toward `destination`, a body of diameter `destination_size`.
///
/// The heading eases toward the straight line to the destination. Overlap is
/// tested on the would-be next position with a radius of half the summed
/// sizes. Neighbours are only consulted when the agent actually moves.
pub fn seek_step<I>(agent: &Agent, destination: &Position, destination_size: f64, neighbours: I) -> SeekStep
where
    I: IntoIterator<Item = Position>,
{
    let target_direction = Direction::normalized(
        destination.x - agent.position.x,
        destination.y - agent.position.y,
    );
    let direction = ease_toward(agent.direction, target_direction);

    let (step_x, step_y) = direction.map_or((0.0, 0.0), |d| (d.dx() * agent.speed, d.dy() * agent.speed));
    let next = Position::new(agent.position.x + step_x, agent.position.y + step_y);

    let combined = (agent.size + destination_size) / 2.0;
    let contact_sq = next.distance_sq(destination);
    if contact_sq < combined * combined {
        return SeekStep::Contact {
            direction,
            target_direction,
            contact_dist: contact_sq.sqrt(),
        };
    }

    let position = separate(next, neighbours, Separation::seek(agent.size, agent.speed));
    SeekStep::Advance {
        position,
        direction,
        target_direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::lifecycle::create_agent_with_rng;
    use crate::rng::create_rng;

    const ARENA: Arena = Arena {
        width: 1000.0,
        height: 1000.0,
    };

    fn agent_at(x: f64, y: f64) -> Agent {
        let (mut rng, _) = create_rng(Some(1));
        create_agent_with_rng(Position::new(x, y), &AgentConfig::default(), &mut rng)
    }

    #[test]
    fn test_wander_without_heading_stays_within_entropy() {
        let (mut rng, _) = create_rng(Some(2));
        let a = agent_at(500.0, 500.0);
        let step = wander_step(&a, std::iter::empty(), &ARENA, &mut rng);
        assert!(step.direction.is_none());
        assert!((step.position.x - 500.0).abs() <= 1.0);
        assert!((step.position.y - 500.0).abs() <= 1.0);
    }

    #[test]
    fn test_wander_with_heading_advances_by_speed() {
        let (mut rng, _) = create_rng(Some(2));
        let mut a = agent_at(500.0, 500.0);
        a.direction = Direction::normalized(1.0, 0.0);
        let step = wander_step(&a, std::iter::empty(), &ARENA, &mut rng);
        assert!((step.position.x - 505.0).abs() < 1e-9);
        assert_eq!(step.direction, a.direction);
    }

    #[test]
    fn test_wander_bounces_off_right_edge() {
        let (mut rng, _) = create_rng(Some(2));
        let mut a = agent_at(995.0, 500.0);
        a.direction = Direction::normalized(1.0, 0.0);
        let step = wander_step(&a, std::iter::empty(), &ARENA, &mut rng);
        assert!(step.direction.unwrap().dx() < 0.0);
        assert!(step.position.x < 995.0);
    }

    #[test]
    fn test_seek_far_target_advances() {
        let a = agent_at(0.0, 0.0);
        match seek_step(&a, &Position::new(100.0, 0.0), 10.0, std::iter::empty()) {
            SeekStep::Advance {
                position,
                direction,
                target_direction,
            } => {
                assert!((position.x - 5.0).abs() < 1e-9);
                assert_eq!(direction, target_direction);
            }
            other => panic!("expected advance, got {other:?}"),
        }
    }

    #[test]
    fn test_seek_close_target_makes_contact_without_moving() {
        let a = agent_at(0.0, 0.0);
        // next = (5, 0); |next - dest| = 10 < (30 + 10) / 2
        match seek_step(&a, &Position::new(15.0, 0.0), 10.0, std::iter::empty()) {
            SeekStep::Contact { contact_dist, .. } => assert!((contact_dist - 10.0).abs() < 1e-9),
            other => panic!("expected contact, got {other:?}"),
        }
    }

    #[test]
    fn test_seek_on_top_of_target_keeps_finite() {
        let a = agent_at(7.0, 7.0);
        match seek_step(&a, &Position::new(7.0, 7.0), 10.0, std::iter::empty()) {
            SeekStep::Contact {
                direction,
                target_direction,
                contact_dist,
            } => {
                assert!(direction.is_none());
                assert!(target_direction.is_none());
                assert_eq!(contact_dist, 0.0);
            }
            other => panic!("expected contact, got {other:?}"),
        }
    }

    #[test]
    fn test_seek_eases_existing_heading() {
        let mut a = agent_at(0.0, 0.0);
        a.direction = Direction::normalized(0.0, 1.0);
        match seek_step(&a, &Position::new(500.0, 0.0), 10.0, std::iter::empty()) {
            SeekStep::Advance { direction, .. } => {
                let d = direction.unwrap();
                assert!(d.dx() > 0.0 && d.dy() > 0.0);
                assert!((d.magnitude() - 1.0).abs() < 1e-12);
            }
            other => panic!("expected advance, got {other:?}"),
        }
    }
}
