//! Vector helpers shared by every movement mode.
//!
//! All functions are guarded against zero-length vectors: a force or slide
//! that cannot be normalized is skipped rather than turned into NaN.

use crate::rng::jitter;
use objectlife_data::{Direction, Position};
use rand::Rng;

/// Fraction of the way the heading turns toward its goal each tick.
pub const EASE: f64 = 0.15;
/// Tangential step, as a fraction of speed, taken after reaching a target.
pub const REACH_SLIDE: f64 = 0.3;
/// Spread of the random skew added to the post-reach slide.
pub const REACH_JITTER: f64 = 0.1;

/// Arena bounds. Positions are not clamped to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

/// How far apart agents try to stay, and how hard they slide past each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    pub distance: f64,
    pub slide_step: f64,
}

impl Separation {
    /// Wandering agents keep 1.5 body lengths apart and slide at 0.2 × speed.
    pub fn wander(size: f64, speed: f64) -> Self {
        Self {
            distance: size * 1.5,
            slide_step: speed * 0.2,
        }
    }

    /// Seeking agents keep 1.25 body lengths apart and slide at 0.3 × speed.
    pub fn seek(size: f64, speed: f64) -> Self {
        Self {
            distance: size * 1.25,
            slide_step: speed * 0.3,
        }
    }
}

/// Pushes `origin` away from every neighbour inside the separation radius.
///
/// Each close neighbour adds an inverse-distance repulsion to an accumulated
/// force and immediately nudges `origin` sideways, perpendicular to the line
/// between them. Later neighbours are measured from the nudged position. The
/// accumulated force is applied once at the end.
pub fn separate<I>(mut origin: Position, neighbours: I, separation: Separation) -> Position
where
    I: IntoIterator<Item = Position>,
{
    let dist_sq_limit = separation.distance * separation.distance;
    let mut force_x = 0.0;
    let mut force_y = 0.0;

    for other in neighbours {
        let diff_x = origin.x - other.x;
        let diff_y = origin.y - other.y;
        let dist_sq = diff_x * diff_x + diff_y * diff_y;
        if dist_sq >= dist_sq_limit {
            continue;
        }

        let dist = dist_sq.sqrt();
        if dist > 0.0 {
            force_x += (diff_x / dist) * (separation.distance - dist);
            force_y += (diff_y / dist) * (separation.distance - dist);
        }

        if let Some(slide) = Direction::normalized(-diff_y, diff_x) {
            origin.x += slide.dx() * separation.slide_step;
            origin.y += slide.dy() * separation.slide_step;
        }
    }

    origin.x += force_x;
    origin.y += force_y;
    origin
}

/// Turns `current` a fixed fraction of the way toward `target`.
///
/// With no current heading the target is adopted outright. A missing target
/// (agent sitting exactly on its destination) or a turn that cancels out
/// leaves the heading unchanged.
pub fn ease_toward(current: Option<Direction>, target: Option<Direction>) -> Option<Direction> {
    match (current, target) {
        (None, target) => target,
        (Some(cur), None) => Some(cur),
        (Some(cur), Some(tgt)) => {
            let dx = cur.dx() + (tgt.dx() - cur.dx()) * EASE;
            let dy = cur.dy() + (tgt.dy() - cur.dy()) * EASE;
            Direction::normalized(dx, dy).or(Some(cur))
        }
    }
}

/// Reverses one heading component when the agent is past an arena edge.
///
/// Edges are checked right, left, bottom, top, and at most one component
/// flips per call. Position is left alone.
pub fn reflect(direction: Direction, position: &Position, size: f64, arena: &Arena) -> Direction {
    let half = size / 2.0;
    if position.x > arena.width - half || position.x < half {
        direction.flip_x()
    } else if position.y > arena.height - half || position.y < half {
        direction.flip_y()
    } else {
        direction
    }
}

/// Where an agent ends up after bumping into its destination.
///
/// The agent steps sideways, tangent to the line from destination to agent,
/// with the same small random skew added to both axes. `contact_dist` is the
/// distance between the would-be next position and the destination; when it
/// is zero the tangent is undefined and only the skew remains.
pub fn slide_off<R: Rng + ?Sized>(
    position: &Position,
    destination: &Position,
    contact_dist: f64,
    speed: f64,
    rng: &mut R,
) -> Position {
    let (mut slide_x, mut slide_y) = if contact_dist > 0.0 {
        let normal_x = (position.x - destination.x) / contact_dist;
        let normal_y = (position.y - destination.y) / contact_dist;
        (-normal_y, normal_x)
    } else {
        (0.0, 0.0)
    };

    let skew = jitter(rng, REACH_JITTER);
    slide_x += skew;
    slide_y += skew;

    match Direction::normalized(slide_x, slide_y) {
        Some(slide) => Position::new(
            position.x + slide.dx() * speed * REACH_SLIDE,
            position.y + slide.dy() * speed * REACH_SLIDE,
        ),
        None => *position,
    }
}
