use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Arena position of an agent or resource.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_sq(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Unit-length heading.
///
/// Only [`Direction::normalized`] constructs one, so a `Direction` is always
/// finite and of magnitude 1 (within float tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    dx: f64,
    dy: f64,
}

impl Direction {
    /// Normalizes `(dx, dy)`; zero-length or non-finite input yields `None`.
    #[must_use]
    pub fn normalized(dx: f64, dy: f64) -> Option<Self> {
        let mag = dx.hypot(dy);
        if mag > 0.0 && mag.is_finite() {
            Some(Self {
                dx: dx / mag,
                dy: dy / mag,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn dx(&self) -> f64 {
        self.dx
    }

    #[must_use]
    pub const fn dy(&self) -> f64 {
        self.dy
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Reverses the horizontal component.
    #[must_use]
    pub const fn flip_x(self) -> Self {
        Self {
            dx: -self.dx,
            dy: self.dy,
        }
    }

    /// Reverses the vertical component.
    #[must_use]
    pub const fn flip_y(self) -> Self {
        Self {
            dx: self.dx,
            dy: -self.dy,
        }
    }

    /// Rendering angle in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.dy.atan2(self.dx)
    }
}

/// Behavioural mode of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Idle wander.
    #[default]
    Doodle,
    /// Seeking another agent to reproduce with.
    Mate,
    /// Seeking food.
    Eat,
    /// Seeking a site.
    Work,
    /// Terminal; swept at the end of the tick.
    Dead,
}

impl AgentStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Doodle => "doodle",
            Self::Mate => "mate",
            Self::Eat => "eat",
            Self::Work => "work",
            Self::Dead => "dead",
        }
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunable factors handed to every agent by value at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Factors {
    pub aging: f64,
    pub sizing: f64,
    pub hunger: f64,
    pub entropy: f64,
    pub work_threshold: f64,
}

impl Default for Factors {
    fn default() -> Self {
        Self {
            aging: 2.0,
            sizing: 2.0,
            hunger: 1.0,
            entropy: 1.0,
            work_threshold: 2.0,
        }
    }
}

/// Non-owning link to whatever an agent is heading for.
///
/// The handle is resolved against the live arenas every time it is used and
/// may refer to something that no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Agent(Uuid),
    Food(Uuid),
    Site(Uuid),
}

/// A living creature in the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub position: Position,
    pub size: f64,
    pub speed: f64,
    pub age: f64,
    pub max_age: f64,
    /// Signed satiety; zero or below means starvation.
    pub hunger: f64,
    pub birth_count: u32,
    pub max_births: u32,
    pub status: AgentStatus,
    pub ready_to_work: bool,
    pub direction: Option<Direction>,
    pub target_direction: Option<Direction>,
    pub destination: Option<Target>,
    /// Orientation for renderers, updated whenever a seek step is committed.
    pub heading: f64,
    /// Most recent position last.
    pub path: VecDeque<Position>,
    pub factors: Factors,
}

impl Agent {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.status != AgentStatus::Dead
    }

    /// Size a renderer draws: the base size swollen by age and satiety.
    #[must_use]
    pub fn display_size(&self) -> f64 {
        self.size + (self.age / 10.0) * self.hunger * self.factors.sizing
    }

    /// Appends to the trail, dropping the oldest entry past `limit`.
    pub fn record_path(&mut self, limit: usize) {
        self.path.push_back(self.position);
        while self.path.len() > limit {
            self.path.pop_front();
        }
    }
}
