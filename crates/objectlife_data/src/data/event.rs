use super::agent::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual flavour of a feedback effect. Rendering is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Particle burst; `inward` particles fly toward the origin.
    Sparkle { inward: bool },
    Confetti,
    RingPulse,
}

/// Parameters for one celebratory effect.
///
/// `strength` is a particle count for bursts and a starting radius for ring
/// pulses. `lifetime` is in frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub position: Position,
    pub color: [u8; 3],
    pub strength: f64,
    pub lifetime: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    Starvation,
    OldAge,
}

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    /// An agent ate a food item.
    FoodEaten {
        agent_id: Uuid,
        food_id: Uuid,
        utility: f64,
        tick: u64,
        effect: Effect,
    },
    /// An agent reached a partner. `child_id` is `None` once the birth cap
    /// has been hit.
    MateReached {
        agent_id: Uuid,
        partner_id: Uuid,
        child_id: Option<Uuid>,
        tick: u64,
        effect: Effect,
    },
    /// An agent put in a round of work at a site.
    SiteReached {
        agent_id: Uuid,
        site_id: Uuid,
        tick: u64,
        effect: Effect,
    },
    /// A site met its work quota and produced food.
    FoodProduced {
        site_id: Uuid,
        count: u32,
        tick: u64,
        effect: Effect,
    },
    /// A site ran out of utility and was removed.
    SiteExhausted {
        site_id: Uuid,
        tick: u64,
        position: Position,
    },
    Death {
        agent_id: Uuid,
        age: f64,
        births: u32,
        cause: DeathCause,
        tick: u64,
        position: Position,
    },
}

impl LiveEvent {
    /// The feedback effect a renderer should play for this event, if any.
    #[must_use]
    pub fn effect(&self) -> Option<&Effect> {
        match self {
            Self::FoodEaten { effect, .. }
            | Self::MateReached { effect, .. }
            | Self::SiteReached { effect, .. }
            | Self::FoodProduced { effect, .. } => Some(effect),
            Self::SiteExhausted { .. } | Self::Death { .. } => None,
        }
    }

    #[must_use]
    pub const fn tick(&self) -> u64 {
        match self {
            Self::FoodEaten { tick, .. }
            | Self::MateReached { tick, .. }
            | Self::SiteReached { tick, .. }
            | Self::FoodProduced { tick, .. }
            | Self::SiteExhausted { tick, .. }
            | Self::Death { tick, .. } => *tick,
        }
    }
}
