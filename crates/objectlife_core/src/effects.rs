//! Feedback effect presets attached to [`LiveEvent`](objectlife_data::LiveEvent)s.

use objectlife_data::{Effect, EffectKind, Position};

pub const FOOD_COLOR: [u8; 3] = [134, 239, 172];
pub const MATE_COLOR: [u8; 3] = [244, 114, 182];
pub const WORK_COLOR: [u8; 3] = [251, 191, 36];
pub const PRODUCTION_COLOR: [u8; 3] = [164, 159, 213];

/// Green sparkles collapsing onto the eaten food.
#[must_use]
pub fn food_sparkle(at: Position) -> Effect {
    Effect {
        kind: EffectKind::Sparkle { inward: true },
        position: at,
        color: FOOD_COLOR,
        strength: 10.0,
        lifetime: 20,
    }
}

/// Pink confetti where two agents met.
#[must_use]
pub fn mate_confetti(at: Position) -> Effect {
    Effect {
        kind: EffectKind::Confetti,
        position: at,
        color: MATE_COLOR,
        strength: 16.0,
        lifetime: 28,
    }
}

/// Amber ring around the site, sized from the visiting agent.
#[must_use]
pub fn work_pulse(at: Position, agent_size: f64) -> Effect {
    Effect {
        kind: EffectKind::RingPulse,
        position: at,
        color: WORK_COLOR,
        strength: agent_size * 2.0 + 20.0,
        lifetime: 20,
    }
}

/// Wide violet ring when a site turns its work into food.
#[must_use]
pub fn production_pulse(at: Position, site_size: f64, max_utility: u32) -> Effect {
    Effect {
        kind: EffectKind::RingPulse,
        position: at,
        color: PRODUCTION_COLOR,
        strength: site_size * f64::from(max_utility) + 20.0,
        lifetime: 35,
    }
}
