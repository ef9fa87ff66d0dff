use super::agent::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a food item is still up for grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodStatus {
    #[default]
    Fresh,
    /// Eaten this tick; removed by the next food sweep.
    Reached,
}

/// A food item. Eating it adds `utility` to the eater's hunger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: Uuid,
    pub position: Position,
    pub size: f64,
    pub utility: f64,
    pub status: FoodStatus,
}

impl Food {
    #[must_use]
    pub fn new(id: Uuid, position: Position, size: f64, utility: f64) -> Self {
        Self {
            id,
            position,
            size,
            utility,
            status: FoodStatus::Fresh,
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == FoodStatus::Fresh
    }
}

/// A work site. Agent visits accumulate in `work_done`; every full quota
/// turns into new food and costs the site one unit of utility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: Uuid,
    pub position: Position,
    pub size: f64,
    pub utility: u32,
    pub work_done: u32,
}

impl Site {
    #[must_use]
    pub fn new(id: Uuid, position: Position, size: f64, utility: u32) -> Self {
        Self {
            id,
            position,
            size,
            utility,
            work_done: 0,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.utility == 0
    }
}
