//! Error types for exogenous input to the simulation.
//!
//! In-tick conditions (vanished destinations, empty target collections,
//! zero-length vectors) are not errors and never surface here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A spawn request carried a NaN or infinite coordinate.
    #[error("Non-finite spawn coordinate: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Result type alias for simulation input operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Checks a spawn coordinate.
    pub fn check_coordinate(x: f64, y: f64) -> Result<()> {
        if x.is_finite() && y.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFiniteCoordinate { x, y })
        }
    }
}
