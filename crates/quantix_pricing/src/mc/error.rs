//! Monte Carlo configuration errors.

use thiserror::Error;

/// Invalid Monte Carlo simulation parameters.
///
/// Estimator *imprecision* is never an error — variance is controlled
/// entirely by the caller's `simulations`/`monitoring_points` knobs. Only
/// parameters that make the simulation meaningless (zero counts) or
/// runaway (beyond the hard bounds) are rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum McConfigError {
    /// Simulation count is zero or beyond the hard bound.
    #[error("Invalid simulation count: {0}")]
    InvalidSimulationCount(usize),

    /// Monitoring point count is zero or beyond the hard bound.
    #[error("Invalid monitoring point count: {0}")]
    InvalidMonitoringPointCount(usize),
}
