//! Monte Carlo pricing.

pub mod asian;
pub mod error;

pub use asian::{AsianMonteCarloConfig, AsianMonteCarloPricer, AsianPricingResult};
pub use error::McConfigError;
