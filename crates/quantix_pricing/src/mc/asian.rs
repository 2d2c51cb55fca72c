//! Arithmetic-average Asian option pricing via Monte Carlo simulation.
//!
//! Each simulated path advances the spot geometrically across the
//! monitoring grid with per-step drift `(r - q - σ²/2)·dt` and diffusion
//! `σ√dt`, accumulates the arithmetic average of the monitored prices, and
//! pays off against the strike. The discounted payoff averaged across
//! paths is the price estimate.
//!
//! This is a noisy estimator by construction. `simulations` and
//! `monitoring_points` are the precision/cost knobs — cost is
//! O(simulations × monitoring_points) — and the reported standard error
//! quantifies the remaining noise. Tests against this pricer must use
//! tolerance bands, not exact equality.

use quantix_core::types::OptionContract;

use super::error::McConfigError;
use crate::rng::NormalSampler;

/// Hard bound on the number of simulation paths.
pub const MAX_SIMULATIONS: usize = 10_000_000;

/// Hard bound on the number of monitoring points per path.
pub const MAX_MONITORING_POINTS: usize = 10_000;

/// Default number of simulation paths.
pub const DEFAULT_SIMULATIONS: usize = 10_000;

/// Default number of monitoring points (daily over one year).
pub const DEFAULT_MONITORING_POINTS: usize = 252;

/// Monte Carlo configuration for the Asian pricer.
///
/// # Examples
///
/// ```rust
/// use quantix_pricing::mc::AsianMonteCarloConfig;
///
/// let config = AsianMonteCarloConfig::new()
///     .with_simulations(50_000)
///     .with_monitoring_points(52)
///     .with_seed(42);
///
/// assert_eq!(config.simulations(), 50_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsianMonteCarloConfig {
    simulations: usize,
    monitoring_points: usize,
    seed: Option<u64>,
}

impl Default for AsianMonteCarloConfig {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            monitoring_points: DEFAULT_MONITORING_POINTS,
            seed: None,
        }
    }
}

impl AsianMonteCarloConfig {
    /// Creates a configuration with the defaults (10_000 paths, 252
    /// monitoring points, unseeded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of simulation paths.
    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulations = simulations;
        self
    }

    /// Sets the number of monitoring points per path.
    pub fn with_monitoring_points(mut self, monitoring_points: usize) -> Self {
        self.monitoring_points = monitoring_points;
        self
    }

    /// Sets the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn simulations(&self) -> usize {
        self.simulations
    }

    /// Returns the number of monitoring points per path.
    #[inline]
    pub fn monitoring_points(&self) -> usize {
        self.monitoring_points
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`McConfigError`] if either count is zero or beyond its
    /// hard bound.
    pub fn validate(&self) -> Result<(), McConfigError> {
        if self.simulations == 0 || self.simulations > MAX_SIMULATIONS {
            return Err(McConfigError::InvalidSimulationCount(self.simulations));
        }
        if self.monitoring_points == 0 || self.monitoring_points > MAX_MONITORING_POINTS {
            return Err(McConfigError::InvalidMonitoringPointCount(
                self.monitoring_points,
            ));
        }
        Ok(())
    }
}

/// Monte Carlo price estimate for an Asian option.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsianPricingResult {
    /// Discounted average-payoff estimate.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Paths simulated.
    pub simulations: usize,
    /// Monitoring points per path.
    pub monitoring_points: usize,
}

impl AsianPricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Arithmetic-average Asian option Monte Carlo pricer.
///
/// Each [`AsianMonteCarloPricer::price`] call runs on a fresh
/// [`NormalSampler`] built from the configured seed, so repeated calls
/// with the same configuration are reproducible.
///
/// # Examples
///
/// ```rust
/// use quantix_core::types::{OptionContract, OptionType};
/// use quantix_pricing::mc::{AsianMonteCarloConfig, AsianMonteCarloPricer};
///
/// let config = AsianMonteCarloConfig::new()
///     .with_simulations(5_000)
///     .with_monitoring_points(52)
///     .with_seed(42);
/// let pricer = AsianMonteCarloPricer::new(config).unwrap();
///
/// let contract =
///     OptionContract::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let result = pricer.price(&contract);
///
/// // Averaging dampens volatility: the Asian call is worth less than
/// // its European counterpart (≈ 10.45)
/// assert!(result.price > 0.0 && result.price < 10.45);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AsianMonteCarloPricer {
    config: AsianMonteCarloConfig,
}

impl AsianMonteCarloPricer {
    /// Creates a pricer with a validated configuration.
    ///
    /// # Errors
    /// Returns [`McConfigError`] if the configuration is invalid.
    pub fn new(config: AsianMonteCarloConfig) -> Result<Self, McConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &AsianMonteCarloConfig {
        &self.config
    }

    /// Prices an arithmetic-average Asian option.
    ///
    /// The average is taken over the monitored prices after the initial
    /// fixing; the starting spot itself is not averaged in. Domain
    /// validation happens at [`OptionContract`] construction, so this
    /// method is infallible.
    pub fn price(&self, contract: &OptionContract) -> AsianPricingResult {
        let simulations = self.config.simulations;
        let monitoring_points = self.config.monitoring_points;

        let dt = contract.expiry() / monitoring_points as f64;
        let sigma = contract.volatility();
        let drift = (contract.rate() - contract.dividend_yield() - 0.5 * sigma * sigma) * dt;
        let diffusion = sigma * dt.sqrt();
        let discount = (-contract.rate() * contract.expiry()).exp();

        let mut sampler = NormalSampler::from_seed(self.config.seed.unwrap_or(0));

        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..simulations {
            let mut path_spot = contract.spot();
            let mut running_total = 0.0;
            for _ in 0..monitoring_points {
                path_spot *= (drift + diffusion * sampler.next_standard_normal()).exp();
                running_total += path_spot;
            }
            let average = running_total / monitoring_points as f64;
            let discounted = discount
                * contract
                    .option_type()
                    .payoff(average, contract.strike());

            sum += discounted;
            sum_sq += discounted * discounted;
        }

        let price = sum / simulations as f64;
        let variance = (sum_sq / simulations as f64 - price * price).max(0.0);

        AsianPricingResult {
            price,
            std_error: (variance / simulations as f64).sqrt(),
            simulations,
            monitoring_points,
        }
    }
}
