//! Newton-Raphson implied volatility solver.
//!
//! Calibrates the Black-Scholes model against one observed market price:
//! at each step the candidate volatility moves by
//! `(model price - market price) / vega`. Vega is the exact derivative of
//! the objective, so convergence is quadratic near the solution.
//!
//! The solver never returns a partially-converged guess: when the vega
//! collapses or the iteration budget runs out, the caller gets a
//! [`ConvergenceError`] carrying the diagnostics instead.

use thiserror::Error;

use quantix_core::types::{DomainError, OptionContract, OptionType};

use super::black_scholes::BlackScholes;

/// Starting volatility guess for the Newton iteration.
const INITIAL_GUESS: f64 = 0.20;

/// Lower clamp for the candidate volatility between iterations.
const MIN_VOL: f64 = 0.001;

/// Upper clamp for the candidate volatility between iterations.
const MAX_VOL: f64 = 5.0;

/// Vega magnitude below which the Newton step is abandoned.
const VEGA_FLOOR: f64 = 1e-10;

/// Implied volatility solver errors.
///
/// # Variants
/// - `Domain`: Invalid solver inputs (propagated contract validation)
/// - `VegaVanished`: Vega fell below the division-safety floor
/// - `MaxIterationsExceeded`: Iteration budget exhausted before tolerance
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvergenceError {
    /// Invalid input to the solver.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Vega became too small for a stable Newton step.
    #[error("Vega vanished at σ = {sigma} after {iterations} iterations")]
    VegaVanished {
        /// Candidate volatility when the step was abandoned
        sigma: f64,
        /// Iterations completed before abandoning
        iterations: u32,
    },

    /// The iteration budget ran out before reaching tolerance.
    #[error("Failed to converge after {iterations} iterations (price error {price_error:.3e})")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: u32,
        /// Final |model price - market price|
        price_error: f64,
    },
}

/// Result of a successful implied volatility solve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolResult {
    /// The calibrated volatility.
    pub implied_volatility: f64,
    /// Iterations consumed before convergence.
    pub iterations: u32,
    /// Final |model price - market price| (always below tolerance).
    pub price_accuracy: f64,
}

/// Newton-Raphson implied volatility solver.
///
/// # Examples
/// ```
/// use quantix_core::types::OptionType;
/// use quantix_models::analytical::{BlackScholes, ImpliedVolSolver};
///
/// // Price an option at a known vol, then recover that vol
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.35).unwrap();
/// let market_price = bs.price_call(110.0, 0.75);
///
/// let solver = ImpliedVolSolver::default();
/// let result = solver
///     .solve(OptionType::Call, market_price, 100.0, 110.0, 0.75, 0.05, 0.0)
///     .unwrap();
///
/// assert!((result.implied_volatility - 0.35).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImpliedVolSolver {
    tolerance: f64,
    max_iterations: u32,
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

impl ImpliedVolSolver {
    /// Creates a solver with the default tolerance (1e-4) and iteration
    /// budget (100).
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the price tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Overrides the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns the price tolerance.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration budget.
    #[inline]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Solves for the volatility that reprices to `market_price`.
    ///
    /// Newton-Raphson from σ₀ = 0.20, with the candidate clamped into
    /// `[0.001, 5.0]` after every step. The clamp stabilises the iteration
    /// for market prices near arbitrage bounds; it is not input validation
    /// (invalid *inputs* are rejected up front as `Domain` errors).
    ///
    /// # Arguments
    /// * `option_type` - Call or put
    /// * `market_price` - Observed option price to calibrate against
    /// * `spot`, `strike`, `expiry`, `rate`, `dividend_yield` - Contract inputs
    ///
    /// # Errors
    /// - [`ConvergenceError::Domain`] for out-of-domain contract inputs
    /// - [`ConvergenceError::VegaVanished`] when `|vega| < 1e-10`
    /// - [`ConvergenceError::MaxIterationsExceeded`] when the budget runs
    ///   out before `|price - market_price| < tolerance`
    #[allow(clippy::too_many_arguments)]
    pub fn solve(
        &self,
        option_type: OptionType,
        market_price: f64,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        dividend_yield: f64,
    ) -> Result<ImpliedVolResult, ConvergenceError> {
        // Validates every contract input once, up front.
        let contract = OptionContract::with_dividend_yield(
            option_type,
            spot,
            strike,
            expiry,
            rate,
            dividend_yield,
            INITIAL_GUESS,
        )?;

        let mut sigma = INITIAL_GUESS;

        for iteration in 0..self.max_iterations {
            let bs = BlackScholes::from_contract(&contract.with_volatility(sigma)?);
            let model_price = bs.price_by_type(option_type, strike, expiry);
            let diff = model_price - market_price;

            if diff.abs() < self.tolerance {
                return Ok(ImpliedVolResult {
                    implied_volatility: sigma,
                    iterations: iteration,
                    price_accuracy: diff.abs(),
                });
            }

            let vega = bs.vega(strike, expiry);
            if vega.abs() < VEGA_FLOOR {
                return Err(ConvergenceError::VegaVanished {
                    sigma,
                    iterations: iteration,
                });
            }

            sigma = (sigma - diff / vega).clamp(MIN_VOL, MAX_VOL);
        }

        let bs = BlackScholes::from_contract(&contract.with_volatility(sigma)?);
        let price_error = (bs.price_by_type(option_type, strike, expiry) - market_price).abs();

        Err(ConvergenceError::MaxIterationsExceeded {
            iterations: self.max_iterations,
            price_error,
        })
    }
}
