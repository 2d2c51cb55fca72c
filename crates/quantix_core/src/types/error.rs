//! Error types for domain validation.
//!
//! This module provides:
//! - `DomainError`: Invalid inputs to closed-form pricing formulas

use thiserror::Error;

/// Invalid input to a closed-form pricing formula.
///
/// Every pricer validates its inputs before any computation and raises
/// a `DomainError` instead of producing NaN. Inputs are never silently
/// clamped; the only clamping in the engine is inside the implied
/// volatility iteration, which is numerical stabilisation of an
/// intermediate guess, not acceptance of an invalid input.
///
/// # Variants
/// - `NonPositiveSpot`: Spot price must be strictly positive
/// - `NonPositiveStrike`: Strike price must be strictly positive
/// - `NonPositiveExpiry`: Time to expiry must be strictly positive
/// - `NonPositiveVolatility`: Volatility must be strictly positive
/// - `NegativeDividendYield`: Dividend yield must be non-negative
/// - `NonPositiveBarrier`: Barrier level must be strictly positive
/// - `InvalidSteps`: Lattice step count must be at least 1
///
/// # Examples
/// ```
/// use quantix_core::types::DomainError;
///
/// let err = DomainError::NonPositiveVolatility { volatility: -0.2 };
/// assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2 (must be > 0)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// Spot price is zero or negative.
    #[error("Invalid spot price: S = {spot} (must be > 0)")]
    NonPositiveSpot {
        /// The invalid spot price
        spot: f64,
    },

    /// Strike price is zero or negative.
    #[error("Invalid strike price: K = {strike} (must be > 0)")]
    NonPositiveStrike {
        /// The invalid strike price
        strike: f64,
    },

    /// Time to expiry is zero or negative.
    #[error("Invalid time to expiry: T = {expiry} (must be > 0)")]
    NonPositiveExpiry {
        /// The invalid expiry in years
        expiry: f64,
    },

    /// Volatility is zero or negative.
    #[error("Invalid volatility: σ = {volatility} (must be > 0)")]
    NonPositiveVolatility {
        /// The invalid volatility
        volatility: f64,
    },

    /// Dividend yield is negative.
    #[error("Invalid dividend yield: q = {dividend_yield} (must be >= 0)")]
    NegativeDividendYield {
        /// The invalid dividend yield
        dividend_yield: f64,
    },

    /// Barrier level is zero or negative.
    #[error("Invalid barrier level: H = {barrier} (must be > 0)")]
    NonPositiveBarrier {
        /// The invalid barrier level
        barrier: f64,
    },

    /// Lattice step count is zero.
    #[error("Invalid step count: {steps} (must be >= 1)")]
    InvalidSteps {
        /// The invalid step count
        steps: u32,
    },
}
