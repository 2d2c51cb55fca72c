//! Error types for market data construction.

use thiserror::Error;

/// Volatility surface construction errors.
///
/// # Variants
/// - `NoQuotes`: The quote batch was empty
/// - `InvalidStrike`: A quote carried a non-positive strike
/// - `InvalidExpiry`: A quote carried a non-positive expiry
/// - `InvalidVolatility`: A quote carried a non-positive implied volatility
///
/// # Examples
/// ```
/// use quantix_core::market_data::SurfaceError;
///
/// let err = SurfaceError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("strike"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceError {
    /// No quotes were supplied.
    #[error("Cannot build a volatility surface from an empty quote set")]
    NoQuotes,

    /// A quote carried a non-positive strike.
    #[error("Invalid quote strike: K = {strike} (must be > 0)")]
    InvalidStrike {
        /// The invalid strike
        strike: f64,
    },

    /// A quote carried a non-positive expiry.
    #[error("Invalid quote expiry: T = {expiry} (must be > 0)")]
    InvalidExpiry {
        /// The invalid expiry
        expiry: f64,
    },

    /// A quote carried a non-positive implied volatility.
    #[error("Invalid quote volatility: σ = {volatility} (must be > 0)")]
    InvalidVolatility {
        /// The invalid implied volatility
        volatility: f64,
    },

    /// The reference spot price was non-positive.
    #[error("Invalid spot price: S = {spot} (must be > 0)")]
    InvalidSpot {
        /// The invalid spot price
        spot: f64,
    },
}
