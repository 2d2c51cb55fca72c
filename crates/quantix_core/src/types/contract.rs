//! Option contract value types.
//!
//! This module provides the validated [`OptionContract`] shared by every
//! pricer in the engine, together with the [`OptionType`] tag.

use super::error::DomainError;

/// Option exercise payoff type.
///
/// A closed tagged variant: there is no string-typed option kind anywhere
/// in the engine, so invalid combinations are unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns true for a call option.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Payoff at a given spot level: `max(S - K, 0)` for calls,
    /// `max(K - S, 0)` for puts.
    #[inline]
    pub fn payoff(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// A European/American vanilla option contract with its market inputs.
///
/// All fields are validated at construction; pricers can therefore assume
/// `spot > 0`, `strike > 0`, `expiry > 0`, `volatility > 0` and
/// `dividend_yield >= 0` without re-checking. Contracts are immutable
/// value types.
///
/// # Examples
/// ```
/// use quantix_core::types::{OptionContract, OptionType};
///
/// let contract = OptionContract::new(
///     OptionType::Put, 95.0, 100.0, 0.5, 0.03, 0.25,
/// ).unwrap();
///
/// assert_eq!(contract.moneyness(), 0.95);
/// assert_eq!(contract.intrinsic_value(), 5.0);
/// assert_eq!(contract.dividend_yield(), 0.0);
///
/// // Expired contracts are rejected, not priced as NaN
/// assert!(OptionContract::new(OptionType::Call, 100.0, 100.0, 0.0, 0.05, 0.2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    dividend_yield: f64,
}

impl OptionContract {
    /// Creates a contract with no dividend yield.
    ///
    /// # Arguments
    /// * `option_type` - Call or put
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `rate` - Continuously compounded risk-free rate (may be negative)
    /// * `volatility` - Annualised volatility (must be positive)
    ///
    /// # Errors
    /// Returns [`DomainError`] if any bound above is violated.
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, DomainError> {
        Self::with_dividend_yield(option_type, spot, strike, expiry, rate, volatility, 0.0)
    }

    /// Creates a contract on a dividend-paying underlying.
    ///
    /// # Arguments
    /// * `dividend_yield` - Continuous dividend yield (must be non-negative)
    ///
    /// Other arguments and errors as for [`OptionContract::new`].
    pub fn with_dividend_yield(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> Result<Self, DomainError> {
        if !(spot > 0.0) {
            return Err(DomainError::NonPositiveSpot { spot });
        }
        if !(strike > 0.0) {
            return Err(DomainError::NonPositiveStrike { strike });
        }
        if !(expiry > 0.0) {
            return Err(DomainError::NonPositiveExpiry { expiry });
        }
        if !(volatility > 0.0) {
            return Err(DomainError::NonPositiveVolatility { volatility });
        }
        if !(dividend_yield >= 0.0) {
            return Err(DomainError::NegativeDividendYield { dividend_yield });
        }

        Ok(Self {
            option_type,
            spot,
            strike,
            expiry,
            rate,
            volatility,
            dividend_yield,
        })
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Spot/strike ratio.
    #[inline]
    pub fn moneyness(&self) -> f64 {
        self.spot / self.strike
    }

    /// Exercise value at the current spot.
    #[inline]
    pub fn intrinsic_value(&self) -> f64 {
        self.option_type.payoff(self.spot, self.strike)
    }

    /// Returns a copy of the contract with a different volatility.
    ///
    /// Used by the implied-volatility solver to revalue the same contract
    /// along the Newton iteration.
    ///
    /// # Errors
    /// Returns [`DomainError::NonPositiveVolatility`] if `volatility <= 0`.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, DomainError> {
        if !(volatility > 0.0) {
            return Err(DomainError::NonPositiveVolatility { volatility });
        }
        let mut copy = *self;
        copy.volatility = volatility;
        Ok(copy)
    }
}
