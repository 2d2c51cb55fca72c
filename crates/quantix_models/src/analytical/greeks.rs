//! Risk sensitivities with the engine's scaling conventions.
//!
//! The scaling is a consumer contract, not a presentation choice:
//!
//! - `vega` and `rho` are quoted per 1% move in the input (raw
//!   sensitivity divided by 100);
//! - `theta` is quoted per calendar day (raw sensitivity divided by 365);
//! - `delta`, `gamma`, `lambda`, `charm`, `vanna`, `volga` are unscaled.

use quantix_core::types::OptionContract;

use super::black_scholes::{price, BlackScholes};

/// Days used to convert annual theta into daily decay.
const DAYS_PER_YEAR: f64 = 365.0;

/// Divisor converting a per-unit sensitivity into a per-1% one.
const PERCENT: f64 = 100.0;

/// Full set of first- and second-order sensitivities for one contract.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S. In [0, 1] for calls, [-1, 0] for puts.
    pub delta: f64,
    /// ∂²V/∂S². Identical for calls and puts, non-negative.
    pub gamma: f64,
    /// ∂V/∂t per calendar day (divided by 365).
    pub theta: f64,
    /// ∂V/∂σ per 1% volatility move (divided by 100).
    pub vega: f64,
    /// ∂V/∂r per 1% rate move (divided by 100).
    pub rho: f64,
    /// Leverage: delta · S / V.
    pub lambda: f64,
    /// ∂Δ/∂t (delta decay, per year).
    pub charm: f64,
    /// ∂Δ/∂σ (per unit of volatility).
    pub vanna: f64,
    /// ∂Vega/∂σ (per unit of volatility).
    pub volga: f64,
}

impl Greeks {
    /// Scales every sensitivity by a signed position quantity.
    ///
    /// Greeks are local linear sensitivities, so position-level Greeks are
    /// the contract Greeks times the signed quantity.
    #[inline]
    pub fn scaled(&self, quantity: f64) -> Greeks {
        Greeks {
            delta: self.delta * quantity,
            gamma: self.gamma * quantity,
            theta: self.theta * quantity,
            vega: self.vega * quantity,
            rho: self.rho * quantity,
            lambda: self.lambda * quantity,
            charm: self.charm * quantity,
            vanna: self.vanna * quantity,
            volga: self.volga * quantity,
        }
    }

    /// Componentwise accumulation, used by the portfolio aggregator.
    #[inline]
    pub fn accumulate(&mut self, other: &Greeks) {
        self.delta += other.delta;
        self.gamma += other.gamma;
        self.theta += other.theta;
        self.vega += other.vega;
        self.rho += other.rho;
        self.lambda += other.lambda;
        self.charm += other.charm;
        self.vanna += other.vanna;
        self.volga += other.volga;
    }
}

/// Computes the full Greeks bundle for a contract.
///
/// Domain validation happens at [`OptionContract`] construction, so this
/// function is infallible.
///
/// # Examples
/// ```
/// use quantix_core::types::{OptionContract, OptionType};
/// use quantix_models::analytical::greeks;
///
/// let contract =
///     OptionContract::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let g = greeks(&contract);
///
/// assert!((g.delta - 0.6368).abs() < 1e-3);
/// assert!(g.gamma > 0.0);
/// assert!(g.theta < 0.0); // daily decay
/// ```
pub fn greeks(contract: &OptionContract) -> Greeks {
    let bs = BlackScholes::from_contract(contract);
    let strike = contract.strike();
    let expiry = contract.expiry();
    let is_call = contract.option_type().is_call();

    let delta = bs.delta(strike, expiry, is_call);
    let value = price(contract).price;

    Greeks {
        delta,
        gamma: bs.gamma(strike, expiry),
        theta: bs.theta(strike, expiry, is_call) / DAYS_PER_YEAR,
        vega: bs.vega(strike, expiry) / PERCENT,
        rho: bs.rho(strike, expiry, is_call) / PERCENT,
        lambda: delta * contract.spot() / value,
        charm: bs.charm(strike, expiry, is_call),
        vanna: bs.vanna(strike, expiry),
        volga: bs.volga(strike, expiry),
    }
}
