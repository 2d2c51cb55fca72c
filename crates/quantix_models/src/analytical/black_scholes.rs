//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model with continuous dividend
//! yield for pricing European call and put options, together with the
//! analytical sensitivities the Greeks layer builds on.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;

use quantix_core::math::distributions::{norm_cdf, norm_pdf};
use quantix_core::types::{DomainError, OptionContract, OptionType};

/// Black-Scholes kernel for European option pricing.
///
/// Holds the market inputs (spot, rate, dividend yield, volatility);
/// strike and expiry are supplied per query so one kernel can sweep a
/// whole strike/expiry grid. All methods assume `expiry > 0` — every
/// caller in the engine validates expiry upstream (either through
/// [`OptionContract`] or its own parameter checks).
///
/// Greek methods return *unscaled* sensitivities (per unit of the input);
/// the per-1% and per-day conventions live in the
/// [`greeks`](crate::analytical::greeks) layer.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use quantix_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Continuous dividend yield (q)
    dividend_yield: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes kernel.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised; may be negative)
    /// * `dividend_yield` - Continuous dividend yield (must be non-negative)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - [`DomainError::NonPositiveSpot`] if `spot <= 0`
    /// - [`DomainError::NonPositiveVolatility`] if `volatility <= 0`
    /// - [`DomainError::NegativeDividendYield`] if `dividend_yield < 0`
    pub fn new(spot: T, rate: T, dividend_yield: T, volatility: T) -> Result<Self, DomainError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(DomainError::NonPositiveSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if volatility <= zero {
            return Err(DomainError::NonPositiveVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        if dividend_yield < zero {
            return Err(DomainError::NegativeDividendYield {
                dividend_yield: dividend_yield.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate - self.dividend_yield + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Discount factor e^(-rT).
    #[inline]
    fn discount(&self, expiry: T) -> T {
        (-self.rate * expiry).exp()
    }

    /// Dividend carry factor e^(-qT).
    #[inline]
    fn carry(&self, expiry: T) -> T {
        (-self.dividend_yield * expiry).exp()
    }

    /// European call price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        self.spot * self.carry(expiry) * norm_cdf(d1)
            - strike * self.discount(expiry) * norm_cdf(d2)
    }

    /// European put price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        strike * self.discount(expiry) * norm_cdf(-d2)
            - self.spot * self.carry(expiry) * norm_cdf(-d1)
    }

    /// Price for the given payoff type.
    #[inline]
    pub fn price_by_type(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Delta (∂V/∂S).
    ///
    /// - Call: e^(-qT)·N(d₁)
    /// - Put: e^(-qT)·(N(d₁) - 1), always non-positive
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, is_call: bool) -> T {
        let n_d1 = norm_cdf(self.d1(strike, expiry));
        let carry = self.carry(expiry);

        if is_call {
            carry * n_d1
        } else {
            carry * (n_d1 - T::one())
        }
    }

    /// Gamma (∂²V/∂S²), identical for calls and puts, always non-negative.
    ///
    /// Gamma = e^(-qT)·φ(d₁) / (S·σ·√T)
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);

        self.carry(expiry) * norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Vega (∂V/∂σ), identical for calls and puts, always non-negative.
    ///
    /// Vega = S·e^(-qT)·φ(d₁)·√T (per unit of volatility, not per 1%)
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);

        self.spot * self.carry(expiry) * norm_pdf(d1) * expiry.sqrt()
    }

    /// Theta (∂V/∂t, per year).
    ///
    /// Three terms: the time-decay term common to calls and puts, the
    /// interest term (sign flipped for puts via N(-d₂)) and the dividend
    /// term (sign flipped via N(-d₁)).
    #[inline]
    pub fn theta(&self, strike: T, expiry: T, is_call: bool) -> T {
        let two = T::from(2.0).unwrap();
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let discount = self.discount(expiry);
        let carry = self.carry(expiry);

        let decay = -(self.spot * carry * norm_pdf(d1) * self.volatility) / (two * sqrt_t);

        if is_call {
            decay - self.rate * strike * discount * norm_cdf(d2)
                + self.dividend_yield * self.spot * carry * norm_cdf(d1)
        } else {
            decay + self.rate * strike * discount * norm_cdf(-d2)
                - self.dividend_yield * self.spot * carry * norm_cdf(-d1)
        }
    }

    /// Rho (∂V/∂r, per unit of rate).
    ///
    /// - Call: K·T·e^(-rT)·N(d₂)
    /// - Put: -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: T, expiry: T, is_call: bool) -> T {
        let d2 = self.d2(strike, expiry);
        let discounted_strike = strike * expiry * self.discount(expiry);

        if is_call {
            discounted_strike * norm_cdf(d2)
        } else {
            -discounted_strike * norm_cdf(-d2)
        }
    }

    /// Charm (∂Δ/∂t, delta decay per year).
    #[inline]
    pub fn charm(&self, strike: T, expiry: T, is_call: bool) -> T {
        let two = T::from(2.0).unwrap();
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let carry = self.carry(expiry);
        let q = self.dividend_yield;

        let drift_term = carry
            * norm_pdf(d1)
            * (two * (self.rate - q) * expiry - d2 * self.volatility * sqrt_t)
            / (two * expiry * self.volatility * sqrt_t);

        if is_call {
            q * carry * norm_cdf(d1) - drift_term
        } else {
            -q * carry * norm_cdf(-d1) - drift_term
        }
    }

    /// Vanna (∂²V/∂S∂σ = ∂Δ/∂σ), identical for calls and puts.
    ///
    /// Vanna = -e^(-qT)·φ(d₁)·d₂ / σ
    #[inline]
    pub fn vanna(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        -self.carry(expiry) * norm_pdf(d1) * d2 / self.volatility
    }

    /// Volga (∂²V/∂σ², volatility convexity), identical for calls and puts.
    ///
    /// Volga = Vega·d₁·d₂ / σ
    #[inline]
    pub fn volga(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        self.vega(strike, expiry) * d1 * d2 / self.volatility
    }
}

impl BlackScholes<f64> {
    /// Builds a kernel from a validated contract.
    #[inline]
    pub fn from_contract(contract: &OptionContract) -> Self {
        // Contract validation is a superset of kernel validation.
        Self {
            spot: contract.spot(),
            rate: contract.rate(),
            dividend_yield: contract.dividend_yield(),
            volatility: contract.volatility(),
        }
    }
}

/// Full European pricing result for a contract.
///
/// `time_value = price - intrinsic_value` always holds;
/// `moneyness = spot / strike`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Theoretical option price.
    pub price: f64,
    /// Exercise value at the current spot.
    pub intrinsic_value: f64,
    /// Price minus intrinsic value.
    pub time_value: f64,
    /// Spot/strike ratio.
    pub moneyness: f64,
    /// The d₁ term of the pricing formula.
    pub d1: f64,
    /// The d₂ term of the pricing formula.
    pub d2: f64,
}

/// Prices a European contract under Black-Scholes.
///
/// Domain validation happens when the [`OptionContract`] is constructed,
/// so this function is infallible: a contract in hand is always priceable.
///
/// # Examples
/// ```
/// use quantix_core::types::{OptionContract, OptionType};
/// use quantix_models::analytical::price;
///
/// let contract =
///     OptionContract::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let result = price(&contract);
///
/// // Standard reference value for the ATM scenario
/// assert!((result.price - 10.4506).abs() < 1e-3);
/// assert!((result.time_value - result.price).abs() < 1e-12);
/// ```
pub fn price(contract: &OptionContract) -> PricingResult {
    let bs = BlackScholes::from_contract(contract);
    let strike = contract.strike();
    let expiry = contract.expiry();

    let value = bs.price_by_type(contract.option_type(), strike, expiry);
    let intrinsic = contract.intrinsic_value();

    PricingResult {
        price: value,
        intrinsic_value: intrinsic,
        time_value: value - intrinsic,
        moneyness: contract.moneyness(),
        d1: bs.d1(strike, expiry),
        d2: bs.d2(strike, expiry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn atm_kernel() -> BlackScholes<f64> {
        BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.02, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.dividend_yield(), 0.02);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        let result = BlackScholes::new(-100.0_f64, 0.05, 0.0, 0.2);
        assert!(matches!(
            result.unwrap_err(),
            DomainError::NonPositiveSpot { spot } if spot == -100.0
        ));
    }

    #[test]
    fn test_new_invalid_volatility() {
        for vol in [0.0, -0.2] {
            let result = BlackScholes::new(100.0_f64, 0.05, 0.0, vol);
            assert!(matches!(
                result.unwrap_err(),
                DomainError::NonPositiveVolatility { .. }
            ));
        }
    }

    #[test]
    fn test_new_negative_dividend_yield() {
        let result = BlackScholes::new(100.0_f64, 0.05, -0.01, 0.2);
        assert!(matches!(
            result.unwrap_err(),
            DomainError::NegativeDividendYield { .. }
        ));
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, -0.02, 0.0, 0.2).is_ok());
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r = q = 0: d1 = σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.1, epsilon = 1e-10);
        assert_relative_eq!(bs.d2(100.0, 1.0), -0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = atm_kernel();
        let d1 = bs.d1(105.0, 0.5);
        let d2 = bs.d2(105.0, 0.5);
        assert_relative_eq!(d2, d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_d1_dividend_yield_shifts_drift() {
        // Positive q lowers the drift, so d1 falls
        let no_div = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
        let with_div = BlackScholes::new(100.0_f64, 0.05, 0.03, 0.2).unwrap();
        assert!(with_div.d1(100.0, 1.0) < no_div.d1(100.0, 1.0));
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1
        let bs = atm_kernel();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_put_price_reference_value() {
        let bs = atm_kernel();
        assert_relative_eq!(bs.price_put(100.0, 1.0), 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_dividend_yield_lowers_call_raises_put() {
        let no_div = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
        let with_div = BlackScholes::new(100.0_f64, 0.05, 0.03, 0.2).unwrap();
        assert!(with_div.price_call(100.0, 1.0) < no_div.price_call(100.0, 1.0));
        assert!(with_div.price_put(100.0, 1.0) > no_div.price_put(100.0, 1.0));
    }

    #[test]
    fn test_deep_itm_call_approaches_forward() {
        let bs = BlackScholes::new(200.0_f64, 0.05, 0.0, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0);
        let forward_intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price >= forward_intrinsic - 0.01);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.0, 0.2).unwrap();
        assert!(bs.price_call(100.0, 1.0) < 0.01);
    }

    #[test]
    fn test_put_call_parity_with_dividends() {
        // C - P = S·e^(-qT) - K·e^(-rT)
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.03, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            for expiry in [0.25, 1.0, 2.0] {
                let call = bs.price_call(strike, expiry);
                let put = bs.price_put(strike, expiry);
                let forward = 100.0 * (-0.03 * expiry).exp() - strike * (-0.05 * expiry).exp();
                assert_relative_eq!(call - put, forward, epsilon = 1e-6);
            }
        }
    }

    // ==========================================================
    // Greeks Tests (bounds and signs)
    // ==========================================================

    #[test]
    fn test_delta_bounds() {
        let bs = atm_kernel();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call_delta = bs.delta(strike, 1.0, true);
            let put_delta = bs.delta(strike, 1.0, false);
            assert!((0.0..=1.0).contains(&call_delta));
            assert!((-1.0..=0.0).contains(&put_delta));
            assert_relative_eq!(put_delta, call_delta - 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_gamma_vega_non_negative() {
        let bs = atm_kernel();
        for strike in [80.0, 100.0, 120.0] {
            assert!(bs.gamma(strike, 1.0) >= 0.0);
            assert!(bs.vega(strike, 1.0) >= 0.0);
        }
    }

    #[test]
    fn test_theta_atm_negative() {
        let bs = atm_kernel();
        assert!(bs.theta(100.0, 1.0, true) < 0.0);
        assert!(bs.theta(100.0, 1.0, false) < 0.0);
    }

    #[test]
    fn test_rho_signs() {
        let bs = atm_kernel();
        assert!(bs.rho(100.0, 1.0, true) > 0.0);
        assert!(bs.rho(100.0, 1.0, false) < 0.0);
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    #[test]
    fn test_delta_vs_finite_diff() {
        let bs = atm_kernel();
        let h = 0.01;
        let up = BlackScholes::new(100.0 + h, 0.05, 0.0, 0.2).unwrap();
        let dn = BlackScholes::new(100.0 - h, 0.05, 0.0, 0.2).unwrap();

        let fd = (up.price_call(100.0, 1.0) - dn.price_call(100.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(bs.delta(100.0, 1.0, true), fd, epsilon = 1e-4);
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let bs = atm_kernel();
        let h = 0.01;
        let up = BlackScholes::new(100.0 + h, 0.05, 0.0, 0.2).unwrap();
        let dn = BlackScholes::new(100.0 - h, 0.05, 0.0, 0.2).unwrap();

        let fd = (up.price_call(100.0, 1.0) - 2.0 * bs.price_call(100.0, 1.0)
            + dn.price_call(100.0, 1.0))
            / (h * h);
        assert_relative_eq!(bs.gamma(100.0, 1.0), fd, epsilon = 1e-3);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let bs = atm_kernel();
        let h = 1e-4;
        let up = BlackScholes::new(100.0, 0.05, 0.0, 0.2 + h).unwrap();
        let dn = BlackScholes::new(100.0, 0.05, 0.0, 0.2 - h).unwrap();

        let fd = (up.price_call(100.0, 1.0) - dn.price_call(100.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(bs.vega(100.0, 1.0), fd, epsilon = 1e-3);
    }

    #[test]
    fn test_theta_vs_finite_diff() {
        // Theta is -∂V/∂T (value decays as calendar time passes)
        let bs = atm_kernel();
        let h = 1e-5;
        let fd = -(bs.price_call(100.0, 1.0 + h) - bs.price_call(100.0, 1.0 - h)) / (2.0 * h);
        assert_relative_eq!(bs.theta(100.0, 1.0, true), fd, epsilon = 1e-4);
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let bs = atm_kernel();
        let h = 1e-5;
        let up = BlackScholes::new(100.0, 0.05 + h, 0.0, 0.2).unwrap();
        let dn = BlackScholes::new(100.0, 0.05 - h, 0.0, 0.2).unwrap();

        let fd = (up.price_call(100.0, 1.0) - dn.price_call(100.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(bs.rho(100.0, 1.0, true), fd, epsilon = 1e-4);
    }

    #[test]
    fn test_charm_vs_finite_diff() {
        // Charm is ∂Δ/∂t = -∂Δ/∂T
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.02, 0.2).unwrap();
        let h = 1e-5;
        for is_call in [true, false] {
            let fd = -(bs.delta(100.0, 1.0 + h, is_call) - bs.delta(100.0, 1.0 - h, is_call))
                / (2.0 * h);
            assert_relative_eq!(bs.charm(100.0, 1.0, is_call), fd, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_vanna_vs_finite_diff() {
        // Vanna is ∂Δ/∂σ
        let bs = atm_kernel();
        let h = 1e-5;
        let up = BlackScholes::new(100.0, 0.05, 0.0, 0.2 + h).unwrap();
        let dn = BlackScholes::new(100.0, 0.05, 0.0, 0.2 - h).unwrap();

        let fd = (up.delta(110.0, 1.0, true) - dn.delta(110.0, 1.0, true)) / (2.0 * h);
        assert_relative_eq!(bs.vanna(110.0, 1.0), fd, epsilon = 1e-4);
    }

    #[test]
    fn test_volga_vs_finite_diff() {
        // Volga is ∂Vega/∂σ
        let bs = atm_kernel();
        let h = 1e-5;
        let up = BlackScholes::new(100.0, 0.05, 0.0, 0.2 + h).unwrap();
        let dn = BlackScholes::new(100.0, 0.05, 0.0, 0.2 - h).unwrap();

        let fd = (up.vega(110.0, 1.0) - dn.vega(110.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(bs.volga(110.0, 1.0), fd, epsilon = 1e-3);
    }

    // ==========================================================
    // Contract-Level Pricing Tests
    // ==========================================================

    #[test]
    fn test_price_decomposition() {
        let contract =
            OptionContract::new(OptionType::Call, 110.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let result = price(&contract);

        assert_eq!(result.intrinsic_value, 10.0);
        assert_relative_eq!(
            result.time_value,
            result.price - result.intrinsic_value,
            epsilon = 1e-12
        );
        assert_relative_eq!(result.moneyness, 1.1, epsilon = 1e-12);
        assert_relative_eq!(
            result.d2,
            result.d1 - 0.2,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_price_put_contract() {
        let contract = OptionContract::new(OptionType::Put, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let result = price(&contract);
        assert_relative_eq!(result.price, 5.5735, epsilon = 1e-3);
        assert_eq!(result.intrinsic_value, 0.0);
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05, 0.0, 0.2).unwrap();
        assert!(bs.price_call(100.0_f32, 1.0_f32) > 0.0);
    }

    // ==========================================================
    // Property Tests
    // ==========================================================

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 10.0_f64..500.0,
            strike in 10.0_f64..500.0,
            expiry in 0.05_f64..5.0,
            rate in -0.02_f64..0.10,
            vol in 0.05_f64..1.0,
        ) {
            let bs = BlackScholes::new(spot, rate, 0.0, vol).unwrap();
            let call = bs.price_call(strike, expiry);
            let put = bs.price_put(strike, expiry);
            let forward = spot - strike * (-rate * expiry).exp();
            prop_assert!((call - put - forward).abs() < 1e-6 * spot.max(strike));
        }

        #[test]
        fn prop_call_price_monotone_in_spot(
            strike in 50.0_f64..150.0,
            expiry in 0.1_f64..3.0,
            vol in 0.05_f64..0.8,
        ) {
            let lo = BlackScholes::new(90.0, 0.03, 0.0, vol).unwrap();
            let hi = BlackScholes::new(95.0, 0.03, 0.0, vol).unwrap();
            prop_assert!(hi.price_call(strike, expiry) >= lo.price_call(strike, expiry));
        }

        #[test]
        fn prop_call_price_monotone_in_strike(
            spot in 50.0_f64..150.0,
            expiry in 0.1_f64..3.0,
            vol in 0.05_f64..0.8,
            strike in 50.0_f64..140.0,
        ) {
            let bs = BlackScholes::new(spot, 0.03, 0.0, vol).unwrap();
            // Call non-increasing in strike, put non-decreasing
            prop_assert!(bs.price_call(strike + 5.0, expiry) <= bs.price_call(strike, expiry));
            prop_assert!(bs.price_put(strike + 5.0, expiry) >= bs.price_put(strike, expiry));
        }
    }
}
