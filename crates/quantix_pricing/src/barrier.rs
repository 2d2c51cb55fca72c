//! Single-barrier option pricing via the reflection principle.
//!
//! A knock-out option is priced as the vanilla price minus a reflection
//! adjustment: the vanilla revalued at the reflected spot `H²/S`, scaled
//! by `(H/S)^(2λ)` with `λ = (r - q + σ²/2)/σ²`. Knock-in prices follow
//! from in-out parity: **Knock-In + Knock-Out = Vanilla**.
//!
//! The formula assumes a continuously monitored single flat barrier;
//! discretely monitored barriers are out of scope.
//!
//! # Barrier side and the spot
//!
//! Whether `H` sits on the "correct" side of the spot for the requested
//! barrier type is deliberately not validated. A down-and-out with
//! `H >= S` is treated as already knocked out and pays the discounted
//! rebate; callers own the semantic check if they want to reject such
//! requests instead.

use quantix_core::types::{DomainError, OptionContract};
use quantix_models::analytical::BlackScholes;

/// Side of the spot the barrier sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierDirection {
    /// Barrier above the current spot price.
    Up,
    /// Barrier below the current spot price.
    Down,
}

/// What crossing the barrier does to the option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierStyle {
    /// Option activates when the barrier is hit.
    In,
    /// Option dies when the barrier is hit.
    Out,
}

/// Complete barrier specification.
///
/// A closed pair of tagged variants: every combination is a meaningful
/// barrier type, and nothing else is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierSpec {
    /// Direction of the barrier relative to spot.
    pub direction: BarrierDirection,
    /// Knock style.
    pub style: BarrierStyle,
}

impl BarrierSpec {
    /// Creates a barrier specification.
    pub fn new(direction: BarrierDirection, style: BarrierStyle) -> Self {
        Self { direction, style }
    }

    /// Down-and-out barrier.
    pub fn down_out() -> Self {
        Self::new(BarrierDirection::Down, BarrierStyle::Out)
    }

    /// Down-and-in barrier.
    pub fn down_in() -> Self {
        Self::new(BarrierDirection::Down, BarrierStyle::In)
    }

    /// Up-and-out barrier.
    pub fn up_out() -> Self {
        Self::new(BarrierDirection::Up, BarrierStyle::Out)
    }

    /// Up-and-in barrier.
    pub fn up_in() -> Self {
        Self::new(BarrierDirection::Up, BarrierStyle::In)
    }
}

/// Result from barrier option pricing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierResult {
    /// Barrier option price.
    pub price: f64,
    /// Vanilla price of the same contract, for reference.
    pub vanilla_price: f64,
    /// The λ reflection exponent actually used.
    pub lambda: f64,
    /// Whether the spot had already breached the barrier at valuation.
    pub knocked: bool,
}

/// Prices a single-barrier option.
///
/// For knock-outs with the barrier already breached (down: `S <= H`,
/// up: `S >= H`) the price is the discounted rebate. Otherwise the
/// reflection adjustment is subtracted from the vanilla price and the
/// result floored at zero. Knock-ins are `vanilla - knock_out` with the
/// rebate stripped, so an already-breached knock-in prices as vanilla.
/// Rebates on knock-in options are not modelled.
///
/// # Arguments
/// * `contract` - The underlying vanilla contract
/// * `spec` - Barrier direction and style
/// * `barrier` - Barrier level H (must be positive)
/// * `rebate` - Paid (discounted) when a knock-out is already breached
///
/// # Errors
/// Returns [`DomainError::NonPositiveBarrier`] if `barrier <= 0`.
///
/// # Examples
/// ```
/// use quantix_core::types::{OptionContract, OptionType};
/// use quantix_pricing::barrier::{barrier_option, BarrierSpec};
///
/// let call = OptionContract::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
///
/// // A barrier far below spot almost never knocks out, so the price
/// // converges to the vanilla price
/// let result = barrier_option(&call, BarrierSpec::down_out(), 1.0, 0.0).unwrap();
/// assert!((result.price - result.vanilla_price).abs() < 1e-6);
/// ```
pub fn barrier_option(
    contract: &OptionContract,
    spec: BarrierSpec,
    barrier: f64,
    rebate: f64,
) -> Result<BarrierResult, DomainError> {
    if !(barrier > 0.0) {
        return Err(DomainError::NonPositiveBarrier { barrier });
    }

    let result = match spec.style {
        BarrierStyle::Out => knock_out(contract, spec.direction, barrier, rebate),
        BarrierStyle::In => {
            // In-out parity with the rebate stripped:
            // knock_in = vanilla - knock_out(rebate = 0)
            let out = knock_out(contract, spec.direction, barrier, 0.0);
            BarrierResult {
                price: (out.vanilla_price - out.price).max(0.0),
                ..out
            }
        }
    };

    Ok(result)
}

fn knock_out(
    contract: &OptionContract,
    direction: BarrierDirection,
    barrier: f64,
    rebate: f64,
) -> BarrierResult {
    let bs = BlackScholes::from_contract(contract);
    let strike = contract.strike();
    let expiry = contract.expiry();
    let spot = contract.spot();
    let sigma = contract.volatility();

    let vanilla_price = bs.price_by_type(contract.option_type(), strike, expiry);

    let vol_sq = sigma * sigma;
    let lambda = (contract.rate() - contract.dividend_yield() + 0.5 * vol_sq) / vol_sq;

    let breached = match direction {
        BarrierDirection::Down => spot <= barrier,
        BarrierDirection::Up => spot >= barrier,
    };

    if breached {
        return BarrierResult {
            price: rebate * (-contract.rate() * expiry).exp(),
            vanilla_price,
            lambda,
            knocked: true,
        };
    }

    // Reflected vanilla at H²/S, scaled by (H/S)^(2λ). The reflected spot
    // is positive whenever the inputs are, so the kernel rebuild cannot
    // fail on a validated contract.
    let reflected_spot = barrier * barrier / spot;
    let reflected = BlackScholes::new(
        reflected_spot,
        contract.rate(),
        contract.dividend_yield(),
        sigma,
    )
    .expect("reflected spot of a validated contract is positive");

    let adjustment = (barrier / spot).powf(2.0 * lambda)
        * reflected.price_by_type(contract.option_type(), strike, expiry);

    BarrierResult {
        price: (vanilla_price - adjustment).max(0.0),
        vanilla_price,
        lambda,
        knocked: false,
    }
}
