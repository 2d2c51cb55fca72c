//! Portfolio-level Greeks aggregation.

use quantix_core::types::OptionContract;
use quantix_models::analytical::{greeks, price, Greeks};

/// A signed holding of one option contract.
///
/// Positive quantity is long, negative is short.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// The contract held.
    pub contract: OptionContract,
    /// Signed number of contracts.
    pub quantity: f64,
}

impl Position {
    /// Creates a position.
    pub fn new(contract: OptionContract, quantity: f64) -> Self {
        Self { contract, quantity }
    }
}

/// Per-position pricing and risk, already scaled by quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRisk {
    /// The contract held.
    pub contract: OptionContract,
    /// Unit price of the contract.
    pub price: f64,
    /// `price * quantity`.
    pub position_value: f64,
    /// Contract Greeks scaled by the signed quantity.
    pub greeks: Greeks,
}

/// Derived portfolio hedge metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskMetrics {
    /// Underlying quantity that flattens the portfolio delta
    /// (`-total delta`).
    pub delta_hedge_ratio: f64,
    /// Total portfolio gamma.
    pub gamma_exposure: f64,
    /// Total portfolio vega (per 1% vol move).
    pub vega_exposure: f64,
    /// Total portfolio theta (per calendar day).
    pub daily_theta_decay: f64,
}

/// Aggregated portfolio risk report.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioRiskReport {
    /// Per-position breakdown, in input order.
    pub positions: Vec<PositionRisk>,
    /// Sum of position values.
    pub total_value: f64,
    /// Componentwise sum of the scaled position Greeks.
    pub totals: Greeks,
    /// Derived hedge metrics.
    pub risk_metrics: RiskMetrics,
}

/// Prices every position and folds the scaled Greeks into portfolio totals.
///
/// Each position is priced independently; every Greek and the unit price
/// is multiplied by the signed quantity and accumulated. An empty
/// portfolio yields an empty report with zero totals. Contracts are
/// validated at construction, so aggregation is infallible.
///
/// # Examples
/// ```
/// use quantix_core::types::{OptionContract, OptionType};
/// use quantix_risk::portfolio::{portfolio_greeks, Position};
///
/// let call = OptionContract::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let put = OptionContract::new(OptionType::Put, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
///
/// // Long 10 calls, short 5 puts
/// let report = portfolio_greeks(&[Position::new(call, 10.0), Position::new(put, -5.0)]);
///
/// assert_eq!(report.positions.len(), 2);
/// // Long calls and short puts are both long delta
/// assert!(report.totals.delta > 0.0);
/// assert!(report.risk_metrics.delta_hedge_ratio < 0.0);
/// ```
pub fn portfolio_greeks(positions: &[Position]) -> PortfolioRiskReport {
    let mut report_positions = Vec::with_capacity(positions.len());
    let mut totals = Greeks::default();
    let mut total_value = 0.0;

    for position in positions {
        let unit_price = price(&position.contract).price;
        let scaled_greeks = greeks(&position.contract).scaled(position.quantity);
        let position_value = unit_price * position.quantity;

        totals.accumulate(&scaled_greeks);
        total_value += position_value;

        report_positions.push(PositionRisk {
            contract: position.contract,
            price: unit_price,
            position_value,
            greeks: scaled_greeks,
        });
    }

    let risk_metrics = RiskMetrics {
        delta_hedge_ratio: -totals.delta,
        gamma_exposure: totals.gamma,
        vega_exposure: totals.vega,
        daily_theta_decay: totals.theta,
    };

    PortfolioRiskReport {
        positions: report_positions,
        total_value,
        totals,
        risk_metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quantix_core::types::OptionType;

    fn atm_call() -> OptionContract {
        OptionContract::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    fn atm_put() -> OptionContract {
        OptionContract::new(OptionType::Put, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_empty_portfolio() {
        let report = portfolio_greeks(&[]);
        assert!(report.positions.is_empty());
        assert_eq!(report.total_value, 0.0);
        assert_eq!(report.totals, Greeks::default());
        assert_eq!(report.risk_metrics.delta_hedge_ratio, 0.0);
    }

    #[test]
    fn test_single_long_position_matches_contract_greeks() {
        let report = portfolio_greeks(&[Position::new(atm_call(), 1.0)]);
        let g = greeks(&atm_call());

        assert_eq!(report.positions.len(), 1);
        assert_relative_eq!(report.totals.delta, g.delta, epsilon = 1e-12);
        assert_relative_eq!(report.totals.vega, g.vega, epsilon = 1e-12);
        assert_relative_eq!(report.total_value, price(&atm_call()).price, epsilon = 1e-12);
    }

    #[test]
    fn test_quantity_scales_linearly() {
        let single = portfolio_greeks(&[Position::new(atm_call(), 1.0)]);
        let ten = portfolio_greeks(&[Position::new(atm_call(), 10.0)]);

        assert_relative_eq!(ten.totals.delta, 10.0 * single.totals.delta, epsilon = 1e-10);
        assert_relative_eq!(ten.totals.gamma, 10.0 * single.totals.gamma, epsilon = 1e-10);
        assert_relative_eq!(ten.total_value, 10.0 * single.total_value, epsilon = 1e-10);
    }

    #[test]
    fn test_short_position_flips_signs() {
        let long = portfolio_greeks(&[Position::new(atm_call(), 2.0)]);
        let short = portfolio_greeks(&[Position::new(atm_call(), -2.0)]);

        assert_relative_eq!(short.totals.delta, -long.totals.delta, epsilon = 1e-12);
        assert_relative_eq!(short.total_value, -long.total_value, epsilon = 1e-12);
        assert!(short.positions[0].price > 0.0); // unit price keeps its sign
    }

    #[test]
    fn test_straddle_aggregation_by_hand() {
        // Long 1 call + long 1 put at the same strike
        let report = portfolio_greeks(&[
            Position::new(atm_call(), 1.0),
            Position::new(atm_put(), 1.0),
        ]);

        let call_g = greeks(&atm_call());
        let put_g = greeks(&atm_put());

        assert_relative_eq!(
            report.totals.delta,
            call_g.delta + put_g.delta,
            epsilon = 1e-12
        );
        // Straddle vega is double the single-leg vega
        assert_relative_eq!(report.totals.vega, 2.0 * call_g.vega, epsilon = 1e-12);
        assert_relative_eq!(
            report.total_value,
            price(&atm_call()).price + price(&atm_put()).price,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_offsetting_positions_net_to_zero() {
        let report = portfolio_greeks(&[
            Position::new(atm_call(), 5.0),
            Position::new(atm_call(), -5.0),
        ]);

        assert_relative_eq!(report.totals.delta, 0.0, epsilon = 1e-10);
        assert_relative_eq!(report.totals.vega, 0.0, epsilon = 1e-10);
        assert_relative_eq!(report.total_value, 0.0, epsilon = 1e-10);
        // The per-position breakdown keeps both legs
        assert_eq!(report.positions.len(), 2);
    }

    #[test]
    fn test_delta_hedge_ratio_is_negated_delta() {
        let report = portfolio_greeks(&[Position::new(atm_call(), 3.0)]);
        assert_relative_eq!(
            report.risk_metrics.delta_hedge_ratio,
            -report.totals.delta,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            report.risk_metrics.vega_exposure,
            report.totals.vega,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            report.risk_metrics.daily_theta_decay,
            report.totals.theta,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_mixed_book() {
        let otm_put =
            OptionContract::new(OptionType::Put, 100.0, 80.0, 0.5, 0.05, 0.3).unwrap();
        let report = portfolio_greeks(&[
            Position::new(atm_call(), 10.0),
            Position::new(otm_put, -20.0),
        ]);

        // Long calls and short puts: both contribute positive delta
        assert!(report.totals.delta > 0.0);
        // Short options contribute negative vega; the long ATM calls dominate
        assert!(report.positions[1].greeks.vega < 0.0);
    }
}
