//! Closed-form analytical pricing.

pub mod black_scholes;
pub mod greeks;
pub mod implied_vol;

pub use black_scholes::{price, BlackScholes, PricingResult};
pub use greeks::{greeks, Greeks};
pub use implied_vol::{ConvergenceError, ImpliedVolResult, ImpliedVolSolver};
