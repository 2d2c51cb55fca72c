//! # quantix_core: Foundation for the Quantix Options Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! quantix_core is the bottom layer of the 4-layer architecture, providing:
//! - Statistical primitives: normal PDF/CDF (`math::distributions`)
//! - Contract value types: `OptionType`, `OptionContract` (`types::contract`)
//! - Error types: `DomainError` (`types::error`)
//! - Volatility surface built from market quotes (`market_data::surface`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other quantix_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use quantix_core::math::distributions::{norm_cdf, norm_pdf};
//! use quantix_core::types::{OptionContract, OptionType};
//!
//! // Statistical primitives
//! let p = norm_cdf(1.96_f64);
//! assert!((p - 0.975).abs() < 1e-4);
//! assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
//!
//! // Validated contract construction
//! let contract = OptionContract::new(
//!     OptionType::Call,
//!     100.0, // spot
//!     100.0, // strike
//!     1.0,   // expiry (years)
//!     0.05,  // risk-free rate
//!     0.2,   // volatility
//! ).unwrap();
//! assert_eq!(contract.moneyness(), 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for contract and surface types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
