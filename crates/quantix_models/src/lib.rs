//! # quantix_models (L2: Analytical Models)
//!
//! Closed-form and lattice pricing models for vanilla options.
//!
//! This crate provides:
//! - Black-Scholes pricing with continuous dividend yield
//!   (`analytical::black_scholes`)
//! - First- and second-order Greeks with the engine's scaling conventions
//!   (`analytical::greeks`)
//! - Newton-Raphson implied volatility solver (`analytical::implied_vol`)
//! - Cox-Ross-Rubinstein binomial lattice for American exercise
//!   (`lattice::binomial`)
//!
//! ## Design Principles
//!
//! - **Validated inputs at the boundary**: pricers take an
//!   [`OptionContract`](quantix_core::types::OptionContract) whose
//!   constructor has already rejected out-of-domain inputs, so the pricing
//!   paths themselves are infallible.
//! - **Enum-based option types** for static dispatch; no string matching.
//! - **Scaling conventions are contracts**: vega and rho are per 1% move,
//!   theta per calendar day. Consumers depend on these.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod lattice;
