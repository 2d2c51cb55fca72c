//! # quantix_pricing (L3: Simulation & Exotics)
//!
//! Path-dependent and barrier option pricers built on the analytical layer.
//!
//! This crate provides:
//! - A seeded Box-Muller normal sampler with spare caching (`rng`)
//! - Arithmetic-Asian option pricing via Monte Carlo simulation (`mc`)
//! - Single-barrier option pricing via the closed-form reflection
//!   adjustment (`barrier`)
//!
//! ## Concurrency model
//!
//! Everything here is synchronous and single-threaded per call. The only
//! mutable state in the engine is the Box-Muller spare inside
//! [`rng::NormalSampler`]; one sampler instance serves one simulation run.
//! Callers wanting parallelism run independent pricers (with their own
//! seeds) on their own threads — the engine deliberately offers no
//! internal thread pool and no cancellation hooks, so very large
//! simulation counts must be bounded by the caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod barrier;
pub mod mc;
pub mod rng;
