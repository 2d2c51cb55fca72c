//! # quantix_risk (L4: Portfolio Risk)
//!
//! Position-level pricing and Greeks, aggregated linearly into portfolio
//! totals and derived hedge metrics.
//!
//! Aggregation is purely linear: Greeks are local sensitivities, so
//! position Greeks scale with the signed quantity and portfolio Greeks are
//! their sum. There is no netting beyond summation and no internal
//! parallelism — positions are independent, so callers wanting concurrency
//! fan positions out across their own threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod portfolio;
