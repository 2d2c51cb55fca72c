//! Discrete-time lattice pricing.

pub mod binomial;

pub use binomial::{BinomialLattice, BinomialTreeResult, TreeParams, DEFAULT_STEPS};
