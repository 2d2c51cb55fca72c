//! Contract value types and domain errors.

pub mod contract;
pub mod error;

pub use contract::{OptionContract, OptionType};
pub use error::DomainError;
