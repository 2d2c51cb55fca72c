//! Market data structures derived from observed quotes.

pub mod error;
pub mod surface;

pub use error::SurfaceError;
pub use surface::{
    SmileMetrics, SmileSlice, TermStructurePoint, VolatilityQuote, VolatilitySurface,
};
