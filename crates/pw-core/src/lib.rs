//! pw-core: stable foundation for phasewise.
//!
//! Contains:
//! - units (uom SI types + constructors, atm conversions)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PwError, PwResult};
pub use numeric::*;
pub use units::*;
