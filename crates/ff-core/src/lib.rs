//! ff-core: stable foundation for frictionflow.
//!
//! Contains:
//! - units (uom SI types + constructors for pipe-flow quantities)
//! - numeric (Real + finiteness and sign checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FfError, FfResult};
pub use numeric::*;
pub use units::*;
