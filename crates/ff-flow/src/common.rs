//! Common checks for sample construction.

use crate::error::{FlowError, FlowResult};
use ff_core::numeric::{ensure_non_negative, ensure_positive};

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> FlowResult<f64> {
    ensure_positive(value, what).map_err(|_| FlowError::NonPhysical { what, value })
}

/// Ensure a value is finite and not negative.
pub fn check_non_negative(value: f64, what: &'static str) -> FlowResult<f64> {
    ensure_non_negative(value, what).map_err(|_| FlowError::NonPhysical { what, value })
}
