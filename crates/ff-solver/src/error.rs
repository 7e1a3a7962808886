//! Error types for solver operations.

use thiserror::Error;

/// Errors that can occur while solving for a friction factor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Iteration budget exhausted without the Newton step dropping below tolerance.
    #[error(
        "Convergence failed after {iterations} iterations: last step = {last_step:e}, last iterate = {last_iterate}"
    )]
    NonConvergence {
        iterations: usize,
        last_step: f64,
        last_iterate: f64,
    },

    #[error("Invalid input: {what} = {value}")]
    InvalidInput { what: &'static str, value: f64 },
}

pub type SolverResult<T> = Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SolverError::NonConvergence {
            iterations: 99,
            last_step: 1.5e-3,
            last_iterate: 0.02,
        };
        let msg = err.to_string();
        assert!(msg.contains("99 iterations"));
    }
}
