//! Diagram generation errors.

use ff_solver::SolverError;
use thiserror::Error;

/// Result type for diagram operations.
pub type MoodyResult<T> = Result<T, MoodyError>;

/// Errors that can occur while generating diagram data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoodyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A point on a roughness curve failed under the abort policy.
    #[error("Curve eps/D = {eps_d:e} failed at point {point_index} (Re = {reynolds}): {source}")]
    CurveFailed {
        eps_d: f64,
        point_index: usize,
        reynolds: f64,
        #[source]
        source: SolverError,
    },
}
