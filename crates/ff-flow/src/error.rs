//! Error types for flow sample operations.

use ff_solver::SolverError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a flow sample.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

pub type FlowResult<T> = Result<T, FlowError>;
