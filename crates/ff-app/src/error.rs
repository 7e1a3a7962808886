//! Error types for the ff-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Config validation failed: {0}")]
    Validation(String),

    #[error("Failed to read input file: {path}: {message}")]
    InputRead { path: PathBuf, message: String },

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Flow error: {0}")]
    Flow(String),

    #[error("Diagram error: {0}")]
    Diagram(String),

    #[error("Records error: {0}")]
    Records(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ff-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ff_solver::SolverError> for AppError {
    fn from(err: ff_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<ff_flow::FlowError> for AppError {
    fn from(err: ff_flow::FlowError) -> Self {
        AppError::Flow(err.to_string())
    }
}

impl From<ff_moody::MoodyError> for AppError {
    fn from(err: ff_moody::MoodyError) -> Self {
        AppError::Diagram(err.to_string())
    }
}

impl From<ff_records::RecordError> for AppError {
    fn from(err: ff_records::RecordError) -> Self {
        AppError::Records(err.to_string())
    }
}
