//! Shared application service layer for frictionflow.
//!
//! Centralizes configuration, batch evaluation of flow records and Moody
//! diagram generation so the CLI stays a thin argument parser.

pub mod batch_service;
pub mod config;
pub mod diagram_service;
pub mod error;

// Re-export key types for convenience
pub use batch_service::{BatchSummary, evaluate_file, evaluate_records, evaluate_sample};
pub use config::{
    AppConfig, DEFAULT_CONFIG_FILE, DiagramSection, RegimeSection, SolverSection, load_config,
    load_or_default, save_config,
};
pub use diagram_service::{DiagramFormat, build_diagram, overlay_from_input, write_diagram};
pub use error::{AppError, AppResult};
