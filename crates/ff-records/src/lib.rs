//! ff-records: flow-record input, pressure-loss reports and diagram export.

pub mod export;
pub mod input;
pub mod report;

pub use export::{diagram_to_csv, export_diagram_csv, export_diagram_json, load_diagram_json};
pub use input::{InputRecord, load_records, parse_record, read_records};
pub use report::{REPORT_HEADER, RecordFailure, RecordOutcome, ReportWriter, format_field};

use ff_flow::FlowError;

pub type RecordResult<T> = Result<T, RecordError>;

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    #[error("Invalid sample on line {line}: {source}")]
    InvalidSample {
        line: usize,
        #[source]
        source: FlowError,
    },
}
