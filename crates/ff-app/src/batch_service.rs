//! Batch evaluation of flow records into a pressure-loss report.

use ff_flow::{FlowReport, FlowSample};
use ff_moody::CurvePoint;
use ff_records::{
    InputRecord, RecordError, RecordFailure, RecordOutcome, RecordResult, ReportWriter,
    load_records,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Per-record outcomes of one batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<RecordOutcome>,
    pub evaluated: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// (Re, f) of every evaluated record, for overlaying on the diagram.
    pub fn overlay_points(&self) -> Vec<CurvePoint> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                RecordOutcome::Evaluated { report, .. } => Some(CurvePoint {
                    reynolds: report.reynolds,
                    friction_factor: report.friction.value,
                }),
                RecordOutcome::Failed { .. } => None,
            })
            .collect()
    }
}

/// Evaluate a single sample with the configured regime and solver settings.
pub fn evaluate_sample(sample: &FlowSample, config: &AppConfig) -> AppResult<FlowReport> {
    Ok(sample.evaluate(&config.friction_settings())?)
}

/// Evaluate parsed records. A bad record is reported and skipped; the rest of
/// the batch still runs.
pub fn evaluate_records(
    records: Vec<RecordResult<InputRecord>>,
    config: &AppConfig,
) -> BatchSummary {
    let settings = config.friction_settings();
    let mut summary = BatchSummary::default();

    for record in records {
        let outcome = match record {
            Ok(InputRecord { line, sample }) => match sample.evaluate(&settings) {
                Ok(report) => RecordOutcome::Evaluated { line, report },
                Err(e) => RecordOutcome::Failed {
                    line,
                    cause: e.into(),
                },
            },
            Err(RecordError::InvalidRecord { line, message }) => RecordOutcome::Failed {
                line,
                cause: RecordFailure::Malformed(message),
            },
            Err(RecordError::InvalidSample { line, source }) => RecordOutcome::Failed {
                line,
                cause: source.into(),
            },
            Err(other) => RecordOutcome::Failed {
                line: 0,
                cause: RecordFailure::Malformed(other.to_string()),
            },
        };

        match &outcome {
            RecordOutcome::Evaluated { .. } => summary.evaluated += 1,
            RecordOutcome::Failed { line, cause } => {
                warn!(line, %cause, "record skipped");
                summary.failed += 1;
            }
        }
        summary.outcomes.push(outcome);
    }

    summary
}

/// Read `input`, evaluate every record and write the report to `output`.
pub fn evaluate_file(input: &Path, output: &Path, config: &AppConfig) -> AppResult<BatchSummary> {
    let records = load_records(input).map_err(|e| AppError::InputRead {
        path: input.to_path_buf(),
        message: e.to_string(),
    })?;

    let summary = evaluate_records(records, config);

    let file = File::create(output)?;
    let mut writer = ReportWriter::new(BufWriter::new(file))?;
    for outcome in &summary.outcomes {
        writer.write_outcome(outcome)?;
    }
    writer.finish()?;

    info!(
        input = %input.display(),
        output = %output.display(),
        evaluated = summary.evaluated,
        failed = summary.failed,
        "batch complete"
    );

    Ok(summary)
}
