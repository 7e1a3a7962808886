//! Pressure-loss report writer.
//!
//! The header comes first and every row is preceded by a newline, so the
//! file has no trailing newline.

use crate::RecordResult;
use ff_flow::{FlowError, FlowReport};
use std::io::Write;

pub const REPORT_HEADER: &str = "Friction factor  | Pressure loss (Pa/m)";

const FIELD_WIDTH: usize = 16;

/// Why a record produced no report row.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecordFailure {
    /// The line could not be read as five numbers
    #[error("{0}")]
    Malformed(String),

    /// The sample was rejected or its friction factor could not be solved
    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Outcome of one input record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Evaluated { line: usize, report: FlowReport },
    Failed { line: usize, cause: RecordFailure },
}

impl RecordOutcome {
    pub fn line(&self) -> usize {
        match self {
            Self::Evaluated { line, .. } | Self::Failed { line, .. } => *line,
        }
    }
}

/// Format `value` in at most 16 characters.
///
/// Plain decimals keep a `.0` on integral values and lose only fractional
/// digits when cut. Values whose integer part would not fit are written in
/// exponent form with the mantissa shortened instead.
pub fn format_field(value: f64) -> String {
    let text = format!("{value:?}");
    if text.len() <= FIELD_WIDTH {
        return text;
    }

    let integral_len = text.find('.').unwrap_or(text.len());
    if !text.contains('e') && integral_len <= FIELD_WIDTH {
        return text[..FIELD_WIDTH].to_string();
    }

    (0..FIELD_WIDTH)
        .rev()
        .map(|precision| format!("{value:.precision$e}"))
        .find(|s| s.len() <= FIELD_WIDTH)
        .unwrap_or_else(|| format!("{value:e}"))
}

/// Writes the report header followed by one row per record outcome.
pub struct ReportWriter<W: Write> {
    inner: W,
    rows: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(mut inner: W) -> RecordResult<Self> {
        write!(inner, "{REPORT_HEADER}")?;
        Ok(Self { inner, rows: 0 })
    }

    pub fn write_outcome(&mut self, outcome: &RecordOutcome) -> RecordResult<()> {
        match outcome {
            RecordOutcome::Evaluated { report, .. } => write!(
                self.inner,
                "\n{} | {}",
                format_field(report.friction.value),
                format_field(report.pressure_loss_pa_per_m)
            )?,
            RecordOutcome::Failed { line, cause } => {
                write!(self.inner, "\nerror: line {line}: {cause}")?
            }
        }
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> RecordResult<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
