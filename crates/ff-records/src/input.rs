//! Whitespace-separated flow records.
//!
//! One record per line: diameter [m], velocity [m/s], density [kg/m³],
//! viscosity [Pa·s], roughness [mm]. Blank lines and `#` comments are skipped.

use crate::{RecordError, RecordResult};
use ff_flow::FlowSample;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const FIELD_NAMES: [&str; 5] = ["diameter", "velocity", "density", "viscosity", "roughness"];

/// A parsed sample and the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRecord {
    pub line: usize,
    pub sample: FlowSample,
}

/// Parse one line. `Ok(None)` for blank and comment lines.
pub fn parse_record(line: usize, text: &str) -> RecordResult<Option<InputRecord>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() != FIELD_NAMES.len() {
        return Err(RecordError::InvalidRecord {
            line,
            message: format!(
                "expected {} fields, found {}",
                FIELD_NAMES.len(),
                fields.len()
            ),
        });
    }

    let mut values = [0.0_f64; 5];
    for (i, (raw, name)) in fields.iter().zip(FIELD_NAMES).enumerate() {
        values[i] = raw.parse().map_err(|_| RecordError::InvalidRecord {
            line,
            message: format!("{name}: '{raw}' is not a number"),
        })?;
    }

    let [diameter, velocity, density, viscosity, roughness] = values;
    let sample = FlowSample::from_raw(diameter, velocity, density, viscosity, roughness)
        .map_err(|source| RecordError::InvalidSample { line, source })?;

    Ok(Some(InputRecord { line, sample }))
}

/// Read every record from a reader.
///
/// The outer error is an I/O failure; each inner entry is one non-blank line,
/// either parsed or rejected, in input order.
pub fn read_records<R: BufRead>(reader: R) -> RecordResult<Vec<RecordResult<InputRecord>>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_record(idx + 1, &line) {
            Ok(Some(record)) => records.push(Ok(record)),
            Ok(None) => {}
            Err(e) => records.push(Err(e)),
        }
    }
    Ok(records)
}

pub fn load_records(path: &Path) -> RecordResult<Vec<RecordResult<InputRecord>>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}
