//! Moody diagram generation and export.

use ff_moody::{CurvePoint, MoodyDiagram, generate_diagram};
use ff_records::{export_diagram_csv, export_diagram_json, load_records};
use std::path::Path;
use tracing::info;

use crate::batch_service::evaluate_records;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Export format for diagram data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramFormat {
    #[default]
    Json,
    Csv,
}

impl DiagramFormat {
    /// Guess the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(AppError::Validation(format!(
                "Unknown diagram format '{other}' (expected json or csv)"
            ))),
        }
    }
}

/// Generate diagram data from the configured settings plus optional overlay
/// points.
pub fn build_diagram(config: &AppConfig, overlay: &[CurvePoint]) -> AppResult<MoodyDiagram> {
    let settings = config.diagram_settings();
    let diagram = generate_diagram(&settings, overlay)?;
    info!(
        curves = diagram.curves.len(),
        laminar_points = diagram.laminar.len(),
        overlay_points = diagram.overlay.len(),
        "diagram built"
    );
    Ok(diagram)
}

pub fn write_diagram(path: &Path, format: DiagramFormat, diagram: &MoodyDiagram) -> AppResult<()> {
    match format {
        DiagramFormat::Json => export_diagram_json(path, diagram)?,
        DiagramFormat::Csv => export_diagram_csv(path, diagram)?,
    }
    Ok(())
}

/// Evaluate an input file and return its (Re, f) points for overlaying.
/// Records that fail are left out.
pub fn overlay_from_input(path: &Path, config: &AppConfig) -> AppResult<Vec<CurvePoint>> {
    let records = load_records(path).map_err(|e| AppError::InputRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(evaluate_records(records, config).overlay_points())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(DiagramFormat::from_path(&PathBuf::from("m.csv")), DiagramFormat::Csv);
        assert_eq!(DiagramFormat::from_path(&PathBuf::from("m.CSV")), DiagramFormat::Csv);
        assert_eq!(DiagramFormat::from_path(&PathBuf::from("m.json")), DiagramFormat::Json);
        assert_eq!(DiagramFormat::from_path(&PathBuf::from("moody")), DiagramFormat::Json);
    }

    #[test]
    fn parse_format() {
        assert_eq!(DiagramFormat::parse("CSV").unwrap(), DiagramFormat::Csv);
        assert!(matches!(
            DiagramFormat::parse("png"),
            Err(AppError::Validation(_))
        ));
    }
}
