//! Diagram data export for external plotting.

use crate::RecordResult;
use ff_moody::MoodyDiagram;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn export_diagram_json(path: &Path, diagram: &MoodyDiagram) -> RecordResult<()> {
    let json = serde_json::to_string_pretty(diagram)?;
    fs::write(path, json)?;
    info!(path = %path.display(), curves = diagram.curves.len(), "wrote diagram json");
    Ok(())
}

pub fn load_diagram_json(path: &Path) -> RecordResult<MoodyDiagram> {
    let content = fs::read_to_string(path)?;
    let diagram = serde_json::from_str(&content)?;
    Ok(diagram)
}

/// Long-format CSV: `series,eps_d,reynolds,friction_factor`.
///
/// Series are `laminar`, `turbulent` (one block per roughness), `overlay`
/// and a single `transition` row whose friction factor is left empty.
pub fn diagram_to_csv(diagram: &MoodyDiagram) -> String {
    let mut csv = String::from("series,eps_d,reynolds,friction_factor\n");

    for p in &diagram.laminar {
        let _ = writeln!(csv, "laminar,,{},{}", p.reynolds, p.friction_factor);
    }
    for curve in &diagram.curves {
        for p in &curve.points {
            let _ = writeln!(
                csv,
                "turbulent,{},{},{}",
                curve.eps_d, p.reynolds, p.friction_factor
            );
        }
    }
    for p in &diagram.overlay {
        let _ = writeln!(csv, "overlay,,{},{}", p.reynolds, p.friction_factor);
    }
    let _ = writeln!(csv, "transition,,{},", diagram.transition_marker);

    csv
}

pub fn export_diagram_csv(path: &Path, diagram: &MoodyDiagram) -> RecordResult<()> {
    fs::write(path, diagram_to_csv(diagram))?;
    info!(path = %path.display(), curves = diagram.curves.len(), "wrote diagram csv");
    Ok(())
}
