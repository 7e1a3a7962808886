use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ff_moody::{CurvePoint, DiagramSettings, ReynoldsSweep, SweepType, generate_diagram};
use ff_records::{
    RecordError, diagram_to_csv, export_diagram_csv, export_diagram_json, load_diagram_json,
    load_records,
};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

fn small_diagram() -> ff_moody::MoodyDiagram {
    let settings = DiagramSettings {
        laminar_start: 500.0,
        laminar_end: 510.0,
        roughness: vec![0.0, 1e-3],
        sweep: ReynoldsSweep::new(2000.0, 1e6, 5, SweepType::Logarithmic).unwrap(),
        ..DiagramSettings::default()
    };
    let overlay = vec![CurvePoint::from((2.0e5, 0.0185))];
    generate_diagram(&settings, &overlay).unwrap()
}

#[test]
fn load_records_from_file() {
    let dir = unique_temp_dir("ff_records_input");
    let path = dir.join("flows.txt");
    fs::write(
        &path,
        "# diameter velocity density viscosity roughness\n\
         0.1 2.0 1000 0.001 0.045\n\
         0.01 0.1 1000 0.001 0.01\n\
         0.1 2.0 oops 0.001 0.045\n",
    )
    .unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[0].is_ok());
    assert!(records[1].is_ok());
    assert!(matches!(
        records[2],
        Err(RecordError::InvalidRecord { line: 4, .. })
    ));
}

#[test]
fn missing_input_file_is_io_error() {
    let dir = unique_temp_dir("ff_records_missing");
    let err = load_records(&dir.join("nope.txt")).unwrap_err();
    assert!(matches!(err, RecordError::Io(_)));
}

#[test]
fn diagram_json_save_and_load() {
    let dir = unique_temp_dir("ff_records_json");
    let path = dir.join("moody.json");
    let diagram = small_diagram();

    export_diagram_json(&path, &diagram).unwrap();
    let loaded = load_diagram_json(&path).unwrap();

    assert_eq!(loaded.curves.len(), 2);
    assert_eq!(loaded.laminar.len(), 10);
    assert_eq!(loaded.overlay.len(), 1);
    assert_eq!(loaded.transition_marker, diagram.transition_marker);
}

#[test]
fn diagram_csv_has_one_row_per_point() {
    let diagram = small_diagram();
    let csv = diagram_to_csv(&diagram);
    let lines: Vec<&str> = csv.lines().collect();

    // header + 10 laminar + 2 x 5 turbulent + 1 overlay + 1 transition
    assert_eq!(lines.len(), 1 + 10 + 10 + 1 + 1);
    assert_eq!(lines[0], "series,eps_d,reynolds,friction_factor");
    assert!(lines[1].starts_with("laminar,,500,"));
    assert_eq!(lines.iter().filter(|l| l.starts_with("turbulent,")).count(), 10);
    assert_eq!(*lines.last().unwrap(), "transition,,2040,");

    let dir = unique_temp_dir("ff_records_csv");
    let path = dir.join("moody.csv");
    export_diagram_csv(&path, &diagram).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), csv);
}
