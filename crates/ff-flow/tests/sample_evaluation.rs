//! Integration tests for flow sample evaluation.

use ff_core::units::{kgpm3, m, mm, mps, pas};
use ff_flow::{FlowError, FlowSample};
use ff_solver::{FlowRegime, FrictionSettings, NewtonConfig, SolverError};

#[test]
fn unit_constructors_match_raw_constructor() {
    let typed = FlowSample::new(m(0.05), mps(1.2), kgpm3(998.0), pas(1.0e-3), mm(0.0015)).unwrap();
    let raw = FlowSample::from_raw(0.05, 1.2, 998.0, 1.0e-3, 0.0015).unwrap();
    assert!((typed.reynolds() - raw.reynolds()).abs() < 1e-9);
    assert!((typed.relative_roughness() - raw.relative_roughness()).abs() < 1e-15);
}

#[test]
fn faster_flow_means_higher_pressure_loss() {
    let settings = FrictionSettings::default();
    let slow = FlowSample::from_raw(0.08, 1.0, 1000.0, 1e-3, 0.05)
        .unwrap()
        .evaluate(&settings)
        .unwrap();
    let fast = FlowSample::from_raw(0.08, 3.0, 1000.0, 1e-3, 0.05)
        .unwrap()
        .evaluate(&settings)
        .unwrap();

    assert_eq!(slow.friction.regime, FlowRegime::Turbulent);
    assert!(fast.reynolds > slow.reynolds);
    assert!(fast.pressure_loss_pa_per_m > slow.pressure_loss_pa_per_m);
}

#[test]
fn viscous_oil_stays_laminar() {
    // 50 mm line, light oil: Re = 0.05 * 0.5 * 870 / 0.03 = 725
    let sample = FlowSample::from_raw(0.05, 0.5, 870.0, 0.03, 0.045).unwrap();
    let report = sample.evaluate(&FrictionSettings::default()).unwrap();
    assert_eq!(report.friction.regime, FlowRegime::Laminar);
    assert_eq!(report.friction.iterations, 0);
    assert!((report.friction.value - 64.0 / report.reynolds).abs() < 1e-15);
}

#[test]
fn solver_failure_propagates() {
    let settings = FrictionSettings {
        turbulent_seed: 1000.0,
        newton: NewtonConfig {
            max_iterations: 1,
            tolerance: 1e-9,
        },
        ..FrictionSettings::default()
    };
    let sample = FlowSample::from_raw(0.1, 1.0, 1000.0, 1e-3, 0.1).unwrap();
    let err = sample.evaluate(&settings).unwrap_err();
    assert!(matches!(
        err,
        FlowError::Solver(SolverError::NonConvergence { .. })
    ));
}
