//! Convergence behaviour of the Colebrook-White Newton solver.

use ff_solver::{
    FlowRegime, FrictionSettings, NewtonConfig, SolverError, friction_factor,
    laminar_friction_factor, solve,
};

fn log_space(start: f64, end: f64, n: usize) -> Vec<f64> {
    let (a, b) = (start.ln(), end.ln());
    (0..n)
        .map(|i| (a + (b - a) * i as f64 / (n - 1) as f64).exp())
        .collect()
}

#[test]
fn well_conditioned_inputs_converge_within_budget() {
    let cfg = NewtonConfig::default();
    for re in log_space(2040.0, 1e7, 41) {
        for j in 0..=10 {
            let eps_d = 0.05 * j as f64 / 10.0;
            let sol = solve(0.01, re, eps_d, &cfg)
                .unwrap_or_else(|e| panic!("Re={re}, eps/D={eps_d}: {e}"));
            assert!(sol.iterations <= 100);
            assert!(sol.root > 0.0);
        }
    }
}

#[test]
fn smooth_pipe_at_re_4000_is_in_blasius_range() {
    let sol = solve(0.01, 4000.0, 0.0, &NewtonConfig::default()).unwrap();
    assert!(
        (0.039..=0.041).contains(&sol.root),
        "f = {} outside reference range",
        sol.root
    );
}

#[test]
fn far_seed_with_one_iteration_is_reported() {
    let cfg = NewtonConfig {
        max_iterations: 1,
        tolerance: 1e-9,
    };
    let result = solve(1000.0, 1e5, 0.001, &cfg);
    assert!(matches!(result, Err(SolverError::NonConvergence { .. })));
}

#[test]
fn fully_rough_limit_matches_von_karman() {
    // At very high Re the smooth term vanishes: 1/sqrt(f) = -2 log10(eps/D / 3.72)
    let eps_d = 1e-2;
    let sol = solve(0.01, 1e12, eps_d, &NewtonConfig::default()).unwrap();
    let expected = (-2.0 * (eps_d / 3.72_f64).log10()).powi(-2);
    assert!((sol.root - expected).abs() / expected < 1e-4);
}

#[test]
fn laminar_range_is_closed_form() {
    let settings = FrictionSettings::default();
    for re in 500..2500 {
        let re = re as f64;
        if re > settings.laminar_cutoff {
            continue;
        }
        let ff = friction_factor(re, 1e-3, &settings).unwrap();
        assert_eq!(ff.value, 64.0 / re);
        assert_eq!(ff.iterations, 0);
    }
}

#[test]
fn each_branch_is_continuous_at_cutoff() {
    let settings = FrictionSettings::default();
    let cutoff = settings.laminar_cutoff;
    let delta = 1e-3;

    let lam_at = friction_factor(cutoff, 0.0, &settings).unwrap();
    let lam_below = friction_factor(cutoff - delta, 0.0, &settings).unwrap();
    assert_eq!(lam_at.regime, FlowRegime::Laminar);
    assert!((lam_at.value - lam_below.value).abs() < 1e-7);

    let turb_above = friction_factor(cutoff + delta, 0.0, &settings).unwrap();
    let turb_further = friction_factor(cutoff + 2.0 * delta, 0.0, &settings).unwrap();
    assert_eq!(turb_above.regime, FlowRegime::Turbulent);
    assert!((turb_above.value - turb_further.value).abs() < 1e-7);

    // Poiseuille and Colebrook disagree by a bounded model error at the switch
    let gap = turb_above.value - laminar_friction_factor(cutoff);
    assert!(gap > 0.0 && gap < 0.02, "gap = {gap}");
}
