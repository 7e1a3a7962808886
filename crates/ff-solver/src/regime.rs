//! Laminar / turbulent regime selection.

use crate::error::{SolverError, SolverResult};
use crate::newton::{NewtonConfig, solve};
use ff_core::units::constants::POISEUILLE;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Reynolds number at or below which the Poiseuille closed form is used.
pub const LAMINAR_CUTOFF_RE: f64 = 2040.0;

/// Seed for a cold turbulent solve.
pub const DEFAULT_TURBULENT_SEED: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laminar => write!(f, "laminar"),
            Self::Turbulent => write!(f, "turbulent"),
        }
    }
}

/// Settings for a single-sample friction factor evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionSettings {
    pub laminar_cutoff: f64,
    pub turbulent_seed: f64,
    pub newton: NewtonConfig,
}

impl Default for FrictionSettings {
    fn default() -> Self {
        Self {
            laminar_cutoff: LAMINAR_CUTOFF_RE,
            turbulent_seed: DEFAULT_TURBULENT_SEED,
            newton: NewtonConfig::default(),
        }
    }
}

impl FrictionSettings {
    pub fn regime(&self, re: f64) -> FlowRegime {
        if re <= self.laminar_cutoff {
            FlowRegime::Laminar
        } else {
            FlowRegime::Turbulent
        }
    }
}

/// Darcy friction factor together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionFactor {
    pub value: f64,
    pub regime: FlowRegime,
    /// Newton iterations used; 0 for the exact laminar branch
    pub iterations: usize,
}

/// Poiseuille friction factor, f = 64 / Re.
#[inline]
pub fn laminar_friction_factor(re: f64) -> f64 {
    POISEUILLE / re
}

/// Friction factor for the given Reynolds number and relative roughness.
pub fn friction_factor(
    re: f64,
    eps_d: f64,
    settings: &FrictionSettings,
) -> SolverResult<FrictionFactor> {
    if !re.is_finite() || re <= 0.0 {
        return Err(SolverError::InvalidInput {
            what: "reynolds number",
            value: re,
        });
    }

    match settings.regime(re) {
        FlowRegime::Laminar => Ok(FrictionFactor {
            value: laminar_friction_factor(re),
            regime: FlowRegime::Laminar,
            iterations: 0,
        }),
        FlowRegime::Turbulent => {
            let sol = solve(settings.turbulent_seed, re, eps_d, &settings.newton)?;
            debug!(re, eps_d, f = sol.root, iterations = sol.iterations, "turbulent solve");
            Ok(FrictionFactor {
                value: sol.root,
                regime: FlowRegime::Turbulent,
                iterations: sol.iterations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laminar_branch_is_exact() {
        let s = FrictionSettings::default();
        let ff = friction_factor(1000.0, 0.01, &s).unwrap();
        assert_eq!(ff.value, 64.0 / 1000.0);
        assert_eq!(ff.iterations, 0);
        assert_eq!(ff.regime, FlowRegime::Laminar);
    }

    #[test]
    fn cutoff_itself_is_laminar() {
        let s = FrictionSettings::default();
        assert_eq!(s.regime(2040.0), FlowRegime::Laminar);
        assert_eq!(s.regime(2040.000_001), FlowRegime::Turbulent);
    }

    #[test]
    fn turbulent_branch_iterates() {
        let ff = friction_factor(4000.0, 0.0, &FrictionSettings::default()).unwrap();
        assert_eq!(ff.regime, FlowRegime::Turbulent);
        assert!(ff.iterations > 0);
        assert!(ff.value > 0.039 && ff.value < 0.041, "f = {}", ff.value);
    }

    #[test]
    fn rejects_non_positive_reynolds() {
        let s = FrictionSettings::default();
        assert!(friction_factor(0.0, 0.0, &s).is_err());
        assert!(friction_factor(-10.0, 0.0, &s).is_err());
        assert!(friction_factor(f64::NAN, 0.0, &s).is_err());
    }

    #[test]
    fn custom_cutoff_moves_the_switch() {
        let s = FrictionSettings {
            laminar_cutoff: 2300.0,
            ..FrictionSettings::default()
        };
        let ff = friction_factor(2200.0, 0.0, &s).unwrap();
        assert_eq!(ff.regime, FlowRegime::Laminar);
    }
}
