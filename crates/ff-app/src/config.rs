//! YAML configuration.

use ff_moody::{
    CurveFailurePolicy, DiagramSettings, LAMINAR_SEGMENT_END, LAMINAR_SEGMENT_START,
    REFERENCE_ROUGHNESS, ReynoldsSweep,
};
use ff_solver::{DEFAULT_TURBULENT_SEED, FrictionSettings, LAMINAR_CUTOFF_RE, NewtonConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{AppError, AppResult};

pub const DEFAULT_CONFIG_FILE: &str = "frictionflow.yaml";

/// Newton iteration settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for SolverSection {
    fn default() -> Self {
        let newton = NewtonConfig::default();
        Self {
            max_iterations: newton.max_iterations,
            tolerance: newton.tolerance,
        }
    }
}

/// Single-sample regime switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegimeSection {
    pub laminar_cutoff: f64,
    pub turbulent_seed: f64,
}

impl Default for RegimeSection {
    fn default() -> Self {
        Self {
            laminar_cutoff: LAMINAR_CUTOFF_RE,
            turbulent_seed: DEFAULT_TURBULENT_SEED,
        }
    }
}

/// Moody diagram data settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramSection {
    pub laminar_start: f64,
    pub laminar_end: f64,
    pub laminar_step: f64,
    pub roughness: Vec<f64>,
    pub sweep: ReynoldsSweep,
    pub seed: f64,
    pub failure_policy: CurveFailurePolicy,
    pub transition_marker: f64,
}

impl Default for DiagramSection {
    fn default() -> Self {
        Self {
            laminar_start: LAMINAR_SEGMENT_START,
            laminar_end: LAMINAR_SEGMENT_END,
            laminar_step: 1.0,
            roughness: REFERENCE_ROUGHNESS.to_vec(),
            sweep: ReynoldsSweep::default(),
            seed: DEFAULT_TURBULENT_SEED,
            failure_policy: CurveFailurePolicy::Abort,
            transition_marker: LAMINAR_CUTOFF_RE,
        }
    }
}

/// Top-level configuration file. Every field is optional in YAML.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub solver: SolverSection,
    pub regime: RegimeSection,
    pub diagram: DiagramSection,
}

impl AppConfig {
    pub fn newton(&self) -> NewtonConfig {
        NewtonConfig {
            max_iterations: self.solver.max_iterations,
            tolerance: self.solver.tolerance,
        }
    }

    pub fn friction_settings(&self) -> FrictionSettings {
        FrictionSettings {
            laminar_cutoff: self.regime.laminar_cutoff,
            turbulent_seed: self.regime.turbulent_seed,
            newton: self.newton(),
        }
    }

    pub fn diagram_settings(&self) -> DiagramSettings {
        let d = &self.diagram;
        DiagramSettings {
            laminar_start: d.laminar_start,
            laminar_end: d.laminar_end,
            laminar_step: d.laminar_step,
            roughness: d.roughness.clone(),
            sweep: d.sweep,
            seed: d.seed,
            newton: self.newton(),
            failure_policy: d.failure_policy,
            transition_marker: d.transition_marker,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.solver.max_iterations == 0 {
            return Err(AppError::Validation(
                "solver.max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.solver.tolerance.is_finite() && self.solver.tolerance > 0.0) {
            return Err(AppError::Validation(format!(
                "solver.tolerance must be positive, got {}",
                self.solver.tolerance
            )));
        }
        if !(self.regime.laminar_cutoff.is_finite() && self.regime.laminar_cutoff > 0.0) {
            return Err(AppError::Validation(format!(
                "regime.laminar_cutoff must be positive, got {}",
                self.regime.laminar_cutoff
            )));
        }
        if !self.regime.turbulent_seed.is_finite() || self.regime.turbulent_seed == 0.0 {
            return Err(AppError::Validation(
                "regime.turbulent_seed must be finite and non-zero".to_string(),
            ));
        }
        self.diagram_settings()
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))
    }
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: AppConfig = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;

    config.validate()?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load `path` if it exists, otherwise return the defaults.
pub fn load_or_default(path: &Path) -> AppResult<AppConfig> {
    if path.exists() {
        load_config(path)
    } else {
        debug!(path = %path.display(), "config not found, using defaults");
        Ok(AppConfig::default())
    }
}

/// Save config to a YAML file.
pub fn save_config(path: &Path, config: &AppConfig) -> AppResult<()> {
    config.validate()?;
    let content = serde_yaml::to_string(config)
        .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(path, content).map_err(|e| AppError::ConfigFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
