//! Moody diagram data: laminar segment, roughness curves, overlay points.

use crate::error::{MoodyError, MoodyResult};
use crate::sweeps::ReynoldsSweep;
use ff_solver::{DEFAULT_TURBULENT_SEED, LAMINAR_CUTOFF_RE, NewtonConfig, laminar_friction_factor, solve};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Relative roughness values drawn on a standard Moody chart.
pub const REFERENCE_ROUGHNESS: [f64; 6] = [0.0, 1e-6, 1e-5, 1e-4, 1e-3, 1e-2];

/// First Re of the laminar segment.
pub const LAMINAR_SEGMENT_START: f64 = 500.0;

/// Laminar segment end, exclusive.
pub const LAMINAR_SEGMENT_END: f64 = 2500.0;

/// Upper bound on laminar segment points accepted from configuration.
pub const MAX_LAMINAR_POINTS: f64 = 1e6;

/// What to do when a point on a roughness curve fails to converge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveFailurePolicy {
    /// Stop and return the error
    #[default]
    Abort,
    /// Drop the point and keep the previous seed
    Skip,
}

/// Diagram generation settings.
///
/// The laminar segment bounds, the turbulent sweep start and the transition
/// marker are independent values; they are not derived from one another.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramSettings {
    pub laminar_start: f64,
    pub laminar_end: f64,
    pub laminar_step: f64,
    pub roughness: Vec<f64>,
    pub sweep: ReynoldsSweep,
    /// Seed for the first point of every curve
    pub seed: f64,
    pub newton: NewtonConfig,
    pub failure_policy: CurveFailurePolicy,
    /// Re at which the laminar/turbulent marker is drawn
    pub transition_marker: f64,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            laminar_start: LAMINAR_SEGMENT_START,
            laminar_end: LAMINAR_SEGMENT_END,
            laminar_step: 1.0,
            roughness: REFERENCE_ROUGHNESS.to_vec(),
            sweep: ReynoldsSweep::default(),
            seed: DEFAULT_TURBULENT_SEED,
            newton: NewtonConfig::default(),
            failure_policy: CurveFailurePolicy::Abort,
            transition_marker: LAMINAR_CUTOFF_RE,
        }
    }
}

impl DiagramSettings {
    pub fn validate(&self) -> MoodyResult<()> {
        if !(self.laminar_start.is_finite() && self.laminar_end.is_finite())
            || !(self.laminar_start > 0.0 && self.laminar_end > self.laminar_start)
        {
            return Err(MoodyError::InvalidConfiguration(format!(
                "Laminar range [{}, {}) must be finite, positive and ascending",
                self.laminar_start, self.laminar_end
            )));
        }
        if !(self.laminar_step.is_finite() && self.laminar_step > 0.0) {
            return Err(MoodyError::InvalidConfiguration(
                "Laminar step must be positive".to_string(),
            ));
        }
        let count = (self.laminar_end - self.laminar_start) / self.laminar_step;
        if count > MAX_LAMINAR_POINTS {
            return Err(MoodyError::InvalidConfiguration(format!(
                "Laminar step {} gives {:.0} points over [{}, {}), limit is {}",
                self.laminar_step,
                count.ceil(),
                self.laminar_start,
                self.laminar_end,
                MAX_LAMINAR_POINTS
            )));
        }
        if let Some(bad) = self
            .roughness
            .iter()
            .find(|e| !e.is_finite() || **e < 0.0)
        {
            return Err(MoodyError::InvalidConfiguration(format!(
                "Relative roughness must be finite and non-negative, got {bad}"
            )));
        }
        self.sweep.validate()
    }
}

/// One (Re, f) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub reynolds: f64,
    pub friction_factor: f64,
}

impl From<(f64, f64)> for CurvePoint {
    fn from((reynolds, friction_factor): (f64, f64)) -> Self {
        Self {
            reynolds,
            friction_factor,
        }
    }
}

/// Turbulent curve for one relative roughness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoughnessCurve {
    pub eps_d: f64,
    pub points: Vec<CurvePoint>,
    /// Re values dropped under [`CurveFailurePolicy::Skip`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<f64>,
    /// Newton iterations summed over the curve
    pub total_iterations: usize,
}

/// Everything needed to draw a Moody chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodyDiagram {
    pub laminar: Vec<CurvePoint>,
    pub curves: Vec<RoughnessCurve>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlay: Vec<CurvePoint>,
    pub transition_marker: f64,
}

/// Poiseuille points for Re in `[start, end)` at the given step.
pub fn laminar_segment(start: f64, end: f64, step: f64) -> Vec<CurvePoint> {
    (0..)
        .map(|i| start + i as f64 * step)
        .take_while(|re| *re < end)
        .map(|re| CurvePoint {
            reynolds: re,
            friction_factor: laminar_friction_factor(re),
        })
        .collect()
}

/// Warm-start accumulator threaded through one curve.
struct CurveAccumulator {
    seed: f64,
    points: Vec<CurvePoint>,
    skipped: Vec<f64>,
    total_iterations: usize,
}

/// Solve one roughness curve along ascending `reynolds`.
///
/// Every solve is seeded with the previous converged root; the first uses
/// `seed`. A failed point under [`CurveFailurePolicy::Skip`] leaves the seed
/// unchanged.
pub fn turbulent_curve(
    eps_d: f64,
    reynolds: &[f64],
    seed: f64,
    newton: &NewtonConfig,
    policy: CurveFailurePolicy,
) -> MoodyResult<RoughnessCurve> {
    let start = CurveAccumulator {
        seed,
        points: Vec::with_capacity(reynolds.len()),
        skipped: Vec::new(),
        total_iterations: 0,
    };

    let acc = reynolds
        .iter()
        .enumerate()
        .try_fold(start, |mut acc, (point_index, &re)| {
            match solve(acc.seed, re, eps_d, newton) {
                Ok(sol) => {
                    acc.seed = sol.root;
                    acc.total_iterations += sol.iterations;
                    acc.points.push(CurvePoint {
                        reynolds: re,
                        friction_factor: sol.root,
                    });
                    Ok(acc)
                }
                Err(source) => match policy {
                    CurveFailurePolicy::Abort => Err(MoodyError::CurveFailed {
                        eps_d,
                        point_index,
                        reynolds: re,
                        source,
                    }),
                    CurveFailurePolicy::Skip => {
                        warn!(eps_d, re, error = %source, "skipping unconverged point");
                        acc.skipped.push(re);
                        Ok(acc)
                    }
                },
            }
        })?;

    debug!(
        eps_d,
        points = acc.points.len(),
        skipped = acc.skipped.len(),
        iterations = acc.total_iterations,
        "roughness curve solved"
    );

    Ok(RoughnessCurve {
        eps_d,
        points: acc.points,
        skipped: acc.skipped,
        total_iterations: acc.total_iterations,
    })
}

/// Generate the full diagram data set.
///
/// Roughness curves are solved in parallel; the returned curves keep the
/// order of `settings.roughness`.
pub fn generate_diagram(
    settings: &DiagramSettings,
    overlay: &[CurvePoint],
) -> MoodyResult<MoodyDiagram> {
    settings.validate()?;

    let laminar = laminar_segment(
        settings.laminar_start,
        settings.laminar_end,
        settings.laminar_step,
    );
    let reynolds = settings.sweep.generate_points();

    info!(
        curves = settings.roughness.len(),
        sweep = %settings.sweep,
        "generating moody diagram"
    );

    let curves = settings
        .roughness
        .par_iter()
        .map(|&eps_d| {
            turbulent_curve(
                eps_d,
                &reynolds,
                settings.seed,
                &settings.newton,
                settings.failure_policy,
            )
        })
        .collect::<MoodyResult<Vec<_>>>()?;

    Ok(MoodyDiagram {
        laminar,
        curves,
        overlay: overlay.to_vec(),
        transition_marker: settings.transition_marker,
    })
}
