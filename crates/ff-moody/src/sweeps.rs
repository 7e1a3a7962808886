//! Reynolds number sweep generation.

use crate::error::{MoodyError, MoodyResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

pub const TURBULENT_SWEEP_START: f64 = 2000.0;
pub const TURBULENT_SWEEP_END: f64 = 1e8;
pub const TURBULENT_SWEEP_POINTS: usize = 50_000;

/// Ascending Reynolds number range sampled at `num_points` points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReynoldsSweep {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl Default for ReynoldsSweep {
    fn default() -> Self {
        Self {
            start: TURBULENT_SWEEP_START,
            end: TURBULENT_SWEEP_END,
            num_points: TURBULENT_SWEEP_POINTS,
            sweep_type: SweepType::Linear,
        }
    }
}

impl ReynoldsSweep {
    /// Create a validated sweep.
    pub fn new(start: f64, end: f64, num_points: usize, sweep_type: SweepType) -> MoodyResult<Self> {
        let sweep = Self {
            start,
            end,
            num_points,
            sweep_type,
        };
        sweep.validate()?;
        Ok(sweep)
    }

    pub fn validate(&self) -> MoodyResult<()> {
        if !(self.start.is_finite() && self.end.is_finite()) || self.start <= 0.0 {
            return Err(MoodyError::InvalidConfiguration(format!(
                "Sweep bounds must be finite and positive (start = {}, end = {})",
                self.start, self.end
            )));
        }
        if self.end <= self.start {
            return Err(MoodyError::InvalidConfiguration(
                "Sweep must be ascending: end must exceed start".to_string(),
            ));
        }
        if self.num_points < 2 {
            return Err(MoodyError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }
        Ok(())
    }

    /// Generate all points in the sweep, in ascending order.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for ReynoldsSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Re sweep from {} to {:e} ({} points, {})",
            self.start, self.end, self.num_points, self.sweep_type
        )
    }
}
