//! Scalar Newton-Raphson iteration on the Colebrook-White residual.

use crate::colebrook::{derivative, residual};
use crate::error::{SolverError, SolverResult};
use tracing::trace;

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonConfig {
    /// Iteration cap. Failure is reported once the count reaches `max_iterations - 1`.
    pub max_iterations: usize,
    /// Convergence threshold on the magnitude of the Newton step
    pub tolerance: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-9,
        }
    }
}

/// Converged Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSolution {
    /// Friction factor root
    pub root: f64,
    /// Completed iterations, including the one that met the tolerance
    pub iterations: usize,
    /// Magnitude of the final step
    pub last_step: f64,
}

/// Scratch state owned by a single `solve` call.
struct SolverState {
    x: f64,
    iteration: usize,
    last_step: f64,
}

impl SolverState {
    fn seeded(initial_guess: f64) -> Self {
        Self {
            x: initial_guess.abs(),
            iteration: 0,
            last_step: f64::INFINITY,
        }
    }

    fn advance(&mut self, step: f64) {
        self.x -= step;
        self.iteration += 1;
        self.last_step = step.abs();
    }
}

/// Solve the Colebrook-White equation for the friction factor.
///
/// The seed is replaced by its absolute value. No step damping or range
/// clamping is applied, so a poor seed can diverge; that surfaces as
/// [`SolverError::NonConvergence`] rather than an unconverged root.
pub fn solve(
    initial_guess: f64,
    re: f64,
    eps_d: f64,
    config: &NewtonConfig,
) -> SolverResult<NewtonSolution> {
    let mut state = SolverState::seeded(initial_guess);

    loop {
        let step = residual(state.x, re, eps_d) / derivative(state.x, re, eps_d);
        state.advance(step);

        trace!(
            iteration = state.iteration,
            x = state.x,
            step,
            "colebrook newton step"
        );

        if state.last_step < config.tolerance {
            return Ok(NewtonSolution {
                root: state.x,
                iterations: state.iteration,
                last_step: state.last_step,
            });
        }

        // Also catches NaN steps, which never compare below tolerance
        if state.iteration + 1 >= config.max_iterations {
            return Err(SolverError::NonConvergence {
                iterations: state.iteration,
                last_step: state.last_step,
                last_iterate: state.x,
            });
        }
    }
}
