//! Darcy friction factor solver.
//!
//! This crate evaluates the Colebrook-White equation and its analytic
//! derivative, drives a scalar Newton-Raphson iteration on it, and selects
//! between the Poiseuille closed form (laminar) and the iterative solve
//! (turbulent) for a given Reynolds number.

pub mod colebrook;
pub mod error;
pub mod newton;
pub mod regime;

pub use colebrook::{derivative, residual};
pub use error::{SolverError, SolverResult};
pub use newton::{NewtonConfig, NewtonSolution, solve};
pub use regime::{
    DEFAULT_TURBULENT_SEED, FlowRegime, FrictionFactor, FrictionSettings, LAMINAR_CUTOFF_RE,
    friction_factor, laminar_friction_factor,
};
