//! ff-flow: pipe-flow samples and their friction / pressure-loss evaluation.
//!
//! A [`FlowSample`] holds the measured pipe and fluid properties. From those it
//! derives the Reynolds number and relative roughness, asks the solver for the
//! Darcy friction factor, and computes the Darcy-Weisbach pressure gradient.
//!
//! # Example
//!
//! ```no_run
//! use ff_flow::FlowSample;
//! use ff_solver::FrictionSettings;
//!
//! // 100 mm water line at 2 m/s, commercial steel (0.045 mm)
//! let sample = FlowSample::from_raw(0.1, 2.0, 1000.0, 1e-3, 0.045).unwrap();
//! let report = sample.evaluate(&FrictionSettings::default()).unwrap();
//! println!("f = {:.5}, dP/L = {:.1} Pa/m", report.friction.value, report.pressure_loss_pa_per_m);
//! ```

pub mod common;
pub mod error;
pub mod sample;

// Re-exports
pub use error::{FlowError, FlowResult};
pub use sample::{FlowReport, FlowSample};
