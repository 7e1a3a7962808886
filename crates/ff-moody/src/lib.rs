//! ff-moody: Moody diagram data generation.
//!
//! Provides:
//! - Reynolds number sweeps (linear or logarithmic spacing)
//! - The Poiseuille laminar segment
//! - One turbulent Colebrook-White curve per relative roughness, each solved
//!   along ascending Re with the previous root as the next seed
//! - An overlay of externally supplied (Re, f) points
//!
//! Curves are independent of each other and are generated in parallel. The
//! output is plain data; rendering is left to whatever consumes it.
//!
//! # Example
//!
//! ```no_run
//! use ff_moody::{DiagramSettings, generate_diagram};
//!
//! let diagram = generate_diagram(&DiagramSettings::default(), &[]).unwrap();
//! for curve in &diagram.curves {
//!     println!("eps/D = {:e}: {} points", curve.eps_d, curve.points.len());
//! }
//! ```

pub mod diagram;
pub mod error;
pub mod sweeps;

// Re-exports for ergonomics
pub use diagram::{
    CurveFailurePolicy, CurvePoint, DiagramSettings, LAMINAR_SEGMENT_END, LAMINAR_SEGMENT_START,
    MAX_LAMINAR_POINTS, MoodyDiagram, REFERENCE_ROUGHNESS, RoughnessCurve, generate_diagram,
    laminar_segment, turbulent_curve,
};
pub use error::{MoodyError, MoodyResult};
pub use sweeps::{
    ReynoldsSweep, SweepType, TURBULENT_SWEEP_END, TURBULENT_SWEEP_POINTS, TURBULENT_SWEEP_START,
};
