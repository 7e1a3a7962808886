//! Flow sample with Darcy-Weisbach pressure loss.

use crate::common::{check_non_negative, check_positive};
use crate::error::FlowResult;
use ff_core::units::{Density, DynVisc, Length, Pressure, Velocity, kgpm3, m, mm, mps, pa, pas};
use ff_solver::{FrictionFactor, FrictionSettings, friction_factor};
use serde::{Deserialize, Serialize};

/// One measured pipe-flow operating point.
///
/// Construction validates every field, so the derived Reynolds number and
/// relative roughness are always defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSample {
    /// Pipe inner diameter
    pub diameter: Length,
    /// Mean flow velocity
    pub velocity: Velocity,
    /// Fluid density
    pub density: Density,
    /// Dynamic viscosity
    pub viscosity: DynVisc,
    /// Absolute wall roughness
    pub roughness: Length,
}

/// Evaluated sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowReport {
    pub reynolds: f64,
    pub relative_roughness: f64,
    pub friction: FrictionFactor,
    /// Pressure gradient along the pipe [Pa/m]
    pub pressure_loss_pa_per_m: f64,
}

impl FlowSample {
    /// Create a new sample.
    pub fn new(
        diameter: Length,
        velocity: Velocity,
        density: Density,
        viscosity: DynVisc,
        roughness: Length,
    ) -> FlowResult<Self> {
        check_positive(diameter.value, "diameter")?;
        check_positive(velocity.value, "velocity")?;
        check_positive(density.value, "density")?;
        check_positive(viscosity.value, "viscosity")?;
        check_non_negative(roughness.value, "roughness")?;

        Ok(Self {
            diameter,
            velocity,
            density,
            viscosity,
            roughness,
        })
    }

    /// Create a sample from record units: diameter [m], velocity [m/s],
    /// density [kg/m³], viscosity [Pa·s], roughness [mm].
    pub fn from_raw(
        diameter_m: f64,
        velocity_m_per_s: f64,
        density_kg_per_m3: f64,
        viscosity_pa_s: f64,
        roughness_mm: f64,
    ) -> FlowResult<Self> {
        Self::new(
            m(diameter_m),
            mps(velocity_m_per_s),
            kgpm3(density_kg_per_m3),
            pas(viscosity_pa_s),
            mm(roughness_mm),
        )
    }

    /// Re = D·v·ρ/μ
    pub fn reynolds(&self) -> f64 {
        self.diameter.value * self.velocity.value * self.density.value / self.viscosity.value
    }

    /// eps/D. Both lengths are held in metres, so record roughness given in
    /// millimetres is already scaled by 1/1000 here.
    pub fn relative_roughness(&self) -> f64 {
        self.roughness.value / self.diameter.value
    }

    /// Darcy-Weisbach gradient f·ρ·v²/(2·D) [Pa/m].
    pub fn pressure_loss_per_length(&self, friction_factor: f64) -> f64 {
        friction_factor * self.density.value * self.velocity.value.powi(2)
            / (2.0 * self.diameter.value)
    }

    /// Pressure drop over a straight run of the given length.
    pub fn pressure_drop(&self, friction_factor: f64, length: Length) -> Pressure {
        pa(self.pressure_loss_per_length(friction_factor) * length.value)
    }

    /// Friction factor for this sample.
    pub fn friction_factor(&self, settings: &FrictionSettings) -> FlowResult<FrictionFactor> {
        Ok(friction_factor(
            self.reynolds(),
            self.relative_roughness(),
            settings,
        )?)
    }

    /// Friction factor plus pressure loss.
    pub fn evaluate(&self, settings: &FrictionSettings) -> FlowResult<FlowReport> {
        let friction = self.friction_factor(settings)?;
        Ok(FlowReport {
            reynolds: self.reynolds(),
            relative_roughness: self.relative_roughness(),
            pressure_loss_pa_per_m: self.pressure_loss_per_length(friction.value),
            friction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlowError;
    use ff_solver::FlowRegime;

    fn water_line() -> FlowSample {
        FlowSample::from_raw(0.1, 2.0, 1000.0, 1e-3, 0.045).unwrap()
    }

    #[test]
    fn derived_quantities() {
        let s = water_line();
        assert!((s.reynolds() - 200_000.0).abs() < 1e-6);
        assert!((s.relative_roughness() - 4.5e-4).abs() < 1e-12);
    }

    #[test]
    fn turbulent_water_line() {
        let report = water_line().evaluate(&FrictionSettings::default()).unwrap();
        assert_eq!(report.friction.regime, FlowRegime::Turbulent);
        assert!((report.friction.value - 0.018_547).abs() < 1e-5);
        assert!((report.pressure_loss_pa_per_m - 370.947).abs() < 0.01);
    }

    #[test]
    fn laminar_capillary() {
        let s = FlowSample::from_raw(0.01, 0.1, 1000.0, 1e-3, 0.01).unwrap();
        let report = s.evaluate(&FrictionSettings::default()).unwrap();
        assert_eq!(report.friction.regime, FlowRegime::Laminar);
        assert!((report.friction.value - 0.064).abs() < 1e-12);
        assert!((report.pressure_loss_pa_per_m - 32.0).abs() < 1e-9);
    }

    #[test]
    fn pressure_drop_scales_with_length() {
        let s = water_line();
        let dp = s.pressure_drop(0.02, m(10.0));
        assert!((dp.value - 10.0 * s.pressure_loss_per_length(0.02)).abs() < 1e-9);
    }

    #[test]
    fn smooth_pipe_is_allowed() {
        let s = FlowSample::from_raw(0.05, 1.0, 998.0, 1e-3, 0.0).unwrap();
        assert_eq!(s.relative_roughness(), 0.0);
    }

    #[test]
    fn rejects_non_physical_fields() {
        assert!(matches!(
            FlowSample::from_raw(0.0, 1.0, 1000.0, 1e-3, 0.0),
            Err(FlowError::NonPhysical { what: "diameter", .. })
        ));
        assert!(matches!(
            FlowSample::from_raw(0.1, 1.0, 1000.0, 0.0, 0.0),
            Err(FlowError::NonPhysical { what: "viscosity", .. })
        ));
        assert!(FlowSample::from_raw(0.1, -1.0, 1000.0, 1e-3, 0.0).is_err());
        assert!(FlowSample::from_raw(0.1, 1.0, 1000.0, 1e-3, -0.1).is_err());
        assert!(FlowSample::from_raw(0.1, 1.0, f64::NAN, 1e-3, 0.1).is_err());
    }
}
