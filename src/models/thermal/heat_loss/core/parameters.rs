use std::f64::consts::PI;

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::TemperatureDifference,
};
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{DiffusionCoefficient, TemperatureInterval, ThermalConductivity, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{HeatLossError, error::constrained};

/// Physical inputs shared by every heat-loss scenario.
///
/// Holds the hot front temperature, the cold far-field temperature, and the
/// thermal properties of the medium heat is lost to (typically the reservoir
/// overburden). Geometry belongs to the scenario model that owns these
/// parameters.
///
/// `t_hot == t_cold` is a valid, degenerate input: every model then reports
/// an identically zero curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioParameters {
    t_hot: ThermodynamicTemperature,
    t_cold: ThermodynamicTemperature,
    conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    diffusivity: Constrained<DiffusionCoefficient, StrictlyPositive>,
}

impl ScenarioParameters {
    /// Validates and bundles the shared scenario inputs.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if either temperature is not
    /// finite, or if the conductivity or diffusivity is not strictly positive.
    pub fn new(
        t_hot: ThermodynamicTemperature,
        t_cold: ThermodynamicTemperature,
        conductivity: ThermalConductivity,
        diffusivity: DiffusionCoefficient,
    ) -> Result<Self, HeatLossError> {
        for (name, temperature) in [("hot temperature", t_hot), ("cold temperature", t_cold)] {
            if !temperature.get::<kelvin>().is_finite() {
                return Err(HeatLossError::invalid_domain(format!(
                    "{name}: value must be finite"
                )));
            }
        }

        Ok(Self {
            t_hot,
            t_cold,
            conductivity: constrained("thermal conductivity", conductivity)?,
            diffusivity: constrained("thermal diffusivity", diffusivity)?,
        })
    }

    /// Temperature of the hot interface or front.
    #[must_use]
    pub fn t_hot(&self) -> ThermodynamicTemperature {
        self.t_hot
    }

    /// Temperature of the undisturbed medium.
    #[must_use]
    pub fn t_cold(&self) -> ThermodynamicTemperature {
        self.t_cold
    }

    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        self.conductivity.into_inner()
    }

    #[must_use]
    pub fn diffusivity(&self) -> DiffusionCoefficient {
        self.diffusivity.into_inner()
    }

    /// Driving temperature difference, `t_hot - t_cold`.
    #[must_use]
    pub fn delta_t(&self) -> TemperatureInterval {
        self.t_hot.minus(self.t_cold)
    }

    /// Returns `true` when there is no driving force for heat transfer.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.delta_t().get::<delta_kelvin>() == 0.0
    }

    /// `ΔT·K` in SI base units (W/m).
    pub(super) fn driving_conductance(&self) -> f64 {
        self.delta_t().get::<delta_kelvin>() * self.conductivity().get::<watt_per_meter_kelvin>()
    }

    /// Diffusivity in SI base units (m²/s).
    pub(super) fn alpha(&self) -> f64 {
        self.diffusivity().get::<square_meter_per_second>()
    }

    /// `√(πα)` in SI base units.
    pub(super) fn sqrt_pi_alpha(&self) -> f64 {
        (PI * self.alpha()).sqrt()
    }
}
