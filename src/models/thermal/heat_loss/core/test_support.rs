use thiserror::Error;
use uom::si::{
    area::square_meter,
    available_energy::kilojoule_per_kilogram,
    diffusion_coefficient::square_meter_per_second,
    f64::{
        Area, DiffusionCoefficient, Pressure, ThermalConductivity, ThermodynamicTemperature, Time,
    },
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::day,
};

use crate::support::units::{AreaRate, SpecificEnthalpy};

use super::{ScenarioParameters, SteamProperties};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Steam at 264 °C over a 15 °C overburden.
///
/// The thermal properties are given per day (K = 146 880 J/(m·day·K),
/// α = 0.0719971 m²/day), as is common in field work, and converted here.
pub(super) fn reservoir() -> ScenarioParameters {
    overburden(264.0, 15.0)
}

/// The [`reservoir`] overburden with no driving temperature difference.
pub(super) fn isothermal() -> ScenarioParameters {
    overburden(15.0, 15.0)
}

fn overburden(t_hot_c: f64, t_cold_c: f64) -> ScenarioParameters {
    ScenarioParameters::new(
        ThermodynamicTemperature::new::<degree_celsius>(t_hot_c),
        ThermodynamicTemperature::new::<degree_celsius>(t_cold_c),
        ThermalConductivity::new::<watt_per_meter_kelvin>(146_880.0 / SECONDS_PER_DAY),
        DiffusionCoefficient::new::<square_meter_per_second>(0.071_997_1 / SECONDS_PER_DAY),
    )
    .expect("overburden properties are valid")
}

/// Area growth rate in m²/day.
pub(super) fn area_rate(square_meters_per_day: f64) -> AreaRate {
    Area::new::<square_meter>(square_meters_per_day) / Time::new::<day>(1.0)
}

/// Fixed property values at 5 MPa, with liquid enthalpy `4.186 kJ/(kg·K) · T[°C]`.
pub(super) struct TableSteam;

impl SteamProperties for TableSteam {
    type Error = std::convert::Infallible;

    fn saturated_liquid_enthalpy(
        &self,
        _pressure: Pressure,
    ) -> Result<SpecificEnthalpy, Self::Error> {
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(1154.5))
    }

    fn saturated_vapor_enthalpy(
        &self,
        _pressure: Pressure,
    ) -> Result<SpecificEnthalpy, Self::Error> {
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(2794.2))
    }

    fn liquid_enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, Self::Error> {
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(
            4.186 * temperature.get::<degree_celsius>(),
        ))
    }
}

#[derive(Debug, Error)]
#[error("property table unavailable")]
pub(super) struct Unavailable;

/// A property source that always fails.
pub(super) struct FailingSteam;

impl SteamProperties for FailingSteam {
    type Error = Unavailable;

    fn saturated_liquid_enthalpy(
        &self,
        _pressure: Pressure,
    ) -> Result<SpecificEnthalpy, Self::Error> {
        Err(Unavailable)
    }

    fn saturated_vapor_enthalpy(
        &self,
        _pressure: Pressure,
    ) -> Result<SpecificEnthalpy, Self::Error> {
        Err(Unavailable)
    }

    fn liquid_enthalpy(
        &self,
        _temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, Self::Error> {
        Err(Unavailable)
    }
}
