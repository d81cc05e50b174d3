//! Heat-loss and heat-storage models for thermal recovery.
//!
//! These models estimate how much heat a hot injected-fluid front (a steam
//! chamber, for example) loses to the colder medium around it, using exact
//! solutions of the 1-D conduction equation for four interface geometries.
//! The results can be reduced to yearly increments and converted into the
//! mass of steam needed to make up the loss.
//!
//! Every scenario model, and the [`Scenario`] enum that selects among them, is
//! also a [`twine_core::Model`] mapping a [`Time`] to a [`Sample`].
//!
//! # Example
//!
//! ```
//! use twine_heat_loss::models::thermal::heat_loss::{
//!     AnnualizeConfig, CappedGrowth, HeatTransfer, Scenario, ScenarioParameters,
//!     annualize, fluid_requirement, uniform_grid,
//! };
//! use twine_heat_loss::support::units::{AreaRate, SpecificEnthalpy};
//! use uom::si::{
//!     area::square_meter,
//!     available_energy::kilojoule_per_kilogram,
//!     diffusion_coefficient::square_meter_per_second,
//!     f64::{Area, DiffusionCoefficient, ThermalConductivity, ThermodynamicTemperature, Time},
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//!     time::day,
//! };
//!
//! let params = ScenarioParameters::new(
//!     ThermodynamicTemperature::new::<degree_celsius>(264.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(15.0),
//!     ThermalConductivity::new::<watt_per_meter_kelvin>(1.7),
//!     DiffusionCoefficient::new::<square_meter_per_second>(8.3e-7),
//! )?;
//!
//! // The chamber grows by 30 m² per day for four years, then stops.
//! let area_rate: AreaRate = Area::new::<square_meter>(30.0) / Time::new::<day>(1.0);
//! let scenario = Scenario::from(CappedGrowth::new(params, area_rate, Time::new::<day>(1460.0))?);
//!
//! let grid = uniform_grid(
//!     Time::new::<day>(0.0),
//!     Time::new::<day>(3650.0),
//!     Time::new::<day>(1.0),
//! )?;
//! let series = scenario.evaluate_series(&grid)?;
//!
//! let years = annualize(&series, &AnnualizeConfig::default().with_zero_baseline(true))?;
//! let steam = fluid_requirement(
//!     &years,
//!     SpecificEnthalpy::new::<kilojoule_per_kilogram>(2400.0),
//! )?;
//!
//! assert_eq!(steam.len(), 11);
//! assert!(steam[1..].iter().all(|row| row.mass.is_some()));
//! # Ok::<(), twine_heat_loss::models::thermal::heat_loss::HeatLossError>(())
//! ```

mod core;

pub use self::core::{
    AnnualIncrement, AnnualizeConfig, CappedGrowth, ConstantArea, DimensionlessTemperature,
    FluidRequirement, GrowthPhase, HeatLossError, HeatTransfer, InjectionCondition, LinearGrowth,
    MAX_GRID_POINTS, MovingFront, NetEnthalpyError, Sample, Scenario, ScenarioParameters,
    SteadyMovingFront, SteamProperties, TemperatureProfile, TimeSeries, annualize,
    dimensionless_temperature, fluid_requirement, heat_integral, net_specific_enthalpy,
    steady_state_temperature, uniform_grid,
};

use twine_core::Model;
use uom::si::f64::Time;

/// Implements [`Model`] for heat-transfer types by evaluating at a single time.
macro_rules! heat_transfer_model {
    ($($model:ty),+ $(,)?) => {
        $(
            impl Model for $model {
                type Input = Time;
                type Output = Sample;
                type Error = HeatLossError;

                fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
                    self.evaluate(*input)
                }
            }
        )+
    };
}

heat_transfer_model!(
    Scenario,
    ConstantArea,
    LinearGrowth,
    CappedGrowth,
    MovingFront,
    SteadyMovingFront,
);
