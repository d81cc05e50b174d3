//! Closed-form heat-loss models and the pipeline that post-processes them.
//!
//! Data flows through three pure stages:
//!
//! 1. A [`Scenario`] evaluates cumulative energy `Q(t)` and rate `q(t)` over a
//!    caller-chosen time grid, producing a [`TimeSeries`].
//! 2. [`annualize`] reduces the series to [`AnnualIncrement`]s at integer
//!    year boundaries.
//! 3. [`fluid_requirement`] divides each increment by a net specific enthalpy
//!    to give a [`FluidRequirement`].
//!
//! The moving-front scenario also exposes its temperature field as a
//! [`TemperatureProfile`].

mod annualize;
mod error;
mod fluid;
mod parameters;
mod profile;
mod scenario;
mod series;

#[cfg(test)]
mod test_support;

pub use annualize::{AnnualIncrement, AnnualizeConfig, annualize};
pub use error::HeatLossError;
pub use fluid::{
    FluidRequirement, InjectionCondition, NetEnthalpyError, SteamProperties, fluid_requirement,
    net_specific_enthalpy,
};
pub use parameters::ScenarioParameters;
pub use profile::{
    DimensionlessTemperature, TemperatureProfile, dimensionless_temperature, heat_integral,
    steady_state_temperature,
};
pub use scenario::{
    CappedGrowth, ConstantArea, GrowthPhase, HeatTransfer, LinearGrowth, MovingFront, Scenario,
    SteadyMovingFront,
};
pub use series::{MAX_GRID_POINTS, Sample, TimeSeries, uniform_grid};
