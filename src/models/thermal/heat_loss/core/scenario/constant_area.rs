use std::f64::consts::PI;

use crate::support::constraint::{Constrained, NonNegative};
use uom::si::{
    area::square_meter,
    f64::{Area, Energy, Power, Time},
};

use super::{HeatTransfer, joules, seconds, watts};
use crate::models::thermal::heat_loss::core::{
    HeatLossError, ScenarioParameters, error::constrained,
};

/// Conduction through a contact area that does not change with time.
///
/// The medium behind the interface is treated as a semi-infinite solid whose
/// surface is stepped from `T_cold` to `T_hot` at `t = 0`:
///
/// ```text
/// Q(t) = 2 ΔT K A √(t / (πα))
/// q(t) = ΔT K A / √(παt)
/// ```
///
/// The rate is infinite at `t = 0`, so `t = 0` lies outside this model's
/// domain and is rejected rather than reported as `Q(0) = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantArea {
    params: ScenarioParameters,
    area: Constrained<Area, NonNegative>,
}

impl ConstantArea {
    /// Creates a constant-area model.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `area` is negative or `NaN`.
    pub fn new(params: ScenarioParameters, area: Area) -> Result<Self, HeatLossError> {
        Ok(Self {
            params,
            area: constrained("contact area", area)?,
        })
    }

    #[must_use]
    pub fn params(&self) -> &ScenarioParameters {
        &self.params
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area.into_inner()
    }

    /// `ΔT K A` in SI base units (W·m).
    fn strength(&self) -> f64 {
        self.params.driving_conductance() * self.area().get::<square_meter>()
    }

    /// Checks `t` and excludes the singular endpoint.
    fn positive_seconds(t: Time) -> Result<f64, HeatLossError> {
        let t = seconds(t)?;
        if t == 0.0 {
            return Err(HeatLossError::invalid_domain(
                "constant-area model is undefined at t = 0",
            ));
        }
        Ok(t)
    }
}

impl HeatTransfer for ConstantArea {
    fn label(&self) -> &'static str {
        "constant area"
    }

    fn cumulative_energy(&self, t: Time) -> Result<Energy, HeatLossError> {
        let t = Self::positive_seconds(t)?;
        Ok(joules(
            2.0 * self.strength() * (t / (PI * self.params.alpha())).sqrt(),
        ))
    }

    fn rate(&self, t: Time) -> Result<Option<Power>, HeatLossError> {
        let t = Self::positive_seconds(t)?;
        Ok(Some(watts(
            self.strength() / (PI * self.params.alpha() * t).sqrt(),
        )))
    }
}
