use std::f64::consts::PI;

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::AreaRate,
};
use uom::si::f64::{Area, Energy, Power, Time};

use super::{HeatTransfer, joules, seconds, watts};
use crate::models::thermal::heat_loss::core::{
    HeatLossError, ScenarioParameters, error::constrained,
};

/// Conduction through a contact area that grows linearly from zero.
///
/// With `A(t) = Ȧ t`, superposing the constant-area solution over each newly
/// exposed strip gives
///
/// ```text
/// Q(t) = (4/3) ΔT K Ȧ t^1.5 / √(πα)
/// q(t) = 2 ΔT K Ȧ √(t / (πα))
/// ```
///
/// Both vanish at `t = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGrowth {
    params: ScenarioParameters,
    area_rate: Constrained<AreaRate, NonNegative>,
}

impl LinearGrowth {
    /// Creates a linear-growth model.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `area_rate` is negative or `NaN`.
    pub fn new(params: ScenarioParameters, area_rate: AreaRate) -> Result<Self, HeatLossError> {
        Ok(Self {
            params,
            area_rate: constrained("area growth rate", area_rate)?,
        })
    }

    #[must_use]
    pub fn params(&self) -> &ScenarioParameters {
        &self.params
    }

    #[must_use]
    pub fn area_rate(&self) -> AreaRate {
        self.area_rate.into_inner()
    }

    /// Contact area at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `t` is negative or not finite.
    pub fn area_at(&self, t: Time) -> Result<Area, HeatLossError> {
        seconds(t)?;
        Ok(self.area_rate() * t)
    }

    /// `ΔT K Ȧ / √(πα)` in SI base units, shared with [`super::CappedGrowth`].
    pub(super) fn coefficient(&self) -> f64 {
        // `AreaRate` stores m²/s.
        self.params.driving_conductance() * self.area_rate().value / self.params.sqrt_pi_alpha()
    }

    /// `Q` in joules for `t` in seconds.
    pub(super) fn energy_si(&self, t: f64) -> f64 {
        4.0 / 3.0 * self.coefficient() * t.powf(1.5)
    }

    /// `q` in watts for `t` in seconds.
    pub(super) fn rate_si(&self, t: f64) -> f64 {
        2.0 * self.coefficient() * t.sqrt()
    }
}

impl HeatTransfer for LinearGrowth {
    fn label(&self) -> &'static str {
        "linear growth"
    }

    fn cumulative_energy(&self, t: Time) -> Result<Energy, HeatLossError> {
        Ok(joules(self.energy_si(seconds(t)?)))
    }

    fn rate(&self, t: Time) -> Result<Option<Power>, HeatLossError> {
        Ok(Some(watts(self.rate_si(seconds(t)?))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, energy::joule, power::watt, time::day};

    use crate::models::thermal::heat_loss::core::test_support::{area_rate, reservoir};

    fn model() -> LinearGrowth {
        LinearGrowth::new(reservoir(), area_rate(27.4)).unwrap()
    }

    #[test]
    fn closed_form() {
        let t = Time::new::<day>(1000.0);
        // Day-based inputs: ΔT = 249, K = 146880, Ȧ = 27.4, α = 0.0719971.
        let c = 249.0 * 146_880.0 * 27.4 / (PI * 0.071_997_1_f64).sqrt();

        let energy = model().cumulative_energy(t).unwrap();
        // Power comes out per second; convert the day-based expectation.
        let rate = model().rate(t).unwrap().unwrap();

        assert_relative_eq!(
            energy.get::<joule>(),
            4.0 / 3.0 * c * 1000.0_f64.powf(1.5),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            rate.get::<watt>() * 86_400.0,
            2.0 * c * 1000.0_f64.sqrt(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn starts_from_rest() {
        let zero = Time::new::<day>(0.0);
        assert_eq!(model().cumulative_energy(zero).unwrap().get::<joule>(), 0.0);
        assert_eq!(model().rate(zero).unwrap().unwrap().get::<watt>(), 0.0);
        assert_eq!(model().area_at(zero).unwrap().get::<square_meter>(), 0.0);
    }

    #[test]
    fn area_grows_linearly() {
        let area = model().area_at(Time::new::<day>(365.0)).unwrap();
        assert_relative_eq!(area.get::<square_meter>(), 27.4 * 365.0, max_relative = 1e-12);
    }

    #[test]
    fn rejects_negative_rate() {
        assert!(LinearGrowth::new(reservoir(), area_rate(-1.0)).is_err());
    }
}
