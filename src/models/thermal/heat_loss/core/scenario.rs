//! Closed-form heat-transfer scenarios.
//!
//! Each scenario answers the same question, "how much heat has crossed the
//! interface by time `t`, and how fast is it crossing now?", for a different
//! interface geometry:
//!
//! - [`ConstantArea`]: a fixed contact area.
//! - [`LinearGrowth`]: a contact area growing at a constant rate.
//! - [`CappedGrowth`]: linear growth that stops at a cap time.
//! - [`MovingFront`]: heat stored ahead of a front advancing at constant velocity.
//! - [`SteadyMovingFront`]: the long-time limit of [`MovingFront`].
//!
//! [`Scenario`] selects one of these at construction time so calling code can
//! treat them uniformly.

mod capped_growth;
mod constant_area;
mod linear_growth;
mod moving_front;

pub use capped_growth::{CappedGrowth, GrowthPhase};
pub use constant_area::ConstantArea;
pub use linear_growth::LinearGrowth;
pub use moving_front::{MovingFront, SteadyMovingFront};

use tracing::debug;
use uom::si::{
    energy::joule,
    f64::{Energy, Power, Time},
    power::watt,
    time::second,
};

use super::{
    HeatLossError, Sample, TimeSeries,
    series::{check_axis, check_time},
};

/// Cumulative and instantaneous heat transfer for one interface geometry.
///
/// Implementations are pure: evaluating twice with the same input returns
/// bit-identical output.
pub trait HeatTransfer {
    /// Short human-readable name of the scenario.
    fn label(&self) -> &'static str;

    /// Cumulative energy `Q(t)` transferred between time zero and `t`.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `t` is negative, not finite,
    /// or outside the scenario's domain.
    fn cumulative_energy(&self, t: Time) -> Result<Energy, HeatLossError>;

    /// Instantaneous heat-transfer rate `q(t) = dQ/dt`.
    ///
    /// Returns `Ok(None)` where the rate is singular.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] under the same conditions as
    /// [`HeatTransfer::cumulative_energy`].
    fn rate(&self, t: Time) -> Result<Option<Power>, HeatLossError>;

    /// Evaluates both `Q(t)` and `q(t)`.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `t` is outside the domain.
    fn evaluate(&self, t: Time) -> Result<Sample, HeatLossError> {
        Ok(Sample {
            time: t,
            energy: self.cumulative_energy(t)?,
            rate: self.rate(t)?,
        })
    }

    /// Evaluates the scenario over a caller-chosen time grid.
    ///
    /// The whole grid is rejected if any time is invalid; no partial series is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `times` is empty, contains a
    /// negative or non-finite value, is not strictly increasing, or contains a
    /// time outside the scenario's domain.
    fn evaluate_series(&self, times: &[Time]) -> Result<TimeSeries, HeatLossError> {
        check_axis(times.iter().copied())?;

        let samples = times
            .iter()
            .map(|&t| self.evaluate(t))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            scenario = self.label(),
            samples = samples.len(),
            "evaluated heat-transfer series"
        );

        Ok(TimeSeries::from_checked(samples))
    }
}

/// A heat-transfer scenario selected at construction time.
///
/// # Example
///
/// ```
/// use twine_heat_loss::models::thermal::heat_loss::{
///     HeatTransfer, LinearGrowth, Scenario, ScenarioParameters,
/// };
/// use uom::si::{
///     area::square_meter,
///     diffusion_coefficient::square_meter_per_second,
///     f64::{Area, DiffusionCoefficient, ThermalConductivity, ThermodynamicTemperature, Time},
///     thermal_conductivity::watt_per_meter_kelvin,
///     thermodynamic_temperature::degree_celsius,
///     time::day,
/// };
///
/// let params = ScenarioParameters::new(
///     ThermodynamicTemperature::new::<degree_celsius>(264.0),
///     ThermodynamicTemperature::new::<degree_celsius>(15.0),
///     ThermalConductivity::new::<watt_per_meter_kelvin>(1.7),
///     DiffusionCoefficient::new::<square_meter_per_second>(8.3e-7),
/// )
/// .unwrap();
///
/// let area_rate = Area::new::<square_meter>(86.4) / Time::new::<day>(1.0);
/// let scenario = Scenario::from(LinearGrowth::new(params, area_rate).unwrap());
///
/// let grid: Vec<Time> = (0..=10).map(|y| Time::new::<day>(365.0 * f64::from(y))).collect();
/// let series = scenario.evaluate_series(&grid).unwrap();
/// assert_eq!(series.len(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scenario {
    ConstantArea(ConstantArea),
    LinearGrowth(LinearGrowth),
    CappedGrowth(CappedGrowth),
    MovingFront(MovingFront),
    SteadyMovingFront(SteadyMovingFront),
}

impl HeatTransfer for Scenario {
    fn label(&self) -> &'static str {
        match self {
            Self::ConstantArea(model) => model.label(),
            Self::LinearGrowth(model) => model.label(),
            Self::CappedGrowth(model) => model.label(),
            Self::MovingFront(model) => model.label(),
            Self::SteadyMovingFront(model) => model.label(),
        }
    }

    fn cumulative_energy(&self, t: Time) -> Result<Energy, HeatLossError> {
        match self {
            Self::ConstantArea(model) => model.cumulative_energy(t),
            Self::LinearGrowth(model) => model.cumulative_energy(t),
            Self::CappedGrowth(model) => model.cumulative_energy(t),
            Self::MovingFront(model) => model.cumulative_energy(t),
            Self::SteadyMovingFront(model) => model.cumulative_energy(t),
        }
    }

    fn rate(&self, t: Time) -> Result<Option<Power>, HeatLossError> {
        match self {
            Self::ConstantArea(model) => model.rate(t),
            Self::LinearGrowth(model) => model.rate(t),
            Self::CappedGrowth(model) => model.rate(t),
            Self::MovingFront(model) => model.rate(t),
            Self::SteadyMovingFront(model) => model.rate(t),
        }
    }
}

impl From<ConstantArea> for Scenario {
    fn from(model: ConstantArea) -> Self {
        Self::ConstantArea(model)
    }
}

impl From<LinearGrowth> for Scenario {
    fn from(model: LinearGrowth) -> Self {
        Self::LinearGrowth(model)
    }
}

impl From<CappedGrowth> for Scenario {
    fn from(model: CappedGrowth) -> Self {
        Self::CappedGrowth(model)
    }
}

impl From<MovingFront> for Scenario {
    fn from(model: MovingFront) -> Self {
        Self::MovingFront(model)
    }
}

impl From<SteadyMovingFront> for Scenario {
    fn from(model: SteadyMovingFront) -> Self {
        Self::SteadyMovingFront(model)
    }
}

/// Checks `t` and returns it in seconds.
fn seconds(t: Time) -> Result<f64, HeatLossError> {
    check_time(t)?;
    Ok(t.get::<second>())
}

fn joules(value: f64) -> Energy {
    Energy::new::<joule>(value)
}

fn watts(value: f64) -> Power {
    Power::new::<watt>(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, Velocity},
        time::day,
        velocity::meter_per_second,
    };

    use crate::models::thermal::heat_loss::core::test_support::{area_rate, isothermal, reservoir};

    fn all_scenarios() -> Vec<Scenario> {
        let params = reservoir();
        let area = Area::new::<square_meter>(40_000.0);
        let velocity = Velocity::new::<meter_per_second>(0.1 / 86_400.0);
        let front = MovingFront::new(params, area, velocity).unwrap();

        vec![
            ConstantArea::new(params, area).unwrap().into(),
            LinearGrowth::new(params, area_rate(30.0)).unwrap().into(),
            CappedGrowth::new(params, area_rate(30.0), Time::new::<day>(1460.0))
                .unwrap()
                .into(),
            front.into(),
            front.steady_state().into(),
        ]
    }

    fn grid() -> Vec<Time> {
        (1..=3650).map(|d| Time::new::<day>(f64::from(d))).collect()
    }

    #[test]
    fn cumulative_energy_never_decreases() {
        for scenario in all_scenarios() {
            let series = scenario.evaluate_series(&grid()).unwrap();
            for pair in series.samples().windows(2) {
                assert!(
                    pair[1].energy >= pair[0].energy,
                    "{} decreased at {:?}",
                    scenario.label(),
                    pair[1].time
                );
            }
        }
    }

    #[test]
    fn rates_are_non_negative() {
        for scenario in all_scenarios() {
            for sample in scenario.evaluate_series(&grid()).unwrap().iter() {
                let rate = sample.rate.expect("rate is defined for t > 0");
                assert!(rate.get::<watt>() >= 0.0, "{}", scenario.label());
            }
        }
    }

    #[test]
    fn evaluation_is_pure() {
        for scenario in all_scenarios() {
            let first = scenario.evaluate_series(&grid()).unwrap();
            let again = scenario.evaluate_series(&grid()).unwrap();
            for (a, b) in first.iter().zip(again.iter()) {
                assert_eq!(a.energy.value.to_bits(), b.energy.value.to_bits());
                assert_eq!(
                    a.rate.map(|q| q.value.to_bits()),
                    b.rate.map(|q| q.value.to_bits())
                );
            }
        }
    }

    #[test]
    fn growth_and_transient_start_from_zero() {
        for scenario in &all_scenarios()[1..4] {
            let energy = scenario.cumulative_energy(Time::new::<day>(0.0)).unwrap();
            assert_eq!(energy.get::<joule>(), 0.0, "{}", scenario.label());
        }
    }

    #[test]
    fn constant_area_rejects_grid_starting_at_zero() {
        let scenario = all_scenarios()[0];
        let mut times = grid();
        times.insert(0, Time::new::<day>(0.0));

        assert!(scenario.evaluate_series(&times).unwrap_err().is_invalid_domain());
    }

    #[test]
    fn malformed_grids_are_rejected() {
        for scenario in all_scenarios() {
            assert!(scenario.evaluate_series(&[]).is_err());
            assert!(
                scenario
                    .evaluate_series(&[Time::new::<day>(2.0), Time::new::<day>(1.0)])
                    .is_err()
            );
            assert!(scenario.cumulative_energy(Time::new::<day>(-1.0)).is_err());
        }
    }

    #[test]
    fn degenerate_temperatures_give_zero_curves() {
        let params = isothermal();
        let area = Area::new::<square_meter>(40_000.0);
        let front =
            MovingFront::new(params, area, Velocity::new::<meter_per_second>(1e-6)).unwrap();
        let scenarios: Vec<Scenario> = vec![
            ConstantArea::new(params, area).unwrap().into(),
            LinearGrowth::new(params, area_rate(30.0)).unwrap().into(),
            CappedGrowth::new(params, area_rate(30.0), Time::new::<day>(100.0))
                .unwrap()
                .into(),
            front.into(),
            front.steady_state().into(),
        ];

        for scenario in scenarios {
            for sample in scenario.evaluate_series(&grid()).unwrap().iter() {
                assert_relative_eq!(sample.energy.get::<joule>(), 0.0);
                assert_relative_eq!(sample.rate.map_or(f64::NAN, |q| q.get::<watt>()), 0.0);
            }
        }
    }
}
