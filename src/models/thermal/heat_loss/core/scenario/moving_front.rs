use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};
use uom::si::{
    area::square_meter,
    f64::{Area, Energy, Power, Time, Velocity},
    velocity::meter_per_second,
};

use super::{HeatTransfer, joules, seconds, watts};
use crate::models::thermal::heat_loss::core::{
    HeatLossError,
    ScenarioParameters,
    TemperatureProfile,
    error::constrained,
    profile::{heat_integral_slope, heat_integral_unchecked},
};

/// Heat stored in the medium ahead of a front advancing at constant velocity.
///
/// With cross-sectional area `A`, front velocity `U` and `t* = U²t/α`:
///
/// ```text
/// Q(t) = K A ΔT / U · HI(t*)
/// q(t) = K A ΔT U / α · HI'(t*),   HI'(t*) = e^(−t*/4)/√(πt*) − ½ erfc(√t*/2)
/// ```
///
/// See [`heat_integral`](super::super::heat_integral) for `HI`. The rate is
/// obtained by differentiating `HI` analytically; it is infinite at `t = 0`
/// and reported as `None` there.
///
/// As `t* → ∞`, `HI → 1` and `Q` approaches the steady-state capacity
/// `K A ΔT / U` of [`SteadyMovingFront`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingFront {
    params: ScenarioParameters,
    area: Constrained<Area, NonNegative>,
    velocity: Constrained<Velocity, StrictlyPositive>,
}

impl MovingFront {
    /// Creates a transient moving-front model.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `area` is negative or `NaN`,
    /// or if `velocity` is not strictly positive.
    pub fn new(
        params: ScenarioParameters,
        area: Area,
        velocity: Velocity,
    ) -> Result<Self, HeatLossError> {
        Ok(Self {
            params,
            area: constrained("cross-sectional area", area)?,
            velocity: constrained("front velocity", velocity)?,
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

    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity.into_inner()
    }

    /// Dimensionless time `t* = U²t/α`.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `t` is negative or not finite.
    pub fn dimensionless_time(&self, t: Time) -> Result<f64, HeatLossError> {
        Ok(self.u().powi(2) * seconds(t)? / self.params.alpha())
    }

    /// Energy stored ahead of the front once the profile is fully developed.
    #[must_use]
    pub fn steady_state_energy(&self) -> Energy {
        joules(self.capacity())
    }

    /// The steady-state limit of this model.
    #[must_use]
    pub fn steady_state(&self) -> SteadyMovingFront {
        SteadyMovingFront { front: *self }
    }

    /// Temperature field ahead of this front.
    #[must_use]
    pub fn profile(&self) -> TemperatureProfile {
        TemperatureProfile::from_constrained(self.params, self.velocity)
    }

    fn u(&self) -> f64 {
        self.velocity().get::<meter_per_second>()
    }

    /// `K A ΔT / U` in joules.
    fn capacity(&self) -> f64 {
        self.params.driving_conductance() * self.area().get::<square_meter>() / self.u()
    }
}

impl HeatTransfer for MovingFront {
    fn label(&self) -> &'static str {
        "moving front"
    }

    fn cumulative_energy(&self, t: Time) -> Result<Energy, HeatLossError> {
        let t_star = self.dimensionless_time(t)?;
        Ok(joules(self.capacity() * heat_integral_unchecked(t_star)))
    }

    fn rate(&self, t: Time) -> Result<Option<Power>, HeatLossError> {
        let t_star = self.dimensionless_time(t)?;
        let capacity = self.capacity();

        if capacity == 0.0 {
            return Ok(Some(watts(0.0)));
        }
        if t_star == 0.0 {
            return Ok(None);
        }

        // dQ/dt = capacity · HI'(t*) · dt*/dt, with dt*/dt = U²/α.
        let dt_star_dt = self.u().powi(2) / self.params.alpha();
        Ok(Some(watts(capacity * heat_integral_slope(t_star) * dt_star_dt)))
    }
}

/// The fully developed moving-front profile.
///
/// Stores a constant `Q_ss = K A ΔT / U` and accumulates nothing further,
/// so `q_ss = 0`. It is the upper bound approached by [`MovingFront`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyMovingFront {
    front: MovingFront,
}

impl SteadyMovingFront {
    /// Creates a steady-state moving-front model.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] under the same conditions as
    /// [`MovingFront::new`].
    pub fn new(
        params: ScenarioParameters,
        area: Area,
        velocity: Velocity,
    ) -> Result<Self, HeatLossError> {
        Ok(MovingFront::new(params, area, velocity)?.steady_state())
    }

    /// The transient model this is the limit of.
    #[must_use]
    pub fn transient(&self) -> MovingFront {
        self.front
    }
}

impl HeatTransfer for SteadyMovingFront {
    fn label(&self) -> &'static str {
        "moving front (steady state)"
    }

    fn cumulative_energy(&self, t: Time) -> Result<Energy, HeatLossError> {
        seconds(t)?;
        Ok(self.front.steady_state_energy())
    }

    fn rate(&self, t: Time) -> Result<Option<Power>, HeatLossError> {
        seconds(t)?;
        Ok(Some(watts(0.0)))
    }
}
