//! Temperature profile ahead of a front advancing at constant velocity.
//!
//! In a frame moving with the front, the 1-D conduction equation for a medium
//! initially at `T_cold`, with the front held at `T_hot`, has the closed-form
//! solution
//!
//! ```text
//! T*(ζ*, t*) = ½ [erfc((ζ* + t*) / √(4t*)) + e^(−ζ*) · erfc((ζ* − t*) / √(4t*))]
//! ```
//!
//! where `ζ* = Uζ/α` is the dimensionless distance ahead of the front,
//! `t* = U²t/α` is the dimensionless time, and `T* = (T − T_cold) / (T_hot − T_cold)`.
//! As `t* → ∞` the profile relaxes to the steady state `T*_ss = e^(−ζ*)`.
//!
//! Integrating `T*` over `ζ*` gives the heat integral [`heat_integral`], which
//! drives the moving-front heat-storage model.

use std::{f64::consts::PI, ops::Deref};

use crate::support::constraint::{Constrained, StrictlyPositive, UnitInterval};
use libm::erfc;
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{Length, Ratio, ThermodynamicTemperature, Time, Velocity},
    length::meter,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
    time::second,
    velocity::meter_per_second,
};

use super::{HeatLossError, ScenarioParameters, error::constrained};

/// A normalized temperature `(T − T_cold) / (T_hot − T_cold)` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionlessTemperature(Constrained<Ratio, UnitInterval>);

impl DimensionlessTemperature {
    /// Clamps away rounding excursions outside `[0, 1]` and wraps the value.
    fn from_raw(value: f64) -> Result<Self, HeatLossError> {
        let value = Ratio::new::<ratio>(value.clamp(0.0, 1.0));
        Ok(Self(constrained("dimensionless temperature", value)?))
    }

    /// Returns the normalized temperature as a plain number.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.as_ref().get::<ratio>()
    }
}

impl Deref for DimensionlessTemperature {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Evaluates the transient profile `T*(ζ*, t*)`.
///
/// # Errors
///
/// Returns [`HeatLossError::InvalidDomain`] if `zeta` is negative or not
/// finite, or if `t_star` is not finite and strictly positive. The profile
/// is undefined at `t* = 0`.
///
/// # Example
///
/// ```
/// use twine_heat_loss::models::thermal::heat_loss::{
///     dimensionless_temperature, steady_state_temperature,
/// };
///
/// // The front itself is always at the hot temperature.
/// let at_front = dimensionless_temperature(0.0, 2.0).unwrap();
/// assert!((at_front.value() - 1.0).abs() < 1e-12);
///
/// // Long after injection starts the profile is the steady exponential.
/// let late = dimensionless_temperature(1.5, 1e4).unwrap();
/// let steady = steady_state_temperature(1.5).unwrap();
/// assert!((late.value() - steady.value()).abs() < 1e-9);
/// ```
pub fn dimensionless_temperature(
    zeta: f64,
    t_star: f64,
) -> Result<DimensionlessTemperature, HeatLossError> {
    check_zeta(zeta)?;
    let t_star = constrained::<_, StrictlyPositive>("dimensionless time", t_star)?.into_inner();
    if !t_star.is_finite() {
        return Err(HeatLossError::invalid_domain(
            "dimensionless time: value must be finite",
        ));
    }

    let spread = (4.0 * t_star).sqrt();
    let value = 0.5
        * (erfc((zeta + t_star) / spread) + (-zeta).exp() * erfc((zeta - t_star) / spread));

    DimensionlessTemperature::from_raw(value)
}

/// Evaluates the steady-state profile `T*_ss(ζ*) = e^(−ζ*)`.
///
/// # Errors
///
/// Returns [`HeatLossError::InvalidDomain`] if `zeta` is negative or not finite.
pub fn steady_state_temperature(zeta: f64) -> Result<DimensionlessTemperature, HeatLossError> {
    check_zeta(zeta)?;
    DimensionlessTemperature::from_raw((-zeta).exp())
}

/// Evaluates the heat integral `HI(t*)`.
///
/// `HI` is the area under the transient profile relative to the steady one:
///
/// ```text
/// HI(t*) = √(t*/π) e^(−t*/4) + (1 + t*/2) erf(√(t*/4)) − t*/2
/// ```
///
/// It rises from `HI(0) = 0` towards `1`. The sum is evaluated in the
/// equivalent form `1 − [(1 + t*/2) erfc(√t*/2) − √(t*/π) e^(−t*/4)]`, which
/// avoids subtracting two large numbers when `t*` is large and keeps the
/// result monotone once the bracketed tail drops below machine precision.
///
/// # Errors
///
/// Returns [`HeatLossError::InvalidDomain`] if `t_star` is negative or not finite.
///
/// # Example
///
/// ```
/// use twine_heat_loss::models::thermal::heat_loss::heat_integral;
///
/// assert_eq!(heat_integral(0.0).unwrap(), 0.0);
/// assert!((heat_integral(1000.0).unwrap() - 1.0).abs() < 1e-3);
/// ```
pub fn heat_integral(t_star: f64) -> Result<f64, HeatLossError> {
    check_t_star(t_star)?;
    Ok(heat_integral_unchecked(t_star))
}

/// `HI(t*)` for a `t*` already known to be finite and non-negative.
pub(super) fn heat_integral_unchecked(t_star: f64) -> f64 {
    if t_star == 0.0 {
        return 0.0;
    }
    let half_root = 0.5 * t_star.sqrt();
    let tail =
        (1.0 + 0.5 * t_star) * erfc(half_root) - (t_star / PI).sqrt() * (-0.25 * t_star).exp();
    (1.0 - tail.clamp(0.0, 1.0)).clamp(0.0, 1.0)
}

/// `dHI/dt*` for `t* > 0`.
///
/// Differentiating `HI` term by term, the `√t*` contributions cancel and
/// leave `e^(−t*/4)/√(πt*) − ½ erfc(√t*/2)`.
/// The two terms nearly cancel at large `t*`, so the result is floored at
/// zero to keep `Q(t)` non-decreasing under rounding.
pub(super) fn heat_integral_slope(t_star: f64) -> f64 {
    debug_assert!(t_star > 0.0);
    let slope = (-0.25 * t_star).exp() / (PI * t_star).sqrt() - 0.5 * erfc(0.5 * t_star.sqrt());
    slope.max(0.0)
}

fn check_zeta(zeta: f64) -> Result<(), HeatLossError> {
    if zeta.is_finite() && zeta >= 0.0 {
        Ok(())
    } else {
        Err(HeatLossError::invalid_domain(
            "dimensionless distance: value must be finite and non-negative",
        ))
    }
}

fn check_t_star(t_star: f64) -> Result<(), HeatLossError> {
    if t_star.is_finite() && t_star >= 0.0 {
        Ok(())
    } else {
        Err(HeatLossError::invalid_domain(
            "dimensionless time: value must be finite and non-negative",
        ))
    }
}

/// Dimensional temperature field ahead of an advancing front.
///
/// Maps a distance `ζ` ahead of the front and an elapsed time `t` onto the
/// dimensionless profile using `ζ* = Uζ/α` and `t* = U²t/α`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureProfile {
    params: ScenarioParameters,
    velocity: Constrained<Velocity, StrictlyPositive>,
}

impl TemperatureProfile {
    /// Creates a profile for a front advancing at `velocity`.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `velocity` is not strictly positive.
    pub fn new(params: ScenarioParameters, velocity: Velocity) -> Result<Self, HeatLossError> {
        Ok(Self {
            params,
            velocity: constrained("front velocity", velocity)?,
        })
    }

    /// Builds a profile from a velocity that has already been validated.
    pub(super) fn from_constrained(
        params: ScenarioParameters,
        velocity: Constrained<Velocity, StrictlyPositive>,
    ) -> Self {
        Self { params, velocity }
    }

    /// Dimensionless distance `ζ* = Uζ/α`.
    #[must_use]
    pub fn dimensionless_distance(&self, distance: Length) -> f64 {
        self.velocity_si() * distance.get::<meter>() / self.alpha_si()
    }

    /// Dimensionless time `t* = U²t/α`.
    #[must_use]
    pub fn dimensionless_time(&self, time: Time) -> f64 {
        self.velocity_si().powi(2) * time.get::<second>() / self.alpha_si()
    }

    /// Temperature at `distance` ahead of the front, `time` after it started moving.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `distance` is negative or
    /// `time` is not strictly positive.
    pub fn temperature(
        &self,
        distance: Length,
        time: Time,
    ) -> Result<ThermodynamicTemperature, HeatLossError> {
        let t_star = dimensionless_temperature(
            self.dimensionless_distance(distance),
            self.dimensionless_time(time),
        )?;
        Ok(self.dimensional(t_star))
    }

    /// Steady-state temperature at `distance` ahead of the front.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `distance` is negative.
    pub fn steady_state(
        &self,
        distance: Length,
    ) -> Result<ThermodynamicTemperature, HeatLossError> {
        let t_star = steady_state_temperature(self.dimensionless_distance(distance))?;
        Ok(self.dimensional(t_star))
    }

    fn dimensional(&self, t_star: DimensionlessTemperature) -> ThermodynamicTemperature {
        let rise = self.params.delta_t().get::<delta_kelvin>() * t_star.value();
        ThermodynamicTemperature::new::<kelvin>(self.params.t_cold().get::<kelvin>() + rise)
    }

    fn velocity_si(&self) -> f64 {
        self.velocity.as_ref().get::<meter_per_second>()
    }

    fn alpha_si(&self) -> f64 {
        self.params.diffusivity().get::<square_meter_per_second>()
    }
}
