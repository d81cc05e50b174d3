//! Extensions to [`uom`].
//!
//! All physical inputs and outputs in this crate are [`uom`] quantities, so a
//! caller may build a diffusivity in m²/day and a time in days and the models
//! stay unit-consistent. This module adds the few pieces [`uom`] lacks.
//!
//! ## Temperature differences
//!
//! The driving force of every heat-loss model is `T_hot - T_cold`.
//! [`TemperatureDifference::minus`] returns that difference as a
//! [`TemperatureInterval`](uom::si::f64::TemperatureInterval):
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use twine_heat_loss::support::units::TemperatureDifference;
//!
//! let steam = ThermodynamicTemperature::new::<degree_celsius>(264.0);
//! let reservoir = ThermodynamicTemperature::new::<degree_celsius>(15.0);
//! let delta_t = steam.minus(reservoir);
//! assert!((delta_t.get::<temperature_interval::kelvin>() - 249.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{AreaRate, SpecificEnthalpy};
pub use temperature_difference::TemperatureDifference;
