//! Construction-time numeric constraints for model inputs.
//!
//! Physical inputs to the heat-loss models carry sign requirements: a thermal
//! diffusivity must be strictly positive, a contact area may be zero but never
//! negative, a steam quality lies in `[0, 1]`. Wrapping a checked value in
//! [`Constrained<T, C>`] records which requirement it met, so parameter
//! structs never hold a raw, unchecked input.
//!
//! - [`StrictlyPositive`]: `x > 0`
//! - [`NonNegative`]: `x ≥ 0`
//! - [`UnitInterval`]: `0 ≤ x ≤ 1`
//!
//! `NaN` satisfies none of them.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A requirement a value must meet to be wrapped in [`Constrained`].
pub trait Constraint<T> {
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how `value` falls short.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// How a value failed its [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("must not be negative")]
    Negative,
    #[error("must be greater than zero")]
    Zero,
    #[error("must be a number, got NaN")]
    NotANumber,
    #[error("must be at least zero")]
    BelowMinimum,
    #[error("must be at most one")]
    AboveMaximum,
}

/// A value known to satisfy the constraint `C`.
///
/// ```
/// use twine_heat_loss::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};
///
/// let k = ThermalConductivity::new::<watt_per_meter_kelvin>(1.7);
/// let k = Constrained::<_, StrictlyPositive>::new(k).unwrap();
/// assert_eq!(k.into_inner().get::<watt_per_meter_kelvin>(), 1.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value).map(|()| Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Orders `value` against zero, rejecting `NaN`.
fn sign_of<T: PartialOrd + Zero>(value: &T) -> Result<Ordering, ConstraintError> {
    value
        .partial_cmp(&T::zero())
        .ok_or(ConstraintError::NotANumber)
}
