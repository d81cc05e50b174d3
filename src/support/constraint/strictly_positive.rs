use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, sign_of};

/// Requires `x > 0`.
///
/// Thermal conductivity, thermal diffusivity and front velocity all divide
/// or sit under a square root in the closed-form solutions, so a zero value
/// is as invalid as a negative one.
///
/// ```
/// use twine_heat_loss::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(0.072).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Shorthand for [`Constrained::new`].
    ///
    /// # Errors
    ///
    /// Fails for zero, negative and `NaN` values.
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign_of(value)? {
            Ordering::Greater => Ok(()),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        diffusion_coefficient::square_meter_per_second,
        f64::{DiffusionCoefficient, Velocity},
        velocity::meter_per_second,
    };

    #[test]
    fn plain_numbers() {
        assert!(StrictlyPositive::new(1e-300).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-0.5), Err(ConstraintError::Negative));
        assert_eq!(StrictlyPositive::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn overburden_diffusivity() {
        let alpha = DiffusionCoefficient::new::<square_meter_per_second>(8.3e-7);
        assert!(StrictlyPositive::new(alpha).is_ok());

        let stalled = DiffusionCoefficient::new::<square_meter_per_second>(0.0);
        assert_eq!(
            StrictlyPositive::new(stalled).map(Constrained::into_inner),
            Err(ConstraintError::Zero)
        );
    }

    #[test]
    fn retreating_front() {
        let u = Velocity::new::<meter_per_second>(-1e-8);
        assert_eq!(
            StrictlyPositive::new(u).map(Constrained::into_inner),
            Err(ConstraintError::Negative)
        );
    }
}
