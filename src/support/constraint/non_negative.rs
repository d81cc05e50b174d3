use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, sign_of};

/// Requires `x ≥ 0`.
///
/// Areas, area growth rates and the growth cap time may all be zero (the
/// resulting curve is simply flat), but never negative.
///
/// ```
/// use twine_heat_loss::support::constraint::{Constrained, NonNegative};
///
/// let area = Constrained::<_, NonNegative>::new(0.0).unwrap();
/// assert_eq!(area.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-7.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Shorthand for [`Constrained::new`].
    ///
    /// # Errors
    ///
    /// Fails for negative and `NaN` values.
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if sign_of(value)?.is_lt() {
            Err(ConstraintError::Negative)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter,
        f64::{Area, Time},
        time::day,
    };

    #[test]
    fn plain_numbers() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(2.5).is_ok());
        assert_eq!(NonNegative::new(-0.1), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn chamber_geometry() {
        assert!(NonNegative::new(Area::new::<square_meter>(40_000.0)).is_ok());
        assert!(NonNegative::new(Area::new::<square_meter>(0.0)).is_ok());
        assert!(NonNegative::new(Time::new::<day>(-1.0)).is_err());
    }
}
