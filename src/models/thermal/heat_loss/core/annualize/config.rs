use uom::si::{f64::Time, time::day, time::second};

use crate::models::thermal::heat_loss::core::HeatLossError;

/// Settings for [`annualize`](super::annualize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualizeConfig {
    /// Length of one reporting year.
    pub year_length: Time,

    /// Largest distance, in years, between a sample time and an integer year
    /// for the sample to count as that year's mark.
    ///
    /// Must lie in `[0, 0.5)`.
    pub tolerance: f64,

    /// Measure the first row's increment from `Q(0)` instead of leaving it undefined.
    pub zero_baseline: bool,
}

impl Default for AnnualizeConfig {
    /// A 365-day year, exact matches only (up to floating-point noise), and
    /// an undefined first increment.
    fn default() -> Self {
        Self {
            year_length: Time::new::<day>(365.0),
            tolerance: 1e-9,
            zero_baseline: false,
        }
    }
}

impl AnnualizeConfig {
    /// Returns this configuration with the zero-baseline option set.
    #[must_use]
    pub fn with_zero_baseline(self, zero_baseline: bool) -> Self {
        Self {
            zero_baseline,
            ..self
        }
    }

    /// Matches a time to an integer year.
    ///
    /// The rule is: `y = t / year_length`, `n = round(y)`; `t` is the mark
    /// for year `n` if `|y − n| ≤ tolerance`, and is not a year mark otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_heat_loss::models::thermal::heat_loss::AnnualizeConfig;
    /// use uom::si::{f64::Time, time::day};
    ///
    /// let config = AnnualizeConfig::default();
    /// assert_eq!(config.year_mark(Time::new::<day>(730.0)), Some(2));
    /// assert_eq!(config.year_mark(Time::new::<day>(731.0)), None);
    /// ```
    #[must_use]
    pub fn year_mark(&self, t: Time) -> Option<u32> {
        let years = t.get::<second>() / self.year_length.get::<second>();
        if !years.is_finite() || years < -self.tolerance {
            return None;
        }

        let nearest = years.round();
        if (years - nearest).abs() > self.tolerance || nearest > f64::from(u32::MAX) {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(nearest.max(0.0) as u32)
    }

    pub(super) fn validate(&self) -> Result<(), HeatLossError> {
        let year = self.year_length.get::<second>();
        if !(year.is_finite() && year > 0.0) {
            return Err(HeatLossError::invalid_domain(
                "year length must be finite and strictly positive",
            ));
        }
        if !(0.0..0.5).contains(&self.tolerance) {
            return Err(HeatLossError::invalid_domain(
                "year-mark tolerance must lie in [0, 0.5)",
            ));
        }
        Ok(())
    }
}
