//! Reduction of a continuous cumulative-energy curve to yearly increments.
//!
//! A sample is a year mark when its time, measured in years, rounds to an
//! integer within [`AnnualizeConfig::tolerance`]. See
//! [`AnnualizeConfig::year_mark`] for the exact rule.

mod config;

pub use config::AnnualizeConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uom::{
    ConstZero,
    si::f64::{Energy, Time},
};

use super::{HeatLossError, TimeSeries};

/// Cumulative and incremental energy at one integer year boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnualIncrement {
    /// Whole number of years since heat transfer began.
    pub year: u32,

    /// Time of the sample that matched this year mark.
    pub time: Time,

    /// Cumulative energy `Q(year)`.
    pub cumulative: Energy,

    /// `Q(year) − Q(year − 1)`.
    ///
    /// `None` when the previous year was not sampled, which is always the
    /// case for the first row unless [`AnnualizeConfig::zero_baseline`] is set.
    pub incremental: Option<Energy>,
}

/// Reduces a series to one row per sampled year boundary.
///
/// Samples are visited in time order. Samples that are not year marks are
/// skipped; when several samples fall on the same year mark, the earliest
/// wins.
///
/// The first row's increment is undefined unless `config.zero_baseline` is
/// set, in which case it is measured from `Q(0)`: the energy of a `t = 0`
/// sample if the series has one, and zero otherwise.
///
/// # Errors
///
/// Returns [`HeatLossError::InvalidDomain`] if `config` is invalid.
///
/// # Example
///
/// ```
/// use twine_heat_loss::models::thermal::heat_loss::{
///     AnnualizeConfig, Sample, TimeSeries, annualize,
/// };
/// use uom::si::{energy::gigajoule, f64::{Energy, Time}, time::day};
///
/// let series = TimeSeries::new(
///     [(0.0, 0.0), (200.0, 5.0), (365.0, 8.0), (730.0, 11.0)]
///         .into_iter()
///         .map(|(d, e)| Sample {
///             time: Time::new::<day>(d),
///             energy: Energy::new::<gigajoule>(e),
///             rate: None,
///         })
///         .collect(),
/// )
/// .unwrap();
///
/// let rows = annualize(&series, &AnnualizeConfig::default()).unwrap();
/// assert_eq!(rows.iter().map(|r| r.year).collect::<Vec<_>>(), [0, 1, 2]);
/// assert!(rows[0].incremental.is_none());
/// assert!((rows[2].incremental.unwrap().get::<gigajoule>() - 3.0).abs() < 1e-9);
/// ```
pub fn annualize(
    series: &TimeSeries,
    config: &AnnualizeConfig,
) -> Result<Vec<AnnualIncrement>, HeatLossError> {
    config.validate()?;

    let baseline = series
        .samples()
        .first()
        .filter(|sample| sample.time == Time::ZERO)
        .map_or(Energy::ZERO, |sample| sample.energy);

    let mut rows: Vec<AnnualIncrement> = Vec::new();

    for sample in series {
        let Some(year) = config.year_mark(sample.time) else {
            trace!(time = ?sample.time, "sample is not a year mark");
            continue;
        };

        let previous = rows.last();
        if previous.is_some_and(|row| row.year == year) {
            trace!(year, time = ?sample.time, "duplicate year mark skipped");
            continue;
        }

        let incremental = match previous {
            Some(row) if row.year + 1 == year => Some(sample.energy - row.cumulative),
            Some(_) => None,
            None if config.zero_baseline => Some(sample.energy - baseline),
            None => None,
        };

        rows.push(AnnualIncrement {
            year,
            time: sample.time,
            cumulative: sample.energy,
            incremental,
        });
    }

    debug!(
        samples = series.len(),
        years = rows.len(),
        zero_baseline = config.zero_baseline,
        "annualized series"
    );

    Ok(rows)
}
