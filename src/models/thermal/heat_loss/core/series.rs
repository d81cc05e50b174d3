//! Sampled heat-transfer curves and the time grids they are evaluated on.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::{
        f64::{Energy, Power, Time},
        time::second,
    },
};

use super::HeatLossError;

/// One evaluation of a heat-loss model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Time since heat transfer began.
    pub time: Time,

    /// Cumulative energy transferred from time zero to `time`.
    pub energy: Energy,

    /// Instantaneous heat-transfer rate, `dQ/dt`.
    ///
    /// `None` where the closed form is singular (an infinite rate at `t = 0`).
    pub rate: Option<Power>,
}

/// An ordered, immutable sequence of [`Sample`]s.
///
/// The time axis is non-empty, finite, non-negative, and strictly increasing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TimeSeries {
    samples: Vec<Sample>,
}

impl TimeSeries {
    /// Builds a series from caller-supplied samples.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if the samples are empty, or if
    /// their times are negative, non-finite, or not strictly increasing.
    pub fn new(samples: Vec<Sample>) -> Result<Self, HeatLossError> {
        check_axis(samples.iter().map(|sample| sample.time))?;
        Ok(Self { samples })
    }

    /// Wraps samples whose time axis has already been checked.
    pub(super) fn from_checked(samples: Vec<Sample>) -> Self {
        debug_assert!(check_axis(samples.iter().map(|sample| sample.time)).is_ok());
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Returns the sampled times in order.
    pub fn times(&self) -> impl Iterator<Item = Time> + '_ {
        self.samples.iter().map(|sample| sample.time)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; a series holds at least one sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample at the largest time.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Largest number of points [`uniform_grid`] will build.
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Builds an evenly spaced grid `start, start + step, …` up to and including `end`.
///
/// `end` is included when it lies on the grid to within floating-point noise.
///
/// # Errors
///
/// Returns [`HeatLossError::InvalidDomain`] if `start` is negative, `end` is
/// before `start`, `step` is not strictly positive, or any bound is not finite.
/// Also fails if the grid would hold more than [`MAX_GRID_POINTS`] points, or
/// if `step` is too small to separate consecutive times at this magnitude.
///
/// # Example
///
/// ```
/// use twine_heat_loss::models::thermal::heat_loss::uniform_grid;
/// use uom::si::{f64::Time, time::day};
///
/// let grid = uniform_grid(
///     Time::new::<day>(0.0),
///     Time::new::<day>(3650.0),
///     Time::new::<day>(1.0),
/// )
/// .unwrap();
/// assert_eq!(grid.len(), 3651);
/// ```
pub fn uniform_grid(start: Time, end: Time, step: Time) -> Result<Vec<Time>, HeatLossError> {
    check_time(start)?;
    check_time(end)?;
    if end < start {
        return Err(HeatLossError::invalid_domain(
            "time grid: end must not precede start",
        ));
    }
    let step_s = step.get::<second>();
    if !(step_s.is_finite() && step_s > 0.0) {
        return Err(HeatLossError::invalid_domain(
            "time grid: step must be finite and strictly positive",
        ));
    }

    if start + step == start {
        return Err(HeatLossError::invalid_domain(
            "time grid: step is below the resolution of start",
        ));
    }

    let span = ((end - start).get::<second>() / step_s * (1.0 + 1e-12)).floor();
    #[allow(clippy::cast_precision_loss)]
    let limit = MAX_GRID_POINTS as f64;
    if !(span < limit) {
        return Err(HeatLossError::invalid_domain(format!(
            "time grid: more than {MAX_GRID_POINTS} points"
        )));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let intervals = span as usize;

    #[allow(clippy::cast_precision_loss)]
    let grid: Vec<Time> = (0..=intervals)
        .map(|i| start + step * (i as f64))
        .collect();
    check_axis(grid.iter().copied())?;
    Ok(grid)
}

/// Checks that a single evaluation time is finite and non-negative.
pub(super) fn check_time(t: Time) -> Result<(), HeatLossError> {
    let seconds = t.get::<second>();
    if !seconds.is_finite() {
        return Err(HeatLossError::invalid_domain("time must be finite"));
    }
    if t < Time::ZERO {
        return Err(HeatLossError::invalid_domain("time must not be negative"));
    }
    Ok(())
}

/// Checks that a time axis is non-empty, valid, and strictly increasing.
pub(super) fn check_axis(times: impl IntoIterator<Item = Time>) -> Result<(), HeatLossError> {
    let mut previous: Option<Time> = None;
    for (index, t) in times.into_iter().enumerate() {
        check_time(t).map_err(|err| {
            HeatLossError::invalid_domain(format!("time grid index {index}: {err}"))
        })?;
        if previous.is_some_and(|prev| t <= prev) {
            return Err(HeatLossError::invalid_domain(format!(
                "time grid index {index}: times must be strictly increasing"
            )));
        }
        previous = Some(t);
    }

    if previous.is_none() {
        return Err(HeatLossError::invalid_domain("time grid must not be empty"));
    }
    Ok(())
}
