use crate::support::{
    constraint::{Constrained, NonNegative},
    units::AreaRate,
};
use uom::si::{
    f64::{Area, Energy, Power, Time},
    time::second,
};

use super::{HeatTransfer, LinearGrowth, joules, seconds, watts};
use crate::models::thermal::heat_loss::core::{
    HeatLossError, ScenarioParameters, error::constrained,
};

/// Which branch of the capped-growth solution applies at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPhase {
    /// `t ≤ t1`: the contact area is still growing.
    Growing,
    /// `t > t1`: the contact area has stopped at `Ȧ t1`.
    Capped,
}

/// Linear area growth that stops at a cap time `t1`.
///
/// Up to `t1` this is [`LinearGrowth`]. Afterwards the solution is the
/// growing solution minus the same solution delayed by `t1`:
///
/// ```text
/// Q(t) = (4/3) ΔT K Ȧ / √(πα) · [t^1.5 − (t − t1)^1.5]
/// q(t) = 2 ΔT K Ȧ / √(πα) · [√t − √(t − t1)]
/// ```
///
/// Both branches agree at `t = t1`, so `Q` is continuous across the cap.
///
/// The bracketed differences are evaluated as
/// `t1 √t (3 − 3r + r²) / (1 + (1 − r)^1.5)` and `t1 / (√t + √(t − t1))`
/// with `r = t1/t`, so they stay accurate long after the cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedGrowth {
    growth: LinearGrowth,
    cap_time: Constrained<Time, NonNegative>,
}

impl CappedGrowth {
    /// Creates a capped-growth model.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `area_rate` or `cap_time`
    /// is negative or `NaN`, or if `cap_time` is infinite.
    pub fn new(
        params: ScenarioParameters,
        area_rate: AreaRate,
        cap_time: Time,
    ) -> Result<Self, HeatLossError> {
        let growth = LinearGrowth::new(params, area_rate)?;
        let cap_time = constrained("growth cap time", cap_time)?;
        seconds(cap_time.into_inner())?;
        Ok(Self { growth, cap_time })
    }

    #[must_use]
    pub fn params(&self) -> &ScenarioParameters {
        self.growth.params()
    }

    #[must_use]
    pub fn area_rate(&self) -> AreaRate {
        self.growth.area_rate()
    }

    /// Time at which the contact area stops growing.
    #[must_use]
    pub fn cap_time(&self) -> Time {
        self.cap_time.into_inner()
    }

    /// Final contact area, `Ȧ t1`.
    #[must_use]
    pub fn max_area(&self) -> Area {
        self.area_rate() * self.cap_time()
    }

    /// Returns the branch of the solution that applies at `t`.
    #[must_use]
    pub fn phase(&self, t: Time) -> GrowthPhase {
        if t <= self.cap_time() {
            GrowthPhase::Growing
        } else {
            GrowthPhase::Capped
        }
    }

    /// Contact area at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `t` is negative or not finite.
    pub fn area_at(&self, t: Time) -> Result<Area, HeatLossError> {
        seconds(t)?;
        match self.phase(t) {
            GrowthPhase::Growing => self.growth.area_at(t),
            GrowthPhase::Capped => Ok(self.max_area()),
        }
    }

    fn cap_seconds(&self) -> f64 {
        self.cap_time().get::<second>()
    }

    /// `t^1.5 − (t − t1)^1.5` for `t > t1`, in seconds.
    fn energy_shape(&self, t: f64) -> f64 {
        let t1 = self.cap_seconds();
        let r = t1 / t;
        t1 * t.sqrt() * (3.0 - 3.0 * r + r * r) / (1.0 + (1.0 - r).powf(1.5))
    }

    /// `√t − √(t − t1)` for `t > t1`, in seconds.
    fn rate_shape(&self, t: f64) -> f64 {
        let t1 = self.cap_seconds();
        t1 / (t.sqrt() + (t - t1).sqrt())
    }
}

impl HeatTransfer for CappedGrowth {
    fn label(&self) -> &'static str {
        "capped growth"
    }

    fn cumulative_energy(&self, t: Time) -> Result<Energy, HeatLossError> {
        let s = seconds(t)?;
        let energy = match self.phase(t) {
            GrowthPhase::Growing => self.growth.energy_si(s),
            GrowthPhase::Capped => 4.0 / 3.0 * self.growth.coefficient() * self.energy_shape(s),
        };
        Ok(joules(energy))
    }

    fn rate(&self, t: Time) -> Result<Option<Power>, HeatLossError> {
        let s = seconds(t)?;
        let rate = match self.phase(t) {
            GrowthPhase::Growing => self.growth.rate_si(s),
            GrowthPhase::Capped => 2.0 * self.growth.coefficient() * self.rate_shape(s),
        };
        Ok(Some(watts(rate)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, energy::joule, power::watt, time::day};

    use crate::models::thermal::heat_loss::core::test_support::{area_rate, reservoir};

    fn model() -> CappedGrowth {
        CappedGrowth::new(reservoir(), area_rate(27.4), Time::new::<day>(1460.0)).unwrap()
    }

    #[test]
    fn continuous_across_cap() {
        let model = model();

        let before = model.cumulative_energy(Time::new::<day>(1459.999)).unwrap();
        let after = model.cumulative_energy(Time::new::<day>(1460.001)).unwrap();
        assert_eq!(model.phase(Time::new::<day>(1459.999)), GrowthPhase::Growing);
        assert_eq!(model.phase(Time::new::<day>(1460.001)), GrowthPhase::Capped);
        // Q ∝ t^1.5 near the cap, so a 0.002 day window separates the two
        // sides by 1.5 · 0.002 / 1460 ≈ 2.05e-6 relative, all of it from q·Δt.
        let gap = after.get::<joule>() - before.get::<joule>();
        let q = model.rate(Time::new::<day>(1460.0)).unwrap().unwrap();
        assert!(gap / after.get::<joule>() < 3e-6);
        assert_relative_eq!(gap, q.get::<watt>() * 0.002 * 86_400.0, max_relative = 1e-3);

        // The last growing point and the first capped point.
        let t1 = model.cap_time();
        let at_cap = model.cumulative_energy(t1).unwrap();
        let just_after = model.cumulative_energy(t1 * (1.0 + 1e-12)).unwrap();
        assert_eq!(model.phase(t1 * (1.0 + 1e-12)), GrowthPhase::Capped);
        assert!(just_after >= at_cap);
        assert_relative_eq!(
            just_after.get::<joule>(),
            at_cap.get::<joule>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn capped_arm_matches_direct_difference() {
        let model = model();
        let coefficient = model.growth.coefficient();
        let t1 = model.cap_seconds();

        for d in [1460.5, 2000.0, 3650.0, 20_000.0] {
            let t = Time::new::<day>(d);
            let s = t.get::<second>();
            let direct = 4.0 / 3.0 * coefficient * (s.powf(1.5) - (s - t1).powf(1.5));
            let direct_rate = 2.0 * coefficient * (s.sqrt() - (s - t1).sqrt());

            assert_relative_eq!(
                model.cumulative_energy(t).unwrap().get::<joule>(),
                direct,
                max_relative = 1e-9
            );
            assert_relative_eq!(
                model.rate(t).unwrap().unwrap().get::<watt>(),
                direct_rate,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn monotone_long_after_a_short_cap() {
        let model = CappedGrowth::new(
            reservoir(),
            Area::new::<square_meter>(1.0) / Time::new::<second>(1.0),
            Time::new::<second>(1e-3),
        )
        .unwrap();
        let coefficient = model.growth.coefficient();

        let mut previous = model.cumulative_energy(Time::new::<second>(1e8)).unwrap();
        for i in 1..=10_000 {
            let t = Time::new::<second>(1e8 + f64::from(i));
            let energy = model.cumulative_energy(t).unwrap();
            assert!(energy >= previous, "energy decreased at step {i}");
            previous = energy;
        }

        // Far past the cap, Q ≈ 2 c t1 √t.
        let t = 1e8_f64;
        let energy = model.cumulative_energy(Time::new::<second>(t)).unwrap();
        assert_relative_eq!(
            energy.get::<joule>(),
            2.0 * coefficient * 1e-3 * t.sqrt(),
            max_relative = 1e-9
        );
        assert!(model.rate(Time::new::<second>(t)).unwrap().unwrap().get::<watt>() > 0.0);
    }

    #[test]
    fn area_rejects_non_finite_time() {
        let model = model();

        for t in [f64::NAN, f64::INFINITY, -1.0] {
            let err = model.area_at(Time::new::<day>(t)).unwrap_err();
            assert!(err.is_invalid_domain());
        }
    }

    #[test]
    fn matches_linear_growth_before_cap() {
        let model = model();
        let linear = LinearGrowth::new(reservoir(), area_rate(27.4)).unwrap();

        for d in [0.0, 1.0, 365.0, 1460.0] {
            let t = Time::new::<day>(d);
            assert_eq!(
                model.cumulative_energy(t).unwrap(),
                linear.cumulative_energy(t).unwrap()
            );
        }
    }

    #[test]
    fn rate_decays_after_cap() {
        let model = model();
        let at_cap = model.rate(Time::new::<day>(1460.0)).unwrap().unwrap();
        let later = model.rate(Time::new::<day>(3650.0)).unwrap().unwrap();
        let much_later = model.rate(Time::new::<day>(36_500.0)).unwrap().unwrap();

        assert!(later < at_cap);
        assert!(much_later < later);
        assert!(much_later.get::<watt>() > 0.0);
    }

    #[test]
    fn area_stops_at_cap() {
        let model = model();
        let expected = 27.4 * 1460.0;

        assert_relative_eq!(
            model.area_at(Time::new::<day>(3000.0)).unwrap().get::<square_meter>(),
            expected,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            model.max_area().get::<square_meter>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_cap_transfers_nothing() {
        let model = CappedGrowth::new(reservoir(), area_rate(27.4), Time::new::<day>(0.0)).unwrap();
        let energy = model.cumulative_energy(Time::new::<day>(100.0)).unwrap();
        assert_eq!(energy.get::<joule>(), 0.0);
    }

    #[test]
    fn rejects_invalid_cap() {
        assert!(CappedGrowth::new(reservoir(), area_rate(1.0), Time::new::<day>(-1.0)).is_err());
        assert!(
            CappedGrowth::new(reservoir(), area_rate(1.0), Time::new::<day>(f64::INFINITY))
                .is_err()
        );
    }
}
