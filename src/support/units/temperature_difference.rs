use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

/// The interval between two absolute temperatures.
///
/// [`uom`] has no `ThermodynamicTemperature - ThermodynamicTemperature`
/// ([#380](https://github.com/iliekturtles/uom/issues/380)); both sides are
/// read in kelvin and the difference is rebuilt as a [`TemperatureInterval`].
pub trait TemperatureDifference {
    /// `self - other` as an interval.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        let hot = self.get::<kelvin>();
        let cold = other.get::<kelvin>();
        TemperatureInterval::new::<delta_kelvin>(hot - cold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit};

    #[test]
    fn steam_over_reservoir() {
        let steam = ThermodynamicTemperature::new::<degree_celsius>(264.0);
        let reservoir = ThermodynamicTemperature::new::<degree_celsius>(15.0);

        let driving = steam.minus(reservoir).get::<delta_kelvin>();
        let reversed = reservoir.minus(steam).get::<delta_kelvin>();

        assert_relative_eq!(driving, 249.0, max_relative = 1e-12);
        assert_relative_eq!(reversed, -driving);
    }

    #[test]
    fn boiling_point_in_two_scales() {
        let celsius = ThermodynamicTemperature::new::<degree_celsius>(100.0);
        let fahrenheit = ThermodynamicTemperature::new::<degree_fahrenheit>(212.0);
        assert_relative_eq!(fahrenheit.minus(celsius).get::<delta_kelvin>(), 0.0, epsilon = 1e-9);
    }
}
