use thiserror::Error;
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitInterval},
    units::SpecificEnthalpy,
};
use crate::models::thermal::heat_loss::core::{HeatLossError, error::constrained};

/// Steam property lookups needed to size an injection.
///
/// Implement this for whatever property source is available (steam tables,
/// an equation of state, a property library). Values are used as returned and
/// never cached.
pub trait SteamProperties {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Enthalpy of saturated liquid water at `pressure`.
    ///
    /// # Errors
    ///
    /// Returns an error if the property cannot be evaluated.
    fn saturated_liquid_enthalpy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEnthalpy, Self::Error>;

    /// Enthalpy of saturated steam at `pressure`.
    ///
    /// # Errors
    ///
    /// Returns an error if the property cannot be evaluated.
    fn saturated_vapor_enthalpy(&self, pressure: Pressure) -> Result<SpecificEnthalpy, Self::Error>;

    /// Enthalpy of liquid water at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns an error if the property cannot be evaluated.
    fn liquid_enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, Self::Error>;
}

/// Conditions at which steam is injected and condensate is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InjectionCondition {
    pressure: Constrained<Pressure, StrictlyPositive>,
    quality: Constrained<Ratio, UnitInterval>,
    return_temperature: ThermodynamicTemperature,
}

impl InjectionCondition {
    /// Bundles injection pressure, steam quality, and condensate return temperature.
    ///
    /// # Errors
    ///
    /// Returns [`HeatLossError::InvalidDomain`] if `pressure` is not strictly
    /// positive or `quality` lies outside `[0, 1]`.
    pub fn new(
        pressure: Pressure,
        quality: Ratio,
        return_temperature: ThermodynamicTemperature,
    ) -> Result<Self, HeatLossError> {
        Ok(Self {
            pressure: constrained("injection pressure", pressure)?,
            quality: constrained("steam quality", quality)?,
            return_temperature,
        })
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure.into_inner()
    }

    #[must_use]
    pub fn quality(&self) -> Ratio {
        self.quality.into_inner()
    }

    #[must_use]
    pub fn return_temperature(&self) -> ThermodynamicTemperature {
        self.return_temperature
    }
}

/// Errors that can occur while computing a net specific enthalpy.
#[derive(Debug, Error)]
pub enum NetEnthalpyError {
    /// The steam property source failed.
    #[error("steam property evaluation failed: {context}")]
    Property {
        context: String,

        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The resulting enthalpy cannot be used as a denominator.
    #[error(transparent)]
    Domain(#[from] HeatLossError),
}

impl NetEnthalpyError {
    fn property(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Property {
            context: context.into(),
            source: Box::new(err),
        }
    }
}

/// Energy delivered per unit mass of injected steam.
///
/// Mixes saturated liquid and vapor enthalpies at the injection pressure by
/// quality `x`, then subtracts the enthalpy of condensate at the return
/// temperature:
///
/// ```text
/// h_net = h_f + x (h_g − h_f) − h_return
/// ```
///
/// # Errors
///
/// Returns [`NetEnthalpyError::Property`] if a lookup fails, or
/// [`NetEnthalpyError::Domain`] if the result is not strictly positive.
pub fn net_specific_enthalpy<P: SteamProperties>(
    properties: &P,
    condition: &InjectionCondition,
) -> Result<SpecificEnthalpy, NetEnthalpyError> {
    let pressure = condition.pressure();

    let h_f = properties
        .saturated_liquid_enthalpy(pressure)
        .map_err(|err| NetEnthalpyError::property("saturated liquid enthalpy", err))?;
    let h_g = properties
        .saturated_vapor_enthalpy(pressure)
        .map_err(|err| NetEnthalpyError::property("saturated vapor enthalpy", err))?;
    let h_return = properties
        .liquid_enthalpy(condition.return_temperature())
        .map_err(|err| NetEnthalpyError::property("condensate return enthalpy", err))?;

    let x = condition.quality().get::<ratio>();
    let net = h_f + (h_g - h_f) * x - h_return;

    Ok(constrained::<_, StrictlyPositive>("net specific enthalpy", net)?.into_inner())
}
