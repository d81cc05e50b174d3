//! Conversion of yearly heat losses into an equivalent injected-fluid mass.

mod enthalpy;

pub use enthalpy::{InjectionCondition, NetEnthalpyError, SteamProperties, net_specific_enthalpy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;
use uom::si::f64::Mass;

use crate::support::{constraint::StrictlyPositive, units::SpecificEnthalpy};

use super::{AnnualIncrement, HeatLossError, error::constrained};

/// Mass of injected fluid whose net enthalpy matches one year's heat loss.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FluidRequirement {
    pub year: u32,

    /// `None` when the year's increment is undefined.
    pub mass: Option<Mass>,
}

/// Divides each yearly increment by a net specific enthalpy.
///
/// `mass(year) = Q_incremental(year) / net_specific_enthalpy`.
/// The enthalpy is treated as opaque: it is typically the steam enthalpy at
/// injection conditions minus the condensate return enthalpy, as computed by
/// [`net_specific_enthalpy`].
///
/// # Errors
///
/// Returns [`HeatLossError::InvalidDomain`] if `net_specific_enthalpy` is not
/// strictly positive.
pub fn fluid_requirement(
    increments: &[AnnualIncrement],
    net_specific_enthalpy: SpecificEnthalpy,
) -> Result<Vec<FluidRequirement>, HeatLossError> {
    let h = constrained::<_, StrictlyPositive>("net specific enthalpy", net_specific_enthalpy)?
        .into_inner();

    let requirements: Vec<FluidRequirement> = increments
        .iter()
        .map(|row| FluidRequirement {
            year: row.year,
            mass: row.incremental.map(|energy| -> Mass { energy / h }),
        })
        .collect();

    debug!(years = requirements.len(), "converted heat losses to fluid mass");

    Ok(requirements)
}
