use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
///
/// Shares its dimension with [`uom::si::f64::AvailableEnergy`], so values can
/// be built with the `uom::si::available_energy` units.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Growth rate of a heat-transfer area, m²/s in SI.
///
/// Build values by dividing an [`Area`](uom::si::f64::Area) by a
/// [`Time`](uom::si::f64::Time), e.g. `30 m² / 1 day`.
pub type AreaRate = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
