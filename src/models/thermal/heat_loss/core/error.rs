use thiserror::Error;

use crate::support::constraint::{Constrained, Constraint, ConstraintError};

/// Errors raised by the heat-loss models and their post-processing.
///
/// Every failure is a caller input error: the closed-form evaluations are
/// deterministic and never fail transiently, so no partial result is ever
/// returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HeatLossError {
    /// An input lies outside the domain where the model is defined.
    ///
    /// This covers non-positive physical constants, negative or non-finite
    /// times, malformed time grids, and non-positive enthalpy denominators.
    #[error("invalid domain: {context}")]
    InvalidDomain { context: String },
}

impl HeatLossError {
    /// Creates an [`HeatLossError::InvalidDomain`] with context.
    pub(crate) fn invalid_domain(context: impl Into<String>) -> Self {
        Self::InvalidDomain {
            context: context.into(),
        }
    }

    /// Returns `true` if this is an [`HeatLossError::InvalidDomain`] error.
    #[must_use]
    pub fn is_invalid_domain(&self) -> bool {
        matches!(self, Self::InvalidDomain { .. })
    }
}

/// Checks `value` against the constraint `C`, naming the input on failure.
pub(super) fn constrained<T, C: Constraint<T>>(
    name: &str,
    value: T,
) -> Result<Constrained<T, C>, HeatLossError> {
    Constrained::new(value).map_err(|err: ConstraintError| {
        HeatLossError::invalid_domain(format!("{name}: {err}"))
    })
}
