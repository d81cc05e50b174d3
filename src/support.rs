//! Supporting utilities used by the models.
//!
//! These modules are public because they are useful to callers assembling
//! model inputs, but their APIs are not stable.

pub mod constraint;
pub mod units;
