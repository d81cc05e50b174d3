//! # Twine Heat Loss
//!
//! Analytical heat-loss and heat-storage models for thermal recovery
//! processes, built as [Twine](https://github.com/isentropic-dev/twine)
//! models.
//!
//! Given a hot interface (a steam chamber or injected-fluid front) in contact
//! with a colder medium, the models in this crate compute the cumulative heat
//! transferred into that medium, reduce it to yearly increments, and convert
//! those increments into the mass of working fluid needed to replace the loss.
//!
//! ## Crate layout
//!
//! - [`models`]: The heat-loss scenarios and their post-processing pipeline.
//! - [`support`]: Constrained numeric types and unit helpers used by the models.
//!
//! Modules in [`support`] are part of the public API because they're useful
//! when assembling model inputs, but their APIs are not stable.

pub mod models;
pub mod support;
