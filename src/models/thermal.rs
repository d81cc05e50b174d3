//! Thermal systems models.
//!
//! This module contains models for heat transfer between injected fluids and
//! the media around them.

pub mod heat_loss;
