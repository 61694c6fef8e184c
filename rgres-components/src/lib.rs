//! Reservoir emission models for CO2, CH4 and N2O
//!
//! The models follow the G-res methodology (Prairie et al., 2021). Each one combines
//! already-derived catchment and reservoir attributes with the regression
//! coefficients in [`settings::EmissionSettings`].
//!
//! # Module Organisation
//!
//! - `parameters`: typed regression coefficients, one struct per configuration section
//! - `settings`: parameters and pre-impoundment tables loaded once and shared
//! - `emissions`: the gas models and the [`emissions::GasEmission`] variant set

pub mod emissions;
pub mod parameters;
pub mod settings;
