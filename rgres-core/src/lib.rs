//! Core types for reservoir greenhouse gas emission models
//!
//! Holds the emission contract, configuration loading, pre-impoundment lookup tables and
//! the catchment and reservoir collaborators consumed by the gas models in
//! `rgres-components`.

pub mod catchment;
pub mod categories;
pub mod config;
pub mod diagnostics;
pub mod emission;
pub mod errors;
pub mod gwp;
pub mod pre_impoundment;
pub mod reservoir;
pub mod temperature;

/// Floating point type used for all physical quantities
pub type FloatValue = f64;
