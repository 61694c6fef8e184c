//! Net greenhouse gas emissions from reservoirs
//!
//! Re-exports the emission contract and collaborators from `rgres-core` and the gas
//! models from `rgres-components`.
//!
//! ```no_run
//! use rgres::emission::Emission;
//! use rgres::emissions::CarbonDioxideEmission;
//! use rgres::settings::EmissionSettings;
//! # fn assess(catchment: &rgres::catchment::CatchmentData, reservoir: &rgres::reservoir::ReservoirData) -> rgres::errors::RGresResult<()> {
//! let settings = EmissionSettings::load_default()?;
//! let co2 = CarbonDioxideEmission::new(catchment, reservoir, 20.0, "g-res", None, &settings);
//! println!("{} tCO2eq/yr", co2.total_emission_per_year(100)?);
//! # Ok(())
//! # }
//! ```

pub use rgres_components::{emissions, parameters, settings};
pub use rgres_core::{
    catchment, categories, config, diagnostics, emission, errors, gwp, pre_impoundment,
    reservoir, temperature, FloatValue,
};
