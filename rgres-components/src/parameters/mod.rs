//! Regression coefficients and constants of the emission models
//!
//! Each gas reads its own configuration section once, through `from_config`, and keeps
//! the values in a typed struct. The `Default` implementations match the values shipped
//! in `data/config.toml`.

mod calculations;
mod carbon_dioxide;
mod methane;
mod nitrous_oxide;

pub use calculations::CalculationParameters;
pub use carbon_dioxide::CarbonDioxideParameters;
pub use methane::MethaneParameters;
pub use nitrous_oxide::NitrousOxideParameters;
