//! N2O constants

use rgres_core::config::ConfigStore;
use rgres_core::errors::RGresResult;
use rgres_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Constants of the N2O models
///
/// Unlike CO2 and CH4 the N2O regressions are fixed in the model equations; only the
/// GWP and the atomic weights used for unit conversion are configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NitrousOxideParameters {
    /// default: 298.0
    pub nitrous_gwp100: FloatValue,
    /// unit: g/mol
    /// default: 16.0
    #[serde(rename = "weight_O")]
    pub weight_o: FloatValue,
    /// unit: g/mol
    /// default: 30.97
    #[serde(rename = "weight_P")]
    pub weight_p: FloatValue,
    /// unit: g/mol
    /// default: 14.0
    #[serde(rename = "weight_N")]
    pub weight_n: FloatValue,
}

impl NitrousOxideParameters {
    pub const SECTION: &'static str = "NITROUS_OXIDE";

    pub fn from_config(config: &ConfigStore) -> RGresResult<Self> {
        let get = |key: &str| config.get_float(Self::SECTION, key);
        Ok(Self {
            nitrous_gwp100: get("nitrous_gwp100")?,
            weight_o: get("weight_O")?,
            weight_p: get("weight_P")?,
            weight_n: get("weight_N")?,
        })
    }

    /// Mass of N2O per unit mass of its nitrogen: $1 + w_O / (2 w_N)$
    pub fn n2o_to_n(&self) -> FloatValue {
        1.0 + self.weight_o / (2.0 * self.weight_n)
    }
}

impl Default for NitrousOxideParameters {
    fn default() -> Self {
        Self {
            nitrous_gwp100: 298.0,
            weight_o: 16.0,
            weight_p: 30.97,
            weight_n: 14.0,
        }
    }
}
