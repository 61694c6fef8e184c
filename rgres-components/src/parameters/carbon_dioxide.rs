//! CO2 diffusion parameters
//!
//! # Reference
//!
//! Prairie et al. (2021), G-res Technical Documentation v3.0, Eqs. 7 and 8.

use rgres_core::config::ConfigStore;
use rgres_core::errors::RGresResult;
use rgres_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters of the CO2 diffusive flux regression
///
/// The gross flux at reservoir age $t$ is
///
/// $$\log_{10} F = k_1 + k_2 \log_{10} t + k_3 T_{eff} + k_4 \log_{10} A + k_5 C_{soil} + k_6 \log_{10} TP$$
///
/// and its decay over the reservoir lifetime is integrated with exponent $k_7$.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonDioxideParameters {
    /// Intercept
    /// default: 1.860
    pub k1_diff: FloatValue,
    /// Reservoir age coefficient
    /// default: -0.330
    pub k2_diff: FloatValue,
    /// Effective temperature coefficient
    /// default: 0.032
    pub k3_diff: FloatValue,
    /// Reservoir area coefficient
    /// default: 0.078
    pub k4_diff: FloatValue,
    /// Soil carbon coefficient
    /// default: 0.420
    pub k5_diff: FloatValue,
    /// Total phosphorus coefficient
    /// default: 0.127
    pub k6_diff: FloatValue,
    /// Exponent of the power-law decay with age
    /// default: -0.330
    pub k7_diff: FloatValue,
    /// Multiplier applied to the regression output
    /// default: 1.0
    pub conv_coeff: FloatValue,
    /// unit: dimensionless
    /// default: 1.0
    pub co2_gwp100: FloatValue,
    /// unit: g/mol
    /// default: 12.0
    #[serde(rename = "weight_C")]
    pub weight_c: FloatValue,
    /// unit: g/mol
    /// default: 44.0
    #[serde(rename = "weight_CO2")]
    pub weight_co2: FloatValue,
}

impl CarbonDioxideParameters {
    pub const SECTION: &'static str = "CARBON_DIOXIDE";

    pub fn from_config(config: &ConfigStore) -> RGresResult<Self> {
        let get = |key: &str| config.get_float(Self::SECTION, key);
        Ok(Self {
            k1_diff: get("k1_diff")?,
            k2_diff: get("k2_diff")?,
            k3_diff: get("k3_diff")?,
            k4_diff: get("k4_diff")?,
            k5_diff: get("k5_diff")?,
            k6_diff: get("k6_diff")?,
            k7_diff: get("k7_diff")?,
            conv_coeff: get("conv_coeff")?,
            co2_gwp100: get("co2_gwp100")?,
            weight_c: get("weight_C")?,
            weight_co2: get("weight_CO2")?,
        })
    }

    /// Mass ratio of CO2 to its carbon content
    pub fn co2_to_c(&self) -> FloatValue {
        self.weight_co2 / self.weight_c
    }
}

impl Default for CarbonDioxideParameters {
    fn default() -> Self {
        Self {
            k1_diff: 1.860,
            k2_diff: -0.330,
            k3_diff: 0.032,
            k4_diff: 0.078,
            k5_diff: 0.420,
            k6_diff: 0.127,
            k7_diff: -0.330,
            conv_coeff: 1.0,
            co2_gwp100: 1.0,
            weight_c: 12.0,
            weight_co2: 44.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgres_core::errors::RGresError;

    #[test]
    fn test_default_matches_config() {
        let config = ConfigStore::load_default().unwrap();
        let params = CarbonDioxideParameters::from_config(&config).unwrap();
        assert_eq!(params, CarbonDioxideParameters::default());
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let mut config = ConfigStore::load_default().unwrap();
        config.remove("CARBON_DIOXIDE", "k5_diff");
        match CarbonDioxideParameters::from_config(&config) {
            Err(RGresError::MissingParameter { section, key }) => {
                assert_eq!(section, "CARBON_DIOXIDE");
                assert_eq!(key, "k5_diff");
            }
            other => panic!("Expected a missing parameter error, got {:?}", other),
        }
    }
}
