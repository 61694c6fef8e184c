//! CH4 diffusion, ebullition and degassing parameters
//!
//! # Reference
//!
//! Prairie et al. (2021), G-res Technical Documentation v3.0, Eqs. 3 to 6.

use rgres_core::config::ConfigStore;
use rgres_core::errors::RGresResult;
use rgres_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters of the three CH4 emission pathways
///
/// - Diffusion: $\log_{10} F = k_1 + k_2 t + k_3 \log_{10}(f_{lit}/100) + k_4 T_{eff}$
/// - Ebullition: $\log_{10} F = k_1 + k_2 \log_{10}(f_{lit}/100) + k_3 I$
/// - Degassing: $\log_{10} F = k_1 + k_2 \log_{10} WRT + k_3 \log_{10} F_{diff}$, decaying
///   with exponent $k_4$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethaneParameters {
    /// default: -0.485
    pub k1_diff: FloatValue,
    /// Decay with reservoir age, 1/yr
    /// default: -0.012
    pub k2_diff: FloatValue,
    /// default: 0.286
    pub k3_diff: FloatValue,
    /// default: 0.052
    pub k4_diff: FloatValue,
    /// default: -0.980
    pub k1_ebull: FloatValue,
    /// default: 0.700
    pub k2_ebull: FloatValue,
    /// default: 0.212
    pub k3_ebull: FloatValue,
    /// default: -2.605
    pub k1_degas: FloatValue,
    /// default: 0.660
    pub k2_degas: FloatValue,
    /// default: 1.030
    pub k3_degas: FloatValue,
    /// Decay with reservoir age, 1/yr
    /// default: -0.012
    pub k4_degas: FloatValue,
    /// unit: g/mol
    /// default: 44.0
    #[serde(rename = "weight_CO2")]
    pub weight_co2: FloatValue,
    /// unit: g/mol
    /// default: 16.0
    #[serde(rename = "weight_CH4")]
    pub weight_ch4: FloatValue,
    /// unit: g/mol
    /// default: 12.0
    #[serde(rename = "weight_C")]
    pub weight_c: FloatValue,
    /// default: 34.0
    pub ch4_gwp100: FloatValue,
    /// default: 1.0
    pub conv_coeff: FloatValue,
}

impl MethaneParameters {
    pub const SECTION: &'static str = "METHANE";

    pub fn from_config(config: &ConfigStore) -> RGresResult<Self> {
        let get = |key: &str| config.get_float(Self::SECTION, key);
        Ok(Self {
            k1_diff: get("k1_diff")?,
            k2_diff: get("k2_diff")?,
            k3_diff: get("k3_diff")?,
            k4_diff: get("k4_diff")?,
            k1_ebull: get("k1_ebull")?,
            k2_ebull: get("k2_ebull")?,
            k3_ebull: get("k3_ebull")?,
            k1_degas: get("k1_degas")?,
            k2_degas: get("k2_degas")?,
            k3_degas: get("k3_degas")?,
            k4_degas: get("k4_degas")?,
            weight_co2: get("weight_CO2")?,
            weight_ch4: get("weight_CH4")?,
            weight_c: get("weight_C")?,
            ch4_gwp100: get("ch4_gwp100")?,
            conv_coeff: get("conv_coeff")?,
        })
    }

    /// Mass ratio of CH4 to its carbon content
    pub fn ch4_to_c(&self) -> FloatValue {
        self.weight_ch4 / self.weight_c
    }
}

impl Default for MethaneParameters {
    fn default() -> Self {
        Self {
            k1_diff: -0.485,
            k2_diff: -0.012,
            k3_diff: 0.286,
            k4_diff: 0.052,
            k1_ebull: -0.980,
            k2_ebull: 0.700,
            k3_ebull: 0.212,
            k1_degas: -2.605,
            k2_degas: 0.660,
            k3_degas: 1.030,
            k4_degas: -0.012,
            weight_co2: 44.0,
            weight_ch4: 16.0,
            weight_c: 12.0,
            ch4_gwp100: 34.0,
            conv_coeff: 1.0,
        }
    }
}
