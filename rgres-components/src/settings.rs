//! Parameters and lookup tables shared by every assessment
//!
//! Loading the configuration and the pre-impoundment tables is the only I/O in an
//! assessment. [`EmissionSettings`] performs it once; emission models then borrow the
//! bundle, so a single instance can serve many reservoirs across threads.

use crate::parameters::{
    CalculationParameters, CarbonDioxideParameters, MethaneParameters, NitrousOxideParameters,
};
use rgres_core::config::ConfigStore;
use rgres_core::errors::RGresResult;
use rgres_core::pre_impoundment::PreImpoundmentTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionSettings {
    pub carbon_dioxide: CarbonDioxideParameters,
    pub methane: MethaneParameters,
    pub nitrous_oxide: NitrousOxideParameters,
    pub calculations: CalculationParameters,
    /// t CO2-C/ha/yr
    pub co2_pre_impoundment: PreImpoundmentTable,
    /// kg CH4/ha/yr
    pub ch4_pre_impoundment: PreImpoundmentTable,
}

impl EmissionSettings {
    pub fn from_config(
        config: &ConfigStore,
        co2_pre_impoundment: PreImpoundmentTable,
        ch4_pre_impoundment: PreImpoundmentTable,
    ) -> RGresResult<Self> {
        let settings = Self {
            carbon_dioxide: CarbonDioxideParameters::from_config(config)?,
            methane: MethaneParameters::from_config(config)?,
            nitrous_oxide: NitrousOxideParameters::from_config(config)?,
            calculations: CalculationParameters::from_config(config)?,
            co2_pre_impoundment,
            ch4_pre_impoundment,
        };
        if settings.co2_pre_impoundment.is_empty() || settings.ch4_pre_impoundment.is_empty() {
            log::warn!("Empty pre-impoundment table, pre-impoundment emissions will be zero");
        }
        Ok(settings)
    }

    /// Settings built from the configuration and tables embedded in `rgres-core`
    pub fn load_default() -> RGresResult<Self> {
        Self::from_config(
            &ConfigStore::load_default()?,
            PreImpoundmentTable::default_carbon_dioxide()?,
            PreImpoundmentTable::default_methane()?,
        )
    }
}
