//! Pre-impoundment emission coefficients.
//!
//! Background emissions from the land flooded by a reservoir depend on the climate
//! zone, the soil type and the land use of each flooded parcel. The coefficients are
//! stored as a nested table `climate -> soil type -> land use -> coefficient`, one table
//! per gas (t CO2-C/ha/yr for CO2, kg CH4/ha/yr for CH4).

use crate::categories::{Climate, Landuse, SoilType};
use crate::errors::RGresResult;
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Default CO2 table, t CO2-C/ha/yr
pub const DEFAULT_CO2_TABLE: &str = include_str!("../../data/pre_impoundment/carbon_dioxide.toml");
/// Default CH4 table, kg CH4/ha/yr
pub const DEFAULT_CH4_TABLE: &str = include_str!("../../data/pre_impoundment/methane.toml");

type RawTable = BTreeMap<String, BTreeMap<String, BTreeMap<String, FloatValue>>>;

/// Immutable lookup of pre-impoundment emission coefficients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreImpoundmentTable {
    coefficients: BTreeMap<Climate, BTreeMap<SoilType, BTreeMap<Landuse, FloatValue>>>,
}

impl PreImpoundmentTable {
    pub fn from_toml_str(contents: &str) -> RGresResult<Self> {
        let raw: RawTable = toml::from_str(contents)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> RGresResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        log::debug!(
            "Loaded pre-impoundment table from {}",
            path.as_ref().display()
        );
        Self::from_toml_str(&contents)
    }

    /// Table embedded from `data/pre_impoundment/carbon_dioxide.toml`
    pub fn default_carbon_dioxide() -> RGresResult<Self> {
        Self::from_toml_str(DEFAULT_CO2_TABLE)
    }

    /// Table embedded from `data/pre_impoundment/methane.toml`
    pub fn default_methane() -> RGresResult<Self> {
        Self::from_toml_str(DEFAULT_CH4_TABLE)
    }

    fn from_raw(raw: RawTable) -> Self {
        let mut coefficients = BTreeMap::new();
        for (climate_key, soils) in raw {
            let Ok(climate) = climate_key.parse::<Climate>() else {
                log::warn!("Skipping unknown climate `{}` in pre-impoundment table", climate_key);
                continue;
            };
            let climate_entry: &mut BTreeMap<SoilType, BTreeMap<Landuse, FloatValue>> =
                coefficients.entry(climate).or_default();
            for (soil_key, landuses) in soils {
                let Ok(soil_type) = soil_key.parse::<SoilType>() else {
                    log::warn!("Skipping unknown soil type `{}` in pre-impoundment table", soil_key);
                    continue;
                };
                let soil_entry = climate_entry.entry(soil_type).or_default();
                for (landuse_key, coefficient) in landuses {
                    match landuse_key.parse::<Landuse>() {
                        Ok(landuse) => {
                            soil_entry.insert(landuse, coefficient);
                        }
                        Err(_) => log::warn!(
                            "Skipping unknown land use `{}` in pre-impoundment table",
                            landuse_key
                        ),
                    }
                }
            }
        }
        Self { coefficients }
    }

    /// Insert or replace a single coefficient
    pub fn insert(
        &mut self,
        climate: Climate,
        soil_type: SoilType,
        landuse: Landuse,
        coefficient: FloatValue,
    ) {
        self.coefficients
            .entry(climate)
            .or_default()
            .entry(soil_type)
            .or_default()
            .insert(landuse, coefficient);
    }

    /// Coefficient for a combination of categories, `None` if the table does not cover it
    pub fn coefficient(
        &self,
        climate: Climate,
        soil_type: SoilType,
        landuse: Landuse,
    ) -> Option<FloatValue> {
        self.coefficients
            .get(&climate)?
            .get(&soil_type)?
            .get(&landuse)
            .copied()
    }

    /// Sum of `area * fraction * coefficient` over the flooded land uses.
    ///
    /// `area_fractions` is matched in order against [`Landuse::ALL`], repeating the
    /// land use sequence for every soil class block. Only the first block per
    /// [`SoilType`] is read, any further fractions are ignored. Land uses the table
    /// does not cover contribute nothing. The result has the table's unit multiplied by the
    /// unit of `area`.
    pub fn landuse_weighted_total(
        &self,
        climate: Climate,
        soil_type: SoilType,
        area_fractions: &[FloatValue],
        area: FloatValue,
    ) -> FloatValue {
        Landuse::ALL
            .iter()
            .cycle()
            .take(SoilType::ALL.len() * Landuse::ALL.len())
            .zip(area_fractions)
            .filter_map(|(landuse, fraction)| {
                self.coefficient(climate, soil_type, *landuse)
                    .map(|coefficient| area * fraction * coefficient)
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}
