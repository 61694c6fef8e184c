//! Catchment collaborator.
//!
//! The emission models only consume a handful of catchment quantities, described by
//! the [`Catchment`] trait. [`CatchmentData`] implements it from a record of
//! already-derived catchment attributes (inflow concentrations are estimated
//! upstream from the McDowell or G-res regressions).

use crate::categories::{BiogenicFactors, Landuse, PhosphorusMethod};
use crate::errors::{RGresError, RGresResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds in a mean (Julian) year
const SECONDS_PER_YEAR: FloatValue = 365.25 * 24.0 * 60.0 * 60.0;

/// Catchment quantities required by the emission models
pub trait Catchment: fmt::Debug + Send + Sync {
    /// Total nitrogen load entering the reservoir, kg N/yr
    fn nitrogen_load(&self) -> FloatValue;

    /// Total phosphorus load entering the reservoir, kg P/yr
    fn phosphorus_load(&self, method: PhosphorusMethod) -> FloatValue;

    /// Median inflow total phosphorus concentration, µg/L
    fn inflow_p_conc(&self, method: PhosphorusMethod) -> FloatValue;

    /// Mean annual discharge, m3/yr
    fn discharge(&self) -> FloatValue;

    fn biogenic_factors(&self) -> &BiogenicFactors;

    /// Area occupied by the river before impoundment, km2
    fn river_area_before_impoundment(&self) -> FloatValue;
}

/// Check that a land use fraction vector has one entry per land use (optionally
/// repeated in blocks) and sums to one.
pub fn validate_area_fractions(
    area_fractions: &[FloatValue],
    allow_blocks: bool,
    accuracy: FloatValue,
) -> RGresResult<()> {
    let number_of_landuses = Landuse::ALL.len();
    let valid_length = if allow_blocks {
        !area_fractions.is_empty() && area_fractions.len() % number_of_landuses == 0
    } else {
        area_fractions.len() == number_of_landuses
    };
    if !valid_length {
        return Err(RGresError::WrongAreaFractions {
            number_of_fractions: area_fractions.len(),
            number_of_landuses,
        });
    }
    let sum: FloatValue = area_fractions.iter().sum();
    if (sum - 1.0).abs() > accuracy {
        return Err(RGresError::WrongSumOfAreas { sum, accuracy });
    }
    Ok(())
}

fn default_name() -> String {
    "n/a".to_string()
}

/// Catchment described by pre-computed attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchmentData {
    #[serde(default = "default_name")]
    pub name: String,
    /// Catchment area, km2
    pub area: FloatValue,
    /// River length before impoundment, km
    pub riv_length: FloatValue,
    /// Mean annual runoff, mm/yr
    pub runoff: FloatValue,
    /// Population in the catchment, capita
    #[serde(default)]
    pub population: FloatValue,
    /// Fractions of the catchment area per land use, aligned to [`Landuse::ALL`]
    pub area_fractions: Vec<FloatValue>,
    pub biogenic_factors: BiogenicFactors,
    /// Inflow TP concentration from the G-res export coefficients, µg/L
    pub inflow_p_conc_gres: FloatValue,
    /// Inflow TP concentration from the McDowell regression, µg/L
    pub inflow_p_conc_mcdowell: FloatValue,
    /// Inflow TN concentration from the McDowell regression, µg/L
    pub inflow_n_conc: FloatValue,
    /// Measured river width, m. Estimated allometrically when absent.
    #[serde(default)]
    pub river_width: Option<FloatValue>,
}

impl CatchmentData {
    /// Check the land use fractions against `accuracy`
    /// (`CALCULATIONS.eps_catchment_area_fractions`)
    pub fn validate(&self, accuracy: FloatValue) -> RGresResult<()> {
        validate_area_fractions(&self.area_fractions, false, accuracy).map_err(|err| {
            log::error!("Invalid area fractions for catchment {}: {}", self.name, err);
            err
        })
    }

    pub fn area_ha(&self) -> FloatValue {
        self.area * 100.0
    }

    /// Population density, capita/km2
    pub fn population_density(&self) -> FloatValue {
        self.population / self.area
    }

    /// Area allocated to a land use, km2
    pub fn landuse_area(&self, landuse: Landuse) -> FloatValue {
        Landuse::ALL
            .iter()
            .position(|item| *item == landuse)
            .and_then(|index| self.area_fractions.get(index))
            .map_or(0.0, |fraction| self.area * fraction)
    }

    /// Mean annual discharge, m3/s
    pub fn discharge_cumecs(&self) -> FloatValue {
        self.discharge() / SECONDS_PER_YEAR
    }

    /// River width, m. Whipple et al. (2013) allometry when not measured.
    pub fn river_width(&self) -> FloatValue {
        self.river_width
            .unwrap_or_else(|| 5.9 * self.area.powf(0.32))
    }
}

impl Catchment for CatchmentData {
    fn nitrogen_load(&self) -> FloatValue {
        // 1e-6 converts mg/m3 (µg/L) to kg/m3
        1e-6 * self.discharge() * self.inflow_n_conc
    }

    fn phosphorus_load(&self, method: PhosphorusMethod) -> FloatValue {
        1e-6 * self.discharge() * self.inflow_p_conc(method)
    }

    fn inflow_p_conc(&self, method: PhosphorusMethod) -> FloatValue {
        match method {
            PhosphorusMethod::GRes => self.inflow_p_conc_gres,
            PhosphorusMethod::McDowell => self.inflow_p_conc_mcdowell,
        }
    }

    fn discharge(&self) -> FloatValue {
        1_000.0 * self.runoff * self.area
    }

    fn biogenic_factors(&self) -> &BiogenicFactors {
        &self.biogenic_factors
    }

    fn river_area_before_impoundment(&self) -> FloatValue {
        1e-3 * self.river_width() * self.riv_length
    }
}
