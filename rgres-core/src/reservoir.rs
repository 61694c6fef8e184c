//! Reservoir collaborator.
//!
//! Geometry, hydrology and site attributes of the impounded water body. As with
//! catchments, only the quantities used by the emission models appear on the
//! [`Reservoir`] trait.

use crate::catchment::validate_area_fractions;
use crate::categories::{RetentionMethod, TrophicStatus};
use crate::errors::{ensure_positive, RGresResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance on the sum of the reservoir area fractions
pub const AREA_FRACTIONS_ACCURACY: FloatValue = 0.01;

/// Reservoir quantities required by the emission models
pub trait Reservoir: fmt::Debug + Send + Sync {
    /// Surface area, km2
    fn area(&self) -> FloatValue;

    /// Fractions of the flooded area per land use, in blocks of [`crate::categories::Landuse::ALL`]
    fn area_fractions(&self) -> &[FloatValue];

    /// Soil carbon under the impounded area, kg/m2
    fn soil_carbon(&self) -> FloatValue;

    /// Percentage of the surface area shallower than 3 m, %
    fn littoral_area_frac(&self) -> FloatValue;

    /// Mean horizontal global radiance, kWh/m2/d
    fn global_radiance(&self) -> FloatValue;

    /// Water residence time, yr
    fn residence_time(&self) -> FloatValue;

    /// Outflow discharge, m3/yr
    fn discharge(&self) -> FloatValue;

    /// Depth of the water intake below the surface, m
    fn water_intake_depth(&self) -> FloatValue;

    /// Depth of the thermocline for a given wind speed, m
    fn thermocline_depth(&self, wind_speed: FloatValue) -> FloatValue;

    /// Mean monthly wind speed at 10 m, m/s
    fn mean_monthly_windspeed(&self) -> FloatValue;

    /// Open water CH4 emission of the river before impoundment, kg CH4/ha/yr
    fn ch4_preemission_factor(&self) -> FloatValue;

    /// Total phosphorus concentration in the reservoir, µg/L
    fn reservoir_tp(&self, inflow_conc: FloatValue, method: RetentionMethod) -> FloatValue;
}

/// Reservoir described by pre-computed attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservoirData {
    /// Volume, m3
    pub volume: FloatValue,
    /// Maximum depth, m
    pub max_depth: FloatValue,
    /// Mean depth, m
    pub mean_depth: FloatValue,
    /// Mean annual inflow, m3/yr
    pub inflow_rate: FloatValue,
    /// Surface area, km2
    pub area: FloatValue,
    /// Soil carbon, kg/m2
    pub soil_carbon: FloatValue,
    pub area_fractions: Vec<FloatValue>,
    /// Littoral area, % of the surface area
    pub littoral_area_frac: FloatValue,
    /// kWh/m2/d
    pub global_radiance: FloatValue,
    /// m
    pub water_intake_depth: FloatValue,
    /// Thermocline depth derived for the site wind speed, m
    pub thermocline_depth: FloatValue,
    /// m/s
    pub mean_monthly_windspeed: FloatValue,
    /// kg CH4/ha/yr
    #[serde(default)]
    pub ch4_preemission_factor: FloatValue,
}

impl ReservoirData {
    /// Check the geometry feeding logarithms and the land use fractions
    pub fn validate(&self) -> RGresResult<()> {
        ensure_positive("reservoir area", self.area)?;
        ensure_positive("reservoir volume", self.volume)?;
        ensure_positive("reservoir inflow rate", self.inflow_rate)?;
        validate_area_fractions(&self.area_fractions, true, AREA_FRACTIONS_ACCURACY)
    }

    /// Larsen and Mercier (1976) retention coefficient
    pub fn retention_coeff_larsen(&self) -> FloatValue {
        1.0 / (1.0 + 1.0 / self.residence_time().sqrt())
    }

    /// Empirical retention coefficient for solutes
    pub fn retention_coeff_emp(&self) -> FloatValue {
        1.0 - 1.0 / (1.0 + 0.801 * self.residence_time())
    }

    pub fn retention_coeff(&self, method: RetentionMethod) -> FloatValue {
        match method {
            RetentionMethod::Larsen => self.retention_coeff_larsen(),
            RetentionMethod::Empirical => self.retention_coeff_emp(),
        }
    }

    /// Trophic status from the reservoir TP concentration
    pub fn trophic_status(&self, inflow_conc: FloatValue, method: RetentionMethod) -> TrophicStatus {
        let tp = self.reservoir_tp(inflow_conc, method);
        if tp < 10.0 {
            TrophicStatus::Oligotrophic
        } else if tp < 30.0 {
            TrophicStatus::Mesotrophic
        } else if tp < 100.0 {
            TrophicStatus::Eutrophic
        } else {
            TrophicStatus::HyperEutrophic
        }
    }
}

impl Reservoir for ReservoirData {
    fn area(&self) -> FloatValue {
        self.area
    }

    fn area_fractions(&self) -> &[FloatValue] {
        &self.area_fractions
    }

    fn soil_carbon(&self) -> FloatValue {
        self.soil_carbon
    }

    fn littoral_area_frac(&self) -> FloatValue {
        self.littoral_area_frac
    }

    fn global_radiance(&self) -> FloatValue {
        self.global_radiance
    }

    fn residence_time(&self) -> FloatValue {
        self.volume / self.inflow_rate
    }

    fn discharge(&self) -> FloatValue {
        self.inflow_rate
    }

    fn water_intake_depth(&self) -> FloatValue {
        self.water_intake_depth
    }

    /// Returns the stored depth, which already reflects the site wind speed.
    fn thermocline_depth(&self, _wind_speed: FloatValue) -> FloatValue {
        self.thermocline_depth
    }

    fn mean_monthly_windspeed(&self) -> FloatValue {
        self.mean_monthly_windspeed
    }

    fn ch4_preemission_factor(&self) -> FloatValue {
        self.ch4_preemission_factor
    }

    fn reservoir_tp(&self, inflow_conc: FloatValue, method: RetentionMethod) -> FloatValue {
        inflow_conc * (1.0 - self.retention_coeff(method))
    }
}
