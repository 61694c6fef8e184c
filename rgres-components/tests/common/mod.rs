//! Collaborators with directly specified attributes, so expected values can be
//! evaluated by hand.
#![allow(dead_code)]

use rgres_core::catchment::Catchment;
use rgres_core::categories::{
    BiogenicFactors, Biome, Climate, PhosphorusMethod, RetentionMethod, SoilType,
};
use rgres_core::reservoir::Reservoir;
use rgres_core::FloatValue;

#[derive(Debug, Clone)]
pub struct FixedCatchment {
    pub nitrogen_load: FloatValue,
    pub phosphorus_load: FloatValue,
    pub inflow_p_conc: FloatValue,
    pub discharge: FloatValue,
    pub river_area: FloatValue,
    pub biogenic_factors: BiogenicFactors,
}

impl Default for FixedCatchment {
    fn default() -> Self {
        Self {
            nitrogen_load: 10_000.0,
            phosphorus_load: 1_000.0,
            inflow_p_conc: 10.0,
            discharge: 1.0e8,
            river_area: 0.5,
            biogenic_factors: BiogenicFactors::new(Biome::TropicalMoistBroadleaf, Climate::Tropical)
                .with_soil_type(SoilType::Organic),
        }
    }
}

impl Catchment for FixedCatchment {
    fn nitrogen_load(&self) -> FloatValue {
        self.nitrogen_load
    }

    fn phosphorus_load(&self, _method: PhosphorusMethod) -> FloatValue {
        self.phosphorus_load
    }

    fn inflow_p_conc(&self, _method: PhosphorusMethod) -> FloatValue {
        self.inflow_p_conc
    }

    fn discharge(&self) -> FloatValue {
        self.discharge
    }

    fn biogenic_factors(&self) -> &BiogenicFactors {
        &self.biogenic_factors
    }

    fn river_area_before_impoundment(&self) -> FloatValue {
        self.river_area
    }
}

/// Reservoir returning its TP concentration unchanged by retention
#[derive(Debug, Clone)]
pub struct FixedReservoir {
    pub area: FloatValue,
    pub area_fractions: Vec<FloatValue>,
    pub soil_carbon: FloatValue,
    pub littoral_area_frac: FloatValue,
    pub global_radiance: FloatValue,
    pub residence_time: FloatValue,
    pub discharge: FloatValue,
    pub water_intake_depth: FloatValue,
    pub thermocline_depth: FloatValue,
    pub ch4_preemission_factor: FloatValue,
}

impl Default for FixedReservoir {
    fn default() -> Self {
        let mut area_fractions = vec![0.0; 27];
        area_fractions[7] = 0.6;
        area_fractions[9 + 5] = 0.4;
        Self {
            area: 10.0,
            area_fractions,
            soil_carbon: 2.0,
            littoral_area_frac: 50.0,
            global_radiance: 4.0,
            residence_time: 2.0,
            discharge: 1.0e8,
            water_intake_depth: 20.0,
            thermocline_depth: 10.0,
            ch4_preemission_factor: 0.0,
        }
    }
}

impl Reservoir for FixedReservoir {
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
        self.residence_time
    }

    fn discharge(&self) -> FloatValue {
        self.discharge
    }

    fn water_intake_depth(&self) -> FloatValue {
        self.water_intake_depth
    }

    fn thermocline_depth(&self, _wind_speed: FloatValue) -> FloatValue {
        self.thermocline_depth
    }

    fn mean_monthly_windspeed(&self) -> FloatValue {
        3.0
    }

    fn ch4_preemission_factor(&self) -> FloatValue {
        self.ch4_preemission_factor
    }

    fn reservoir_tp(&self, inflow_conc: FloatValue, _method: RetentionMethod) -> FloatValue {
        inflow_conc
    }
}
