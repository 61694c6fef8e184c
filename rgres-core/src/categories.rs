//! Categorical descriptors of catchments, reservoirs and gases.
//!
//! Every category has a canonical string value which is used both in configuration
//! files (e.g. the keys of the pre-impoundment tables) and in serialised inputs.

use crate::errors::{RGresError, RGresResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines a fieldless enum with a fixed string value per variant.
///
/// Generates `as_str`, `ALL`, `Display` and `FromStr`. Extra accepted spellings can
/// be listed after the canonical value. Parsing is exact and case-sensitive.
macro_rules! categorical_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value $(, alias = $alias)*)] $variant, )+
        }

        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical string value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = RGresError;

            fn from_str(s: &str) -> RGresResult<Self> {
                match s {
                    $( $value $(| $alias)* => Ok($name::$variant), )+
                    _ => Err(RGresError::UnknownCategory {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

categorical_enum! {
    /// Greenhouse gases modelled by the emission components
    Gas, "gas" {
        CarbonDioxide => "co2",
        Methane => "ch4",
        NitrousOxide => "n2o",
    }
}

categorical_enum! {
    /// Climate zone of the catchment
    Climate, "climate" {
        Boreal => "boreal",
        Subtropical => "subtropical",
        Temperate => "temperate",
        Tropical => "tropical",
        Unknown => "unknown",
    }
}

categorical_enum! {
    /// Dominant soil type in the inundated area
    SoilType, "soil type" {
        Mineral => "mineral",
        Organic => "organic",
        NoData => "no data",
    }
}

categorical_enum! {
    /// Land use categories.
    ///
    /// The declaration order is significant: area fraction vectors are aligned to it.
    Landuse, "land use" {
        Bare => "bare",
        SnowIce => "snow and ice",
        Urban => "urban",
        Water => "water",
        Wetlands => "wetlands",
        Crops => "crops",
        Shrubs => "shrubs",
        Forest => "forest",
        NoData => "no data",
    }
}

categorical_enum! {
    /// Biome of the catchment
    Biome, "biome" {
        Deserts => "deserts",
        MedForests => "mediterreanan forests",
        MontaneGrasslands => "montane grasslands",
        TemperateBroadleafAndMixed => "temperate broadleaf and mixed",
        TemperateConifer => "temperate coniferous",
        TemperateGrasslands => "temperate grasslands",
        TropicalDryBroadleaf => "tropical dry broadleaf",
        TropicalGrasslands => "tropical grasslands",
        TropicalMoistBroadleaf => "tropical moist broadleaf",
        Tundra => "tundra",
    }
}

categorical_enum! {
    /// Level of wastewater treatment in the catchment
    TreatmentFactor, "treatment factor" {
        NoTreatment => "no treatment",
        Primary => "primary (mechanical)",
        Secondary => "secondary biological treatment",
        Tertiary => "tertiary",
    }
}

categorical_enum! {
    /// Land use intensity used for land cover P export coefficients
    LanduseIntensity, "land use intensity" {
        Low => "low intensity",
        High => "high intensity",
    }
}

categorical_enum! {
    /// Trophic status of a reservoir derived from its TP concentration
    TrophicStatus, "trophic status" {
        Oligotrophic => "oligotrophic",
        Mesotrophic => "mesotrophic",
        Eutrophic => "eutrophic",
        HyperEutrophic => "hyper eutrophic",
    }
}

categorical_enum! {
    /// Method for estimating phosphorus export from the catchment
    #[derive(Default)]
    PhosphorusMethod, "phosphorus calculation method" {
        #[default]
        GRes => "g-res",
        McDowell => "mcdowell",
    }
}

categorical_enum! {
    /// Model of the solute retention coefficient of a reservoir
    #[derive(Default)]
    RetentionMethod, "retention coefficient method" {
        #[default]
        Larsen => "larsen",
        Empirical => "empirical" | "emp",
    }
}

/// Catchment properties driving the trophic status of the reservoir and the
/// selection of pre-impoundment emission coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiogenicFactors {
    pub biome: Biome,
    pub climate: Climate,
    #[serde(default = "default_soil_type")]
    pub soil_type: SoilType,
    #[serde(default = "default_treatment_factor")]
    pub treatment_factor: TreatmentFactor,
    #[serde(default = "default_landuse_intensity")]
    pub landuse_intensity: LanduseIntensity,
}

fn default_soil_type() -> SoilType {
    SoilType::Mineral
}

fn default_treatment_factor() -> TreatmentFactor {
    TreatmentFactor::NoTreatment
}

fn default_landuse_intensity() -> LanduseIntensity {
    LanduseIntensity::Low
}

impl BiogenicFactors {
    /// Factors with the default soil type, treatment and land use intensity
    pub fn new(biome: Biome, climate: Climate) -> Self {
        Self {
            biome,
            climate,
            soil_type: default_soil_type(),
            treatment_factor: default_treatment_factor(),
            landuse_intensity: default_landuse_intensity(),
        }
    }

    pub fn with_soil_type(mut self, soil_type: SoilType) -> Self {
        self.soil_type = soil_type;
        self
    }
}
