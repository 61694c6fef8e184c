//! N2O emissions from reservoirs
//!
//! Two alternative models estimate N2O from the nitrogen entering the reservoir:
//!
//! - `model_1` sums the N2O produced by denitrification and nitrification of the
//!   catchment and internally fixed nitrogen.
//! - `model_2` uses a single regression of total N2O which accounts for N2O
//!   saturation and internal consumption.
//!
//! N2O has no temporal decay model, so the emission factor does not depend on the
//! number of years and the profile is flat. Pre-impoundment N2O is not modelled.

use crate::emissions::parse_phosphorus_method;
use crate::parameters::NitrousOxideParameters;
use crate::settings::EmissionSettings;
use libm::erf;
use rgres_core::catchment::Catchment;
use rgres_core::categories::PhosphorusMethod;
use rgres_core::diagnostics::Diagnostic;
use rgres_core::emission::{Emission, EmissionBase};
use rgres_core::errors::{ensure_positive, RGresError, RGresResult};
use rgres_core::reservoir::Reservoir;
use rgres_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names accepted for the N2O model
pub const AVAILABLE_MODELS: &[&str] = &["model_1", "model_2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum N2OModel {
    #[default]
    #[serde(rename = "model_1")]
    Model1,
    #[serde(rename = "model_2")]
    Model2,
}

impl N2OModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            N2OModel::Model1 => AVAILABLE_MODELS[0],
            N2OModel::Model2 => AVAILABLE_MODELS[1],
        }
    }
}

impl fmt::Display for N2OModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for N2OModel {
    type Err = RGresError;

    fn from_str(s: &str) -> RGresResult<Self> {
        match s {
            "model_1" => Ok(N2OModel::Model1),
            "model_2" => Ok(N2OModel::Model2),
            _ => Err(RGresError::WrongN2OModel {
                model: s.to_string(),
                permitted: AVAILABLE_MODELS,
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NitrousOxideEmission<'a> {
    base: EmissionBase<'a>,
    model: N2OModel,
    p_export_method: PhosphorusMethod,
    parameters: &'a NitrousOxideParameters,
}

impl<'a> NitrousOxideEmission<'a> {
    /// Create the model for one reservoir.
    ///
    /// Unknown `model` names fall back to `model_1` and unknown P export methods to
    /// `g-res`, each with a diagnostic. Selecting an unknown model later, through
    /// [`Self::factor_with`], is an error.
    pub fn new(
        catchment: &'a dyn Catchment,
        reservoir: &'a dyn Reservoir,
        model: &str,
        p_export_model: &str,
        preinund_area: Option<FloatValue>,
        settings: &'a EmissionSettings,
    ) -> Self {
        let mut base = EmissionBase::new(catchment, reservoir, preinund_area);
        let model = match model.parse::<N2OModel>() {
            Ok(model) => model,
            Err(_) => {
                base.extend_diagnostics(Some(Diagnostic::UnsupportedN2OModel {
                    requested: model.to_string(),
                    fallback: N2OModel::default().as_str(),
                }));
                N2OModel::default()
            }
        };
        let (p_export_method, diagnostic) = parse_phosphorus_method(p_export_model);
        base.extend_diagnostics(diagnostic);

        Self {
            base,
            model,
            p_export_method,
            parameters: &settings.nitrous_oxide,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.base.diagnostics()
    }

    pub fn model(&self) -> N2OModel {
        self.model
    }

    fn residence_time(&self) -> FloatValue {
        self.base.reservoir.residence_time()
    }

    /// kg N/yr to mmol N/m2/yr
    pub fn total_to_unit(&self, emission: FloatValue) -> FloatValue {
        emission / self.parameters.weight_n / self.base.reservoir.area()
    }

    /// mmol N/m2/yr to kg N/yr
    pub fn unit_to_total(&self, unit_emission: FloatValue) -> FloatValue {
        unit_emission * self.base.reservoir.area() * self.parameters.weight_n
    }

    /// mmol N/m2/yr to g CO2-eq/m2/yr
    fn unit_to_co2_eq(&self, unit_emission: FloatValue) -> FloatValue {
        let p = self.parameters;
        p.weight_n * p.n2o_to_n() * p.nitrous_gwp100 * unit_emission * 1e-3
    }

    /// Internal nitrogen fixation load, kg N/yr (Maavara et al., 2018)
    ///
    /// As a percentage of the inflow TN load,
    ///
    /// $$L_{fix} = \mu \frac{37.2}{1 + \exp(0.5 \, TN{:}TP - 6.877)}, \qquad \mu = \max(0, \mathrm{erf}((WRT - 0.028) / 0.04))$$
    ///
    /// where $TN{:}TP$ is the molar ratio of the inflow loads.
    pub fn tn_fixation_load(&self) -> FloatValue {
        let p = self.parameters;
        let tn_load = self.base.catchment.nitrogen_load();
        if tn_load == 0.0 {
            return 0.0;
        }
        let tp_load = self.base.catchment.phosphorus_load(self.p_export_method);
        let mu_coeff = erf((self.residence_time() - 0.028) / 0.04).max(0.0);
        let tn_tp_ratio = (tn_load / p.weight_n) / (tp_load / p.weight_p);
        let tn_fix_percent = 37.2 / (1.0 + (0.5 * tn_tp_ratio - 6.877).exp()) * mu_coeff;
        0.01 * tn_fix_percent * tn_load
    }

    /// Inflow plus internally fixed nitrogen, kg N/yr
    fn tn_loading(&self) -> FloatValue {
        self.base.catchment.nitrogen_load() + self.tn_fixation_load()
    }

    /// N2O from denitrification following model 1, kg N/yr
    pub fn denitrification_m1(&self) -> FloatValue {
        0.009 * self.tn_loading() * (0.3833 * erf(0.4723 * self.residence_time()))
    }

    /// N2O from nitrification following model 1, kg N/yr
    pub fn nitrification_m1(&self) -> FloatValue {
        0.009 * self.tn_loading() * (0.5144 * erf(0.3692 * self.residence_time()))
    }

    /// Model 1 emission, g CO2-eq/m2/yr
    pub fn emission_m1_co2(&self) -> FloatValue {
        let total = self.denitrification_m1() + self.nitrification_m1();
        self.unit_to_co2_eq(self.total_to_unit(total))
    }

    /// Total N2O following model 2, kg N/yr
    pub fn emission_m2_n(&self) -> FloatValue {
        self.base.catchment.nitrogen_load() * (0.002277 * erf(1.63 * self.residence_time()))
    }

    /// Model 2 emission, mmol N/m2/yr
    pub fn unit_emission_m2(&self) -> FloatValue {
        self.total_to_unit(self.emission_m2_n())
    }

    /// Model 2 emission, g CO2-eq/m2/yr
    pub fn emission_m2_co2(&self) -> FloatValue {
        self.unit_to_co2_eq(self.unit_emission_m2())
    }

    /// Denitrification share of the model 2 emission, kg N/yr
    pub fn denitrification_m2(&self) -> FloatValue {
        let decay = (-((self.residence_time() + 1.366) / 2.751)).exp();
        self.unit_to_total(0.7789 * decay.powi(2) * self.unit_emission_m2())
    }

    /// Nitrification share of the model 2 emission, kg N/yr
    pub fn nitrification_m2(&self) -> FloatValue {
        self.emission_m2_n() - self.denitrification_m2()
    }

    /// Emission factor for an explicitly selected model, g CO2-eq/m2/yr
    ///
    /// With `mean` set the two models are averaged. `model` defaults to the model
    /// chosen at construction; an unknown name is an error.
    pub fn factor_with(&self, mean: bool, model: Option<&str>) -> RGresResult<FloatValue> {
        let model = match model {
            Some(name) => name.parse::<N2OModel>()?,
            None => self.model,
        };
        ensure_positive("reservoir area", self.base.reservoir.area())?;
        if mean {
            return Ok(0.5 * (self.emission_m1_co2() + self.emission_m2_co2()));
        }
        Ok(match model {
            N2OModel::Model1 => self.emission_m1_co2(),
            N2OModel::Model2 => self.emission_m2_co2(),
        })
    }

    /// TN leaving the reservoir after burial and denitrification, kg N/yr
    pub fn nitrogen_downstream_load(&self) -> FloatValue {
        let residence_time = self.residence_time();
        let tn_burial_factor = 0.51 * erf(0.4723 * residence_time);
        let tn_denitr_factor = 0.3833 * erf(0.4723 * residence_time);
        let tn_loading = self.tn_loading();
        tn_loading - tn_burial_factor * tn_loading - tn_denitr_factor * tn_loading
    }

    /// TN concentration downstream of the reservoir, mg N/L
    pub fn nitrogen_downstream_conc(&self) -> RGresResult<FloatValue> {
        let discharge = ensure_positive("catchment discharge", self.base.catchment.discharge())?;
        Ok(1e3 * self.nitrogen_downstream_load() / discharge)
    }
}

impl Emission for NitrousOxideEmission<'_> {
    fn reservoir_area(&self) -> FloatValue {
        self.base.reservoir.area()
    }

    fn profile(&self, years: &[u32]) -> RGresResult<Vec<FloatValue>> {
        Ok(vec![self.factor_with(false, None)?; years.len()])
    }

    /// `number_of_years` has no effect.
    fn factor(&self, _number_of_years: u32) -> RGresResult<FloatValue> {
        self.factor_with(false, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::test_fixtures::{catchment, reservoir};
    use approx::assert_relative_eq;

    #[test]
    fn test_model_parsing() {
        assert_eq!("model_2".parse::<N2OModel>().unwrap(), N2OModel::Model2);
        let err = "model_3".parse::<N2OModel>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "N2O model `model_3` not recognized. Permitted models: [\"model_1\", \"model_2\"]"
        );
    }

    #[test]
    fn test_unknown_model_falls_back_at_construction() {
        let settings = EmissionSettings::load_default().unwrap();
        let (catchment, reservoir) = (catchment(), reservoir());
        let emission =
            NitrousOxideEmission::new(&catchment, &reservoir, "bogus", "g-res", None, &settings);

        assert_eq!(emission.model(), N2OModel::Model1);
        assert!(matches!(
            emission.diagnostics(),
            [Diagnostic::UnsupportedN2OModel { .. }]
        ));
        assert!(matches!(
            emission.factor_with(false, Some("bogus")),
            Err(RGresError::WrongN2OModel { .. })
        ));
    }

    #[test]
    fn test_fixation_saturation() {
        let settings = EmissionSettings::load_default().unwrap();
        let catchment = catchment();
        let mut reservoir = reservoir();
        // erf((WRT - 0.028) / 0.04) is negative below 0.028 yr
        reservoir.volume = 0.01 * reservoir.inflow_rate;
        let emission =
            NitrousOxideEmission::new(&catchment, &reservoir, "model_1", "g-res", None, &settings);
        assert_eq!(emission.tn_fixation_load(), 0.0);

        let reservoir = self::reservoir();
        let emission =
            NitrousOxideEmission::new(&catchment, &reservoir, "model_1", "g-res", None, &settings);
        assert!(emission.tn_fixation_load() > 0.0);
    }

    #[test]
    fn test_model_2_split_sums_to_total() {
        let settings = EmissionSettings::load_default().unwrap();
        let (catchment, reservoir) = (catchment(), reservoir());
        let emission =
            NitrousOxideEmission::new(&catchment, &reservoir, "model_2", "g-res", None, &settings);

        assert_relative_eq!(
            emission.denitrification_m2() + emission.nitrification_m2(),
            emission.emission_m2_n(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            emission.unit_to_total(emission.total_to_unit(123.0)),
            123.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_downstream_nitrogen() {
        let settings = EmissionSettings::load_default().unwrap();
        let (catchment, reservoir) = (catchment(), reservoir());
        let emission =
            NitrousOxideEmission::new(&catchment, &reservoir, "model_1", "g-res", None, &settings);

        let wrt = 4.0;
        let loading = catchment.nitrogen_load() + emission.tn_fixation_load();
        let expected = loading * (1.0 - 0.51 * erf(0.4723 * wrt) - 0.3833 * erf(0.4723 * wrt));
        assert_relative_eq!(emission.nitrogen_downstream_load(), expected, max_relative = 1e-12);
        assert_relative_eq!(
            emission.nitrogen_downstream_conc().unwrap(),
            1e3 * expected / catchment.discharge(),
            max_relative = 1e-12
        );
    }
}
