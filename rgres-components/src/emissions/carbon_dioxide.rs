//! CO2 emissions from reservoirs
//!
//! Net CO2 emission = gross diffusive emission (post-impoundment)
//! - pre-impoundment emission - unrelated non-anthropogenic emission.
//!
//! # Reference
//!
//! Prairie et al. (2021), A new modelling framework to assess biogenic GHG emissions
//! from reservoirs: The G-res tool. Environmental Modelling & Software 143, 105117.

use crate::emissions::parse_phosphorus_method;
use crate::parameters::CarbonDioxideParameters;
use crate::settings::EmissionSettings;
use rgres_core::catchment::Catchment;
use rgres_core::categories::{Gas, PhosphorusMethod, RetentionMethod};
use rgres_core::diagnostics::Diagnostic;
use rgres_core::emission::{Emission, EmissionBase, DEFAULT_HORIZON};
use rgres_core::errors::{ensure_positive, RGresResult};
use rgres_core::gwp::resolve_gwp;
use rgres_core::pre_impoundment::PreImpoundmentTable;
use rgres_core::reservoir::Reservoir;
use rgres_core::FloatValue;

/// Age at which the reservoir flux is taken as non-anthropogenic, yr
const NONANTHRO_YEAR: FloatValue = 100.0;

/// Diffusive CO2 emission model
#[derive(Debug, Clone)]
pub struct CarbonDioxideEmission<'a> {
    base: EmissionBase<'a>,
    /// Effective annual temperature for CO2, degC
    eff_temp: FloatValue,
    p_calc_method: PhosphorusMethod,
    retention_method: RetentionMethod,
    parameters: &'a CarbonDioxideParameters,
    pre_impoundment_table: &'a PreImpoundmentTable,
}

impl<'a> CarbonDioxideEmission<'a> {
    /// Create the model for one reservoir.
    ///
    /// An unknown `p_calc_method` falls back to `g-res`, and an unknown retention
    /// method in the settings falls back to `larsen`. Both are recorded in
    /// [`Self::diagnostics`].
    pub fn new(
        catchment: &'a dyn Catchment,
        reservoir: &'a dyn Reservoir,
        eff_temp: FloatValue,
        p_calc_method: &str,
        preinund_area: Option<FloatValue>,
        settings: &'a EmissionSettings,
    ) -> Self {
        let mut base = EmissionBase::new(catchment, reservoir, preinund_area);
        let (p_calc_method, diagnostic) = parse_phosphorus_method(p_calc_method);
        base.extend_diagnostics(diagnostic);
        let (retention_method, diagnostic) = settings.calculations.retention_method();
        base.extend_diagnostics(diagnostic);

        Self {
            base,
            eff_temp,
            p_calc_method,
            retention_method,
            parameters: &settings.carbon_dioxide,
            pre_impoundment_table: &settings.co2_pre_impoundment,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.base.diagnostics()
    }

    pub fn p_calc_method(&self) -> PhosphorusMethod {
        self.p_calc_method
    }

    /// Reservoir total phosphorus concentration, µg/L
    pub fn reservoir_tp(&self) -> FloatValue {
        self.base.reservoir.reservoir_tp(
            self.base.catchment.inflow_p_conc(self.p_calc_method),
            self.retention_method,
        )
    }

    /// Unit CO2 emission of the flooded land before impoundment, g CO2-eq/m2/yr
    ///
    /// The table holds t CO2-C/ha/yr per climate, soil type and land use. Land uses
    /// without a coefficient are skipped.
    pub fn pre_impoundment(&self) -> RGresResult<FloatValue> {
        let area = ensure_positive("reservoir area", self.base.reservoir.area())?;
        let factors = self.base.catchment.biogenic_factors();
        // t CO2-C/yr, with the area converted from km2 to ha
        let total = self.pre_impoundment_table.landuse_weighted_total(
            factors.climate,
            factors.soil_type,
            self.base.reservoir.area_fractions(),
            100.0 * area,
        );
        Ok(total / area * self.parameters.co2_to_c() * self.parameters.co2_gwp100)
    }

    /// Gross diffusive CO2 flux at reservoir age `year`, g CO2-eq/m2/yr
    ///
    /// $$q(t) = 10^{k_1 + k_2 \log_{10} t + k_3 T_{eff} + k_4 \log_{10} A + k_5 C_{soil} + k_6 \log_{10} TP}
    /// \left(1 - \frac{A_{pre}}{A}\right) \frac{44}{12} \frac{365.25}{1000} \, GWP$$
    ///
    /// The regression gives mg CO2-C/m2/d. Only the 100-year GWP is available, see
    /// [`resolve_gwp`].
    pub fn diffusion_flux(&self, year: FloatValue, time_horizon: u32) -> RGresResult<FloatValue> {
        let p = self.parameters;
        let gwp = resolve_gwp(Gas::CarbonDioxide, p.co2_gwp100, time_horizon);
        let year = ensure_positive("reservoir age", year)?;
        let area = ensure_positive("reservoir area", self.base.reservoir.area())?;
        let tp = ensure_positive("reservoir TP concentration", self.reservoir_tp())?;

        let exponent = p.k1_diff
            + p.k2_diff * year.log10()
            + p.k3_diff * self.eff_temp
            + p.k4_diff * area.log10()
            + p.k5_diff * self.base.reservoir.soil_carbon()
            + p.k6_diff * tp.log10();
        Ok(gwp * p.co2_to_c() / 1_000.0 * 365.25
            * 10f64.powf(exponent)
            * (1.0 - self.base.preinund_area / area))
    }

    /// Gross diffusive CO2 flux averaged over `number_of_years`, g CO2-eq/m2/yr
    ///
    /// Analytic integral of the power-law decay from the middle of the first year:
    ///
    /// $$\bar{q}(n) = q(1) \frac{n^{k_7 + 1} - 0.5^{k_7 + 1}}{(k_7 + 1)(n - 0.5)}$$
    pub fn diffusion_flux_int(&self, number_of_years: u32) -> RGresResult<FloatValue> {
        let n = ensure_positive("number of years", FloatValue::from(number_of_years))?;
        let exponent = self.parameters.k7_diff + 1.0;
        let integral = if exponent.abs() < FloatValue::EPSILON {
            (n.ln() - 0.5f64.ln()) / (n - 0.5)
        } else {
            (n.powf(exponent) - 0.5f64.powf(exponent)) / (exponent * (n - 0.5))
        };
        Ok(self.diffusion_flux(1.0, number_of_years)? * integral)
    }

    /// Flux remaining after 100 years, attributed to non-anthropogenic sources
    pub fn diffusion_flux_nonanthro(&self) -> RGresResult<FloatValue> {
        self.diffusion_flux(NONANTHRO_YEAR, DEFAULT_HORIZON)
    }

    /// Gross diffusive flux for each year in `years`
    pub fn diffusion_flux_profile(&self, years: &[u32]) -> RGresResult<Vec<FloatValue>> {
        years
            .iter()
            .map(|year| self.diffusion_flux(FloatValue::from(*year), DEFAULT_HORIZON))
            .collect()
    }

    /// Gross minus non-anthropogenic emission over `number_of_years`, g CO2-eq/m2/yr
    pub fn net_total(&self, number_of_years: u32) -> RGresResult<FloatValue> {
        Ok(self.diffusion_flux_int(number_of_years)? - self.diffusion_flux_nonanthro()?)
    }
}

impl Emission for CarbonDioxideEmission<'_> {
    fn reservoir_area(&self) -> FloatValue {
        self.base.reservoir.area()
    }

    fn profile(&self, years: &[u32]) -> RGresResult<Vec<FloatValue>> {
        let nonanthro = self.diffusion_flux_nonanthro()?;
        let pre_impoundment = self.pre_impoundment()?;
        Ok(self
            .diffusion_flux_profile(years)?
            .into_iter()
            .map(|flux| flux - nonanthro - pre_impoundment)
            .collect())
    }

    fn factor(&self, number_of_years: u32) -> RGresResult<FloatValue> {
        Ok(self.net_total(number_of_years)? - self.pre_impoundment()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::test_fixtures::{catchment, reservoir};
    use approx::assert_relative_eq;
    use rgres_core::errors::RGresError;

    #[test]
    fn test_invalid_p_method_falls_back() {
        let settings = EmissionSettings::load_default().unwrap();
        let (catchment, reservoir) = (catchment(), reservoir());
        let emission =
            CarbonDioxideEmission::new(&catchment, &reservoir, 15.0, "bogus", Some(0.5), &settings);

        assert_eq!(emission.p_calc_method(), PhosphorusMethod::GRes);
        assert!(matches!(
            emission.diagnostics(),
            [Diagnostic::UnsupportedPhosphorusMethod { .. }]
        ));
    }

    #[test]
    fn test_reservoir_tp_uses_selected_method() {
        let settings = EmissionSettings::load_default().unwrap();
        let (catchment, reservoir) = (catchment(), reservoir());
        let gres =
            CarbonDioxideEmission::new(&catchment, &reservoir, 15.0, "g-res", None, &settings);
        let mcdowell =
            CarbonDioxideEmission::new(&catchment, &reservoir, 15.0, "mcdowell", None, &settings);

        // WRT = 4 yr gives a Larsen retention of 2/3
        assert_relative_eq!(gres.reservoir_tp(), 20.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(mcdowell.reservoir_tp(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_decay_exponent() {
        let mut settings = EmissionSettings::load_default().unwrap();
        settings.carbon_dioxide.k7_diff = -1.0;
        let (catchment, reservoir) = (catchment(), reservoir());
        let emission =
            CarbonDioxideEmission::new(&catchment, &reservoir, 15.0, "g-res", Some(0.5), &settings);

        let flux_int = emission.diffusion_flux_int(100).unwrap();
        let expected =
            emission.diffusion_flux(1.0, 100).unwrap() * (100f64.ln() - 0.5f64.ln()) / 99.5;
        assert!(flux_int.is_finite());
        assert_relative_eq!(flux_int, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_non_positive_inputs_are_domain_errors() {
        let settings = EmissionSettings::load_default().unwrap();
        let catchment = catchment();
        let mut reservoir = reservoir();
        let emission =
            CarbonDioxideEmission::new(&catchment, &reservoir, 15.0, "g-res", Some(0.5), &settings);
        assert!(matches!(
            emission.diffusion_flux(0.0, 100),
            Err(RGresError::NonPositiveValue { quantity: "reservoir age", .. })
        ));
        assert!(emission.diffusion_flux_int(0).is_err());

        reservoir.area = 0.0;
        let emission =
            CarbonDioxideEmission::new(&catchment, &reservoir, 15.0, "g-res", Some(0.5), &settings);
        assert!(matches!(
            emission.factor(100),
            Err(RGresError::NonPositiveValue { .. })
        ));
    }

    #[test]
    fn test_pre_impoundment_uses_table() {
        let settings = EmissionSettings::load_default().unwrap();
        let (catchment, reservoir) = (catchment(), reservoir());
        let emission =
            CarbonDioxideEmission::new(&catchment, &reservoir, 15.0, "g-res", Some(0.5), &settings);

        let factors = &catchment.biogenic_factors;
        let expected = settings.co2_pre_impoundment.landuse_weighted_total(
            factors.climate,
            factors.soil_type,
            &reservoir.area_fractions,
            100.0 * reservoir.area,
        ) / reservoir.area
            * 44.0
            / 12.0;
        assert_relative_eq!(emission.pre_impoundment().unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_reservoir_tp_is_domain_error() {
        let settings = EmissionSettings::load_default().unwrap();
        let reservoir = reservoir();
        let mut catchment = catchment();
        catchment.inflow_p_conc_gres = 0.0;
        let emission =
            CarbonDioxideEmission::new(&catchment, &reservoir, 15.0, "g-res", Some(0.5), &settings);
        assert_eq!(emission.reservoir_tp(), 0.0);
        assert!(matches!(
            emission.diffusion_flux(1.0, 100),
            Err(RGresError::NonPositiveValue { quantity: "reservoir TP concentration", .. })
        ));
    }
}
