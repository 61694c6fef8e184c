//! CH4 emissions from reservoirs
//!
//! Gross CH4 emission is the sum of three pathways, each integrated over the
//! reservoir lifetime:
//!
//! - diffusion through the water surface, decaying exponentially with age
//! - ebullition (bubbling) from the littoral zone, constant in time
//! - degassing of hypolimnetic water passing through a deep water intake
//!
//! The net emission subtracts the pre-impoundment emission of the flooded land and
//! of the river.

use crate::parameters::MethaneParameters;
use crate::settings::EmissionSettings;
use rgres_core::catchment::Catchment;
use rgres_core::categories::Gas;
use rgres_core::diagnostics::Diagnostic;
use rgres_core::emission::{Emission, EmissionBase, DEFAULT_HORIZON};
use rgres_core::errors::{ensure_positive, RGresResult};
use rgres_core::gwp::resolve_gwp;
use rgres_core::pre_impoundment::PreImpoundmentTable;
use rgres_core::reservoir::Reservoir;
use rgres_core::temperature::MonthlyTemperature;
use rgres_core::FloatValue;
use std::f64::consts::LN_10;

/// Share of the CH4 concentration difference released at the outlet
const DEGASSING_RELEASE_FRACTION: FloatValue = 0.9;

#[derive(Debug, Clone)]
pub struct MethaneEmission<'a> {
    base: EmissionBase<'a>,
    monthly_temp: &'a MonthlyTemperature,
    parameters: &'a MethaneParameters,
    pre_impoundment_table: &'a PreImpoundmentTable,
}

impl<'a> MethaneEmission<'a> {
    pub fn new(
        catchment: &'a dyn Catchment,
        reservoir: &'a dyn Reservoir,
        monthly_temp: &'a MonthlyTemperature,
        preinund_area: Option<FloatValue>,
        settings: &'a EmissionSettings,
    ) -> Self {
        Self {
            base: EmissionBase::new(catchment, reservoir, preinund_area),
            monthly_temp,
            parameters: &settings.methane,
            pre_impoundment_table: &settings.ch4_pre_impoundment,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.base.diagnostics()
    }

    fn gwp(&self, time_horizon: u32) -> FloatValue {
        resolve_gwp(Gas::Methane, self.parameters.ch4_gwp100, time_horizon)
    }

    /// log10 of the littoral area as a fraction of the reservoir area
    fn log_littoral_fraction(&self) -> RGresResult<FloatValue> {
        let littoral_perc =
            ensure_positive("littoral area fraction", self.base.reservoir.littoral_area_frac())?;
        Ok((littoral_perc / 100.0).log10())
    }

    /// Unit CH4 emission before impoundment, g CO2-eq/m2/yr
    ///
    /// Land use emissions from the table (kg CH4/ha/yr) plus the open water emission
    /// of the river, converted to CO2 equivalents with the 100-year GWP.
    pub fn pre_impoundment(&self) -> RGresResult<FloatValue> {
        let p = self.parameters;
        let area = ensure_positive("reservoir area", self.base.reservoir.area())?;
        let factors = self.base.catchment.biogenic_factors();
        let area_ha = 100.0 * area;
        // kg CH4/yr
        let landuse = self.pre_impoundment_table.landuse_weighted_total(
            factors.climate,
            factors.soil_type,
            self.base.reservoir.area_fractions(),
            area_ha,
        );
        let open_water = self.base.reservoir.ch4_preemission_factor() * area_ha;
        // kg/km2 to g/m2
        Ok((landuse + open_water) / area * 1e-3 * p.weight_co2 / p.weight_ch4 * p.ch4_gwp100)
    }

    /// Diffusive CH4 flux at reservoir age `year`, g CO2-eq/m2/yr
    ///
    /// $$q(t) = 10^{k_1 + k_2 t + k_3 \log_{10}(f_{lit}/100) + k_4 T_{eff}} \frac{16}{12} \frac{365}{1000} GWP$$
    pub fn diffusion_flux(&self, year: FloatValue, time_horizon: u32) -> RGresResult<FloatValue> {
        let p = self.parameters;
        let gwp = self.gwp(time_horizon);
        let eff_temp = self.monthly_temp.eff_temp(Gas::Methane)?;
        let exponent =
            p.k1_diff + p.k2_diff * year + p.k3_diff * self.log_littoral_fraction()? + p.k4_diff * eff_temp;
        Ok(10f64.powf(exponent) * p.ch4_to_c() * gwp * 365.0 / 1_000.0)
    }

    /// Diffusive flux averaged over `time_horizon` years, g CO2-eq/m2/yr
    ///
    /// $$\bar{q}(n) = q(1) \frac{1 - 10^{k_2 n}}{-k_2 n \ln 10}$$
    pub fn diffusion_flux_int(&self, time_horizon: u32) -> RGresResult<FloatValue> {
        let n = ensure_positive("number of years", FloatValue::from(time_horizon))?;
        let k2 = self.parameters.k2_diff;
        let integral = if k2.abs() < FloatValue::EPSILON {
            1.0
        } else {
            (1.0 - 10f64.powf(k2 * n)) / (-k2 * n * LN_10)
        };
        Ok(self.diffusion_flux(1.0, time_horizon)? * integral)
    }

    pub fn diffusion_flux_profile(&self, years: &[u32]) -> RGresResult<Vec<FloatValue>> {
        years
            .iter()
            .map(|year| self.diffusion_flux(FloatValue::from(*year), DEFAULT_HORIZON))
            .collect()
    }

    /// Ebullition flux, g CO2-eq/m2/yr
    ///
    /// $$q = 10^{k_1 + k_2 \log_{10}(f_{lit}/100) + k_3 I} \frac{16}{12} \frac{365}{1000} GWP$$
    ///
    /// where $I$ is the mean global radiance. Ebullition does not depend on the
    /// reservoir age; a given `year` is ignored.
    pub fn ebullition_flux(
        &self,
        year: Option<FloatValue>,
        time_horizon: u32,
    ) -> RGresResult<FloatValue> {
        let p = self.parameters;
        let gwp = self.gwp(time_horizon);
        if year.is_some() {
            log::info!("Ebullition is not time-dependent. year argument takes no effect.");
        }
        // mg CH4-C/m2/d
        let emission = 10f64.powf(
            p.k1_ebull
                + p.k2_ebull * self.log_littoral_fraction()?
                + p.k3_ebull * self.base.reservoir.global_radiance(),
        );
        Ok(emission * 365.0 * p.ch4_to_c() * gwp / 1_000.0)
    }

    /// Ebullition averaged over the lifetime, equal to the instantaneous flux
    pub fn ebullition_flux_int(&self, time_horizon: u32) -> RGresResult<FloatValue> {
        self.ebullition_flux(None, time_horizon)
    }

    pub fn ebullition_flux_profile(&self, years: &[u32]) -> RGresResult<Vec<FloatValue>> {
        Ok(vec![self.ebullition_flux_int(DEFAULT_HORIZON)?; years.len()])
    }

    /// Degassing flux averaged over `time_horizon` years, g CO2-eq/m2/yr
    ///
    /// Degassing only occurs when water is drawn from below the thermocline. The CH4
    /// concentration difference across the outlet (mg CH4-C/L) is
    ///
    /// $$\Delta C = 10^{k_1 + k_2 \log_{10} WRT + k_3 \log_{10} \bar{q}_{diff}(n)}$$
    ///
    /// of which 90% is released with the discharge.
    pub fn degassing_flux_int(&self, time_horizon: u32) -> RGresResult<FloatValue> {
        let p = self.parameters;
        let gwp = self.gwp(time_horizon);
        let reservoir = self.base.reservoir;
        let thermocline_depth = reservoir.thermocline_depth(reservoir.mean_monthly_windspeed());
        if reservoir.water_intake_depth() <= thermocline_depth {
            return Ok(0.0);
        }

        let residence_time = ensure_positive("residence time", reservoir.residence_time())?;
        let area = ensure_positive("reservoir area", reservoir.area())?;
        let ch4_conc_diff = 10f64.powf(
            p.k1_degas
                + p.k2_degas * residence_time.log10()
                + p.k3_degas * self.diffusion_flux_int(time_horizon)?.log10(),
        );
        // t CH4-C/yr
        let ch4_out_flux = DEGASSING_RELEASE_FRACTION * 1e-6 * ch4_conc_diff * reservoir.discharge();
        Ok(ch4_out_flux * p.ch4_to_c() * gwp / area)
    }

    /// Degassing flux at reservoir age `year`, g CO2-eq/m2/yr
    ///
    /// Back-calculated from the integrated flux, assuming exponential decay with
    /// exponent $k_4$:
    ///
    /// $$q(t) = q_0 \, e^{k_4 \ln(10) \, t}, \qquad q_0 = \bar{q}(n) \frac{-k_4 \ln(10) \, n}{1 - 10^{k_4 n}}$$
    pub fn degassing_flux(&self, year: FloatValue, time_horizon: u32) -> RGresResult<FloatValue> {
        let k4 = self.parameters.k4_degas;
        let n = ensure_positive("number of years", FloatValue::from(time_horizon))?;
        let flux_int = self.degassing_flux_int(time_horizon)?;
        let init_flux = if k4.abs() < FloatValue::EPSILON {
            flux_int
        } else {
            flux_int * (-k4 * LN_10 * n) / (1.0 - 10f64.powf(k4 * n))
        };
        Ok(init_flux * (k4 * LN_10 * year).exp())
    }

    pub fn degassing_flux_profile(&self, years: &[u32]) -> RGresResult<Vec<FloatValue>> {
        years
            .iter()
            .map(|year| self.degassing_flux(FloatValue::from(*year), DEFAULT_HORIZON))
            .collect()
    }
}

impl Emission for MethaneEmission<'_> {
    fn reservoir_area(&self) -> FloatValue {
        self.base.reservoir.area()
    }

    fn profile(&self, years: &[u32]) -> RGresResult<Vec<FloatValue>> {
        let pre_impoundment = self.pre_impoundment()?;
        let diffusion = self.diffusion_flux_profile(years)?;
        let ebullition = self.ebullition_flux_profile(years)?;
        let degassing = self.degassing_flux_profile(years)?;
        Ok(diffusion
            .iter()
            .zip(&ebullition)
            .zip(&degassing)
            .map(|((diff, ebull), degas)| diff + ebull + degas - pre_impoundment)
            .collect())
    }

    fn factor(&self, number_of_years: u32) -> RGresResult<FloatValue> {
        Ok(self.diffusion_flux_int(number_of_years)?
            + self.ebullition_flux_int(number_of_years)?
            + self.degassing_flux_int(number_of_years)?
            - self.pre_impoundment()?)
    }
}
