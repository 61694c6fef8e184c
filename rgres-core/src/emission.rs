//! The capability set shared by every gas emission model.
//!
//! Unit fluxes are expressed in g CO2-eq/m2/yr. Reservoir areas are in km2, so
//! multiplying a unit flux by the area gives t CO2-eq/yr directly (the 1e6 m2/km2
//! and 1e-6 t/g factors cancel).

use crate::catchment::Catchment;
use crate::diagnostics::Diagnostic;
use crate::errors::RGresResult;
use crate::reservoir::Reservoir;
use crate::FloatValue;
use std::fmt;

/// Assumed reservoir lifetime, yr
pub const DEFAULT_HORIZON: u32 = 100;

/// Emission contract implemented by the CO2, CH4 and N2O models
pub trait Emission: fmt::Debug + Send + Sync {
    /// Reservoir surface area, km2
    fn reservoir_area(&self) -> FloatValue;

    /// Net unit flux for each requested reservoir age, g CO2-eq/m2/yr
    fn profile(&self, years: &[u32]) -> RGresResult<Vec<FloatValue>>;

    /// Lifetime-average net unit flux over `number_of_years`, g CO2-eq/m2/yr
    fn factor(&self, number_of_years: u32) -> RGresResult<FloatValue>;

    /// Net emission per year, t CO2-eq/yr
    fn total_emission_per_year(&self, number_of_years: u32) -> RGresResult<FloatValue> {
        Ok(self.factor(number_of_years)? * self.reservoir_area())
    }

    /// Net emission over `number_of_years`, kt CO2-eq
    fn total_lifetime_emission(&self, number_of_years: u32) -> RGresResult<FloatValue> {
        Ok(self.total_emission_per_year(number_of_years)? * FloatValue::from(number_of_years)
            / 1_000.0)
    }
}

/// State common to all emission models
#[derive(Debug, Clone)]
pub struct EmissionBase<'a> {
    pub catchment: &'a dyn Catchment,
    pub reservoir: &'a dyn Reservoir,
    /// Area covered by the river before impoundment, km2
    pub preinund_area: FloatValue,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> EmissionBase<'a> {
    /// Bind the collaborators.
    ///
    /// Without an explicit `preinund_area` the river area of the catchment is used.
    pub fn new(
        catchment: &'a dyn Catchment,
        reservoir: &'a dyn Reservoir,
        preinund_area: Option<FloatValue>,
    ) -> Self {
        let preinund_area =
            preinund_area.unwrap_or_else(|| catchment.river_area_before_impoundment());
        let mut diagnostics = Vec::new();
        if preinund_area > reservoir.area() {
            diagnostics.push(
                Diagnostic::PreImpoundmentAreaExceedsReservoir {
                    preinund_area,
                    reservoir_area: reservoir.area(),
                }
                .logged(),
            );
        }
        Self {
            catchment,
            reservoir,
            preinund_area,
            diagnostics,
        }
    }

    /// Record (and log) recovered problems found by a concrete model
    pub fn extend_diagnostics(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics
            .extend(diagnostics.into_iter().map(Diagnostic::logged));
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
