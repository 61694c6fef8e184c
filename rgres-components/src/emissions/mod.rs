//! Gas emission models
//!
//! Each gas has its own model with its own parameters and pathway functions. They
//! share the [`Emission`] contract and can be handled together through
//! [`GasEmission`].

mod carbon_dioxide;
mod methane;
mod nitrous_oxide;

pub use carbon_dioxide::CarbonDioxideEmission;
pub use methane::MethaneEmission;
pub use nitrous_oxide::{N2OModel, NitrousOxideEmission, AVAILABLE_MODELS};

use rgres_core::categories::{Gas, PhosphorusMethod};
use rgres_core::diagnostics::Diagnostic;
use rgres_core::emission::Emission;
use rgres_core::errors::RGresResult;
use rgres_core::FloatValue;

/// Parse a P export method, falling back to `g-res`
pub(crate) fn parse_phosphorus_method(requested: &str) -> (PhosphorusMethod, Option<Diagnostic>) {
    match requested.parse::<PhosphorusMethod>() {
        Ok(method) => (method, None),
        Err(_) => (
            PhosphorusMethod::default(),
            Some(Diagnostic::UnsupportedPhosphorusMethod {
                requested: requested.to_string(),
                fallback: PhosphorusMethod::default().as_str(),
            }),
        ),
    }
}

/// Emission model of any supported gas
#[derive(Debug, Clone)]
pub enum GasEmission<'a> {
    CarbonDioxide(CarbonDioxideEmission<'a>),
    Methane(MethaneEmission<'a>),
    NitrousOxide(NitrousOxideEmission<'a>),
}

impl GasEmission<'_> {
    pub fn gas(&self) -> Gas {
        match self {
            GasEmission::CarbonDioxide(_) => Gas::CarbonDioxide,
            GasEmission::Methane(_) => Gas::Methane,
            GasEmission::NitrousOxide(_) => Gas::NitrousOxide,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            GasEmission::CarbonDioxide(emission) => emission.diagnostics(),
            GasEmission::Methane(emission) => emission.diagnostics(),
            GasEmission::NitrousOxide(emission) => emission.diagnostics(),
        }
    }

    fn as_emission(&self) -> &dyn Emission {
        match self {
            GasEmission::CarbonDioxide(emission) => emission,
            GasEmission::Methane(emission) => emission,
            GasEmission::NitrousOxide(emission) => emission,
        }
    }
}

impl Emission for GasEmission<'_> {
    fn reservoir_area(&self) -> FloatValue {
        self.as_emission().reservoir_area()
    }

    fn profile(&self, years: &[u32]) -> RGresResult<Vec<FloatValue>> {
        self.as_emission().profile(years)
    }

    fn factor(&self, number_of_years: u32) -> RGresResult<FloatValue> {
        self.as_emission().factor(number_of_years)
    }
}

impl<'a> From<CarbonDioxideEmission<'a>> for GasEmission<'a> {
    fn from(emission: CarbonDioxideEmission<'a>) -> Self {
        GasEmission::CarbonDioxide(emission)
    }
}

impl<'a> From<MethaneEmission<'a>> for GasEmission<'a> {
    fn from(emission: MethaneEmission<'a>) -> Self {
        GasEmission::Methane(emission)
    }
}

impl<'a> From<NitrousOxideEmission<'a>> for GasEmission<'a> {
    fn from(emission: NitrousOxideEmission<'a>) -> Self {
        GasEmission::NitrousOxide(emission)
    }
}
