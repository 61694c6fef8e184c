//! General calculation settings

use rgres_core::categories::RetentionMethod;
use rgres_core::config::ConfigStore;
use rgres_core::diagnostics::Diagnostic;
use rgres_core::errors::RGresResult;
use rgres_core::FloatValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationParameters {
    /// Retention coefficient model, `larsen` or `empirical`
    /// default: "larsen"
    pub ret_coeff_method: String,
    /// Accepted deviation of the catchment area fractions from a sum of one
    /// default: 0.01
    pub eps_catchment_area_fractions: FloatValue,
}

impl CalculationParameters {
    pub const SECTION: &'static str = "CALCULATIONS";

    pub fn from_config(config: &ConfigStore) -> RGresResult<Self> {
        Ok(Self {
            ret_coeff_method: config
                .get_string(Self::SECTION, "ret_coeff_method")?
                .to_string(),
            eps_catchment_area_fractions: config
                .get_float(Self::SECTION, "eps_catchment_area_fractions")?,
        })
    }

    /// Parsed retention method, with the diagnostic raised when falling back to Larsen
    pub fn retention_method(&self) -> (RetentionMethod, Option<Diagnostic>) {
        match self.ret_coeff_method.parse::<RetentionMethod>() {
            Ok(method) => (method, None),
            Err(_) => (
                RetentionMethod::default(),
                Some(Diagnostic::UnsupportedRetentionMethod {
                    requested: self.ret_coeff_method.clone(),
                    fallback: RetentionMethod::default().as_str(),
                }),
            ),
        }
    }
}

impl Default for CalculationParameters {
    fn default() -> Self {
        Self {
            ret_coeff_method: RetentionMethod::Larsen.as_str().to_string(),
            eps_catchment_area_fractions: 0.01,
        }
    }
}
