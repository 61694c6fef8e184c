//! Monthly temperature profile of the reservoir location.

use crate::categories::Gas;
use crate::errors::{RGresError, RGresResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Weighting coefficient of the effective temperature for CO2
pub const EFF_TEMP_COEFF_CO2: FloatValue = 0.05;
/// Weighting coefficient of the effective temperature for CH4
pub const EFF_TEMP_COEFF_CH4: FloatValue = 0.052;

/// Twelve mean monthly air temperatures, degC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FloatValue>", into = "Vec<FloatValue>")]
pub struct MonthlyTemperature {
    temp_profile: [FloatValue; 12],
}

impl MonthlyTemperature {
    pub fn new(temp_profile: &[FloatValue]) -> RGresResult<Self> {
        let temp_profile: [FloatValue; 12] = temp_profile
            .try_into()
            .map_err(|_| RGresError::WrongTemperatureProfile(temp_profile.len()))?;
        Ok(Self { temp_profile })
    }

    pub fn profile(&self) -> &[FloatValue; 12] {
        &self.temp_profile
    }

    /// Effective annual temperature, degC
    ///
    /// $$T_{eff} = \frac{1}{c} \log_{10} \left( \overline{10^{c \, T_m}} \right)$$
    ///
    /// The exponential weighting reflects the temperature dependence of the
    /// biological processes producing each gas.
    pub fn eff_temp(&self, gas: Gas) -> RGresResult<FloatValue> {
        let coeff = match gas {
            Gas::CarbonDioxide => EFF_TEMP_COEFF_CO2,
            Gas::Methane => EFF_TEMP_COEFF_CH4,
            Gas::NitrousOxide => return Err(RGresError::GasNotSupported(gas.to_string())),
        };
        Ok(self.eff_temp_with_coeff(coeff))
    }

    pub fn eff_temp_with_coeff(&self, coeff: FloatValue) -> FloatValue {
        let mean = self
            .temp_profile
            .iter()
            .map(|temp| 10f64.powf(temp * coeff))
            .sum::<FloatValue>()
            / self.temp_profile.len() as FloatValue;
        mean.log10() / coeff
    }

    /// Coldest monthly temperature
    pub fn coldest(&self) -> FloatValue {
        self.temp_profile
            .iter()
            .copied()
            .fold(FloatValue::INFINITY, FloatValue::min)
    }

    /// Mean temperature of the `number_of_months` warmest months
    pub fn mean_warmest(&self, number_of_months: usize) -> FloatValue {
        let mut sorted = self.temp_profile;
        sorted.sort_by(|a, b| b.total_cmp(a));
        let n = number_of_months.clamp(1, sorted.len());
        sorted[..n].iter().sum::<FloatValue>() / n as FloatValue
    }
}

impl TryFrom<Vec<FloatValue>> for MonthlyTemperature {
    type Error = RGresError;

    fn try_from(value: Vec<FloatValue>) -> RGresResult<Self> {
        Self::new(&value)
    }
}

impl From<MonthlyTemperature> for Vec<FloatValue> {
    fn from(value: MonthlyTemperature) -> Self {
        value.temp_profile.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TEMPERATURES: [FloatValue; 12] = [
        10.56, 11.99, 15.46, 18.29, 20.79, 22.09, 22.46, 22.66, 21.93, 19.33, 15.03, 11.66,
    ];

    #[test]
    fn test_wrong_length() {
        assert!(matches!(
            MonthlyTemperature::new(&[1.0, 2.0]),
            Err(RGresError::WrongTemperatureProfile(2))
        ));
    }

    #[test]
    fn test_constant_profile() {
        let temp = MonthlyTemperature::new(&[20.0; 12]).unwrap();
        assert_relative_eq!(temp.eff_temp(Gas::Methane).unwrap(), 20.0, epsilon = 1e-12);
        assert_relative_eq!(temp.eff_temp(Gas::CarbonDioxide).unwrap(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eff_temp_weights_warm_months() {
        let temp = MonthlyTemperature::new(&TEMPERATURES).unwrap();
        let mean = TEMPERATURES.iter().sum::<FloatValue>() / 12.0;
        let eff = temp.eff_temp(Gas::Methane).unwrap();
        assert!(eff > mean, "Effective temperature {} should exceed mean {}", eff, mean);
        assert!(eff < temp.mean_warmest(1));
    }

    #[test]
    fn test_eff_temp_not_defined_for_n2o() {
        let temp = MonthlyTemperature::new(&TEMPERATURES).unwrap();
        assert!(matches!(
            temp.eff_temp(Gas::NitrousOxide),
            Err(RGresError::GasNotSupported(_))
        ));
    }

    #[test]
    fn test_coldest_and_warmest() {
        let temp = MonthlyTemperature::new(&TEMPERATURES).unwrap();
        assert_eq!(temp.coldest(), 10.56);
        assert_relative_eq!(
            temp.mean_warmest(4),
            (22.66 + 22.46 + 22.09 + 21.93) / 4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_deserialize() {
        let temp: MonthlyTemperature = serde_json::from_str("[1,2,3,4,5,6,7,8,9,10,11,12]").unwrap();
        assert_eq!(temp.coldest(), 1.0);
        assert!(serde_json::from_str::<MonthlyTemperature>("[1,2,3]").is_err());
    }
}
