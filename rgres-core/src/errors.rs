use thiserror::Error;

/// Error type for invalid configuration, inputs and model selection.
#[derive(Error, Debug)]
pub enum RGresError {
    #[error("Configuration section [{0}] not found")]
    MissingSection(String),
    #[error("Parameter `{key}` not found in configuration section [{section}]")]
    MissingParameter { section: String, key: String },
    #[error("Parameter `{key}` in configuration section [{section}] is not a valid {expected}")]
    InvalidParameter {
        section: String,
        key: String,
        expected: &'static str,
    },
    #[error("Could not parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Could not read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("N2O model `{model}` not recognized. Permitted models: {permitted:?}")]
    WrongN2OModel {
        model: String,
        permitted: &'static [&'static str],
    },
    #[error("{quantity} must be strictly positive, got {value}")]
    NonPositiveValue { quantity: &'static str, value: f64 },
    #[error("Number of area fractions: {number_of_fractions} not compatible with the number of land uses: {number_of_landuses}")]
    WrongAreaFractions {
        number_of_fractions: usize,
        number_of_landuses: usize,
    },
    #[error("Area fractions sum to {sum}, expected 1.0 +/- {accuracy}")]
    WrongSumOfAreas { sum: f64, accuracy: f64 },
    #[error("Monthly temperature profile must hold 12 values, got {0}")]
    WrongTemperatureProfile(usize),
    #[error("Effective temperature is not defined for gas {0}")]
    GasNotSupported(String),
    #[error("Unknown {kind} category `{value}`")]
    UnknownCategory { kind: &'static str, value: String },
}

/// Convenience type for `Result<T, RGresError>`.
pub type RGresResult<T> = Result<T, RGresError>;

/// Return `value` unchanged if it can feed a logarithm, otherwise a domain error.
pub fn ensure_positive(quantity: &'static str, value: f64) -> RGresResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(RGresError::NonPositiveValue { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("area", 2.5).unwrap(), 2.5);
        assert!(matches!(
            ensure_positive("area", 0.0),
            Err(RGresError::NonPositiveValue { quantity: "area", .. })
        ));
        // NaN is not strictly positive either
        assert!(ensure_positive("area", f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = RGresError::MissingParameter {
            section: "METHANE".to_string(),
            key: "k1_diff".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parameter `k1_diff` not found in configuration section [METHANE]"
        );
    }
}
