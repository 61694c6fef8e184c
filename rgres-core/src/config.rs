//! Sectioned key/value configuration store.
//!
//! Regression coefficients and method selectors are grouped in named sections
//! (`CARBON_DIOXIDE`, `METHANE`, `NITROUS_OXIDE`, `CALCULATIONS`) of a TOML document.
//! The store is only consulted while building the typed parameter structs; emission
//! calculations never look up values by name.

use crate::errors::{RGresError, RGresResult};
use std::path::Path;
use toml::{Table, Value};

/// Default configuration shipped with the crate
pub const DEFAULT_CONFIG: &str = include_str!("../../data/config.toml");

/// Parsed configuration document
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStore {
    sections: Table,
}

impl ConfigStore {
    /// Configuration embedded from `data/config.toml`
    pub fn load_default() -> RGresResult<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    pub fn from_toml_str(contents: &str) -> RGresResult<Self> {
        let sections: Table = toml::from_str(contents)?;
        Ok(Self { sections })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> RGresResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_toml_str(&contents)
    }

    pub fn has_section(&self, section: &str) -> bool {
        matches!(self.sections.get(section), Some(Value::Table(_)))
    }

    fn section(&self, section: &str) -> RGresResult<&Table> {
        match self.sections.get(section) {
            Some(Value::Table(table)) => Ok(table),
            _ => Err(RGresError::MissingSection(section.to_string())),
        }
    }

    fn value(&self, section: &str, key: &str) -> RGresResult<&Value> {
        self.section(section)?
            .get(key)
            .ok_or_else(|| RGresError::MissingParameter {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Read a floating point value. Integer values are widened.
    pub fn get_float(&self, section: &str, key: &str) -> RGresResult<f64> {
        match self.value(section, key)? {
            Value::Float(value) => Ok(*value),
            Value::Integer(value) => Ok(*value as f64),
            _ => Err(RGresError::InvalidParameter {
                section: section.to_string(),
                key: key.to_string(),
                expected: "number",
            }),
        }
    }

    pub fn get_string(&self, section: &str, key: &str) -> RGresResult<&str> {
        match self.value(section, key)? {
            Value::String(value) => Ok(value.as_str()),
            _ => Err(RGresError::InvalidParameter {
                section: section.to_string(),
                key: key.to_string(),
                expected: "string",
            }),
        }
    }

    /// Override a single value, creating the section if needed
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<Value>) {
        let entry = self
            .sections
            .entry(section.to_string())
            .or_insert_with(|| Value::Table(Table::new()));
        if !entry.is_table() {
            *entry = Value::Table(Table::new());
        }
        if let Value::Table(table) = entry {
            table.insert(key.to_string(), value.into());
        }
    }

    /// Remove a single value, returning it if present
    pub fn remove(&mut self, section: &str, key: &str) -> Option<Value> {
        match self.sections.get_mut(section) {
            Some(Value::Table(table)) => table.remove(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
[METHANE]
k1_diff = -0.5
weight_C = 12
name = "ch4"
"#;

    #[test]
    fn test_default_config_parses() {
        let config = ConfigStore::load_default().expect("Default config invalid");
        for section in ["CARBON_DIOXIDE", "METHANE", "NITROUS_OXIDE", "CALCULATIONS"] {
            assert!(config.has_section(section), "Missing section {}", section);
        }
        assert_eq!(
            config.get_string("CALCULATIONS", "ret_coeff_method").unwrap(),
            "larsen"
        );
    }

    #[test]
    fn test_get_float() {
        let config = ConfigStore::from_toml_str(DOC).unwrap();
        assert_eq!(config.get_float("METHANE", "k1_diff").unwrap(), -0.5);
        // Integers are accepted as floats
        assert_eq!(config.get_float("METHANE", "weight_C").unwrap(), 12.0);
    }

    #[test]
    fn test_missing_values_are_errors() {
        let config = ConfigStore::from_toml_str(DOC).unwrap();
        assert!(matches!(
            config.get_float("METHANE", "k2_diff"),
            Err(RGresError::MissingParameter { .. })
        ));
        assert!(matches!(
            config.get_float("CARBON_DIOXIDE", "k1_diff"),
            Err(RGresError::MissingSection(_))
        ));
    }

    #[test]
    fn test_wrong_type() {
        let config = ConfigStore::from_toml_str(DOC).unwrap();
        assert!(matches!(
            config.get_float("METHANE", "name"),
            Err(RGresError::InvalidParameter { expected: "number", .. })
        ));
        assert!(matches!(
            config.get_string("METHANE", "k1_diff"),
            Err(RGresError::InvalidParameter { expected: "string", .. })
        ));
    }

    #[test]
    fn test_set_and_remove() {
        let mut config = ConfigStore::from_toml_str(DOC).unwrap();
        config.set("METHANE", "k1_diff", 1.5);
        config.set("NEW", "value", 2.0);
        assert_eq!(config.get_float("METHANE", "k1_diff").unwrap(), 1.5);
        assert_eq!(config.get_float("NEW", "value").unwrap(), 2.0);

        assert!(config.remove("METHANE", "k1_diff").is_some());
        assert!(config.get_float("METHANE", "k1_diff").is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            ConfigStore::from_toml_str("[METHANE\nk1 = "),
            Err(RGresError::ConfigParse(_))
        ));
    }
}
