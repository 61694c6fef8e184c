//! Loading of the shipped configuration and pre-impoundment tables.

use rgres_components::parameters::{CarbonDioxideParameters, MethaneParameters};
use rgres_components::settings::EmissionSettings;
use rgres_core::categories::{Climate, Landuse, SoilType};
use rgres_core::config::ConfigStore;
use rgres_core::errors::RGresError;
use rgres_core::pre_impoundment::PreImpoundmentTable;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("data")
}

#[test]
fn test_embedded_defaults_load() {
    let settings = EmissionSettings::load_default().unwrap();
    assert_eq!(settings.carbon_dioxide, CarbonDioxideParameters::default());
    assert_eq!(settings.methane, MethaneParameters::default());
    assert_eq!(settings.calculations.ret_coeff_method, "larsen");
    assert!(!settings.co2_pre_impoundment.is_empty());
    assert!(!settings.ch4_pre_impoundment.is_empty());
}

#[test]
fn test_files_match_embedded_defaults() {
    let config = ConfigStore::from_path(data_dir().join("config.toml")).unwrap();
    let co2 =
        PreImpoundmentTable::from_path(data_dir().join("pre_impoundment/carbon_dioxide.toml"))
            .unwrap();
    let ch4 =
        PreImpoundmentTable::from_path(data_dir().join("pre_impoundment/methane.toml")).unwrap();

    let settings = EmissionSettings::from_config(&config, co2, ch4).unwrap();
    assert_eq!(settings, EmissionSettings::load_default().unwrap());
}

#[test]
fn test_missing_constant_is_fatal() {
    let mut config = ConfigStore::load_default().unwrap();
    config.remove("METHANE", "k3_degas");

    let result = EmissionSettings::from_config(
        &config,
        PreImpoundmentTable::default(),
        PreImpoundmentTable::default(),
    );
    assert!(matches!(
        result,
        Err(RGresError::MissingParameter { ref section, ref key })
            if section == "METHANE" && key == "k3_degas"
    ));
}

#[test]
fn test_missing_section_is_fatal() {
    let config = ConfigStore::from_toml_str("[CARBON_DIOXIDE]\nk1_diff = 1.0\n").unwrap();
    let result = EmissionSettings::from_config(
        &config,
        PreImpoundmentTable::default(),
        PreImpoundmentTable::default(),
    );
    assert!(matches!(result, Err(RGresError::MissingParameter { .. })));

    let config = ConfigStore::from_toml_str("").unwrap();
    assert!(matches!(
        MethaneParameters::from_config(&config),
        Err(RGresError::MissingSection(_))
    ));
}

#[test]
fn test_overridden_table_entry() {
    let mut table = PreImpoundmentTable::default_methane().unwrap();
    table.insert(Climate::Boreal, SoilType::Mineral, Landuse::Forest, 1.5);
    assert_eq!(
        table.coefficient(Climate::Boreal, SoilType::Mineral, Landuse::Forest),
        Some(1.5)
    );
}
