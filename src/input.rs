//! Input-boundary handling for JSON configuration files.
//!
//! Malformed numeric fields coerce to a safe default instead of failing,
//! so a hand-edited config never aborts a calculation. Enum fields
//! are strict: an unknown variant is a hard error at this boundary so the
//! pricing tables never see one.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Load a configuration record from a JSON file.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Deserialize a field, coercing a malformed value to the type default.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Like [`lenient`], but coerces to 1 for counts where zero is nonsense.
pub fn lenient_or_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or(1))
}

/// Like [`lenient`], but coerces to 1.0 for ratio fields.
pub fn lenient_or_unity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{FactoryConfig, GpuType, Region};
    use crate::manpower::ManpowerConfig;

    #[test]
    fn well_formed_config_parses() {
        let json = r#"{
            "facilitySize": 50000,
            "rackCount": 200,
            "gpuType": "a100",
            "gpuPerRack": 4,
            "powerCostPerKwh": 0.12,
            "pue": 1.4,
            "staffCount": 10,
            "region": "eu"
        }"#;
        let config: FactoryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.facility_size, 50_000);
        assert_eq!(config.gpu_type, GpuType::A100);
        assert_eq!(config.region, Region::Eu);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: FactoryConfig = serde_json::from_str(r#"{"rackCount": 100}"#).unwrap();
        assert_eq!(config.rack_count, 100);
        assert_eq!(config.facility_size, 100_000);
        assert_eq!(config.gpu_type, GpuType::H100);
    }

    #[test]
    fn malformed_numbers_coerce() {
        let json = r#"{
            "facilitySize": "lots",
            "gpuPerRack": "a few",
            "pue": "???"
        }"#;
        let config: FactoryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.facility_size, 0);
        assert_eq!(config.gpu_per_rack, 1);
        assert_eq!(config.pue, 1.0);
    }

    #[test]
    fn malformed_duration_coerces_to_one_month() {
        let config: ManpowerConfig =
            serde_json::from_str(r#"{"projectDuration": null, "mlEngineers": "x"}"#).unwrap();
        assert_eq!(config.project_duration, 1);
        assert_eq!(config.ml_engineers, 0);
    }

    #[test]
    fn unknown_enum_variant_is_an_error() {
        let result: Result<FactoryConfig, _> = serde_json::from_str(r#"{"gpuType": "b200"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_round_trip() {
        let config = FactoryConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: FactoryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rack_count, config.rack_count);
        assert_eq!(back.gpu_type, config.gpu_type);
        assert_eq!(back.pue, config.pue);
    }
}
