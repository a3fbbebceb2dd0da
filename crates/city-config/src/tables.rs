//! Table aggregate and loader

use crate::ConfigError;
use aqi_scorer::AqiTable;
use config::{Config, Environment, File, FileFormat};
use input_validator::ValidationConfig;
use outage_estimator::OutageTables;
use report_classifier::ReportTables;
use route_selector::RouteTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Prefix for environment overrides, e.g. `CITYASSIST_OUTAGE__JITTER_HOURS=0.25`
pub const ENV_PREFIX: &str = "CITYASSIST";

/// Every table the engine needs; missing sections keep reference values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityTables {
    pub aqi: AqiTable,
    pub outage: OutageTables,
    pub reports: ReportTables,
    pub routes: RouteTable,
    /// Accepted ranges for caller-supplied readings and hours
    pub validation: ValidationConfig,
}

impl CityTables {
    /// Load from an optional TOML file, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            info!("Loading tables from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let tables: CityTables = builder.build()?.try_deserialize()?;
        tables.validate()?;
        Ok(tables)
    }

    /// Parse tables from TOML text, without environment overrides
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let tables: CityTables = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        tables.validate()?;
        Ok(tables)
    }

    /// Validate every table
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.aqi.validate()?;
        self.outage.validate()?;
        self.reports.validate()?;
        self.routes.validate()?;
        self.validation.validate()?;
        debug!(
            "Tables valid: {} causes, {} zones, {} route pairs",
            self.outage.causes.len(),
            self.outage.zones.len(),
            self.routes.routes.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use city_core::NamedFactor;
    use std::io::Write;

    const SHIPPED: &str = include_str!("../../../config/cityassist.toml");

    #[test]
    fn test_defaults_are_valid() {
        assert!(CityTables::default().validate().is_ok());
    }

    #[test]
    fn test_empty_text_gives_reference_tables() {
        let tables = CityTables::from_toml_str("").unwrap();
        assert_eq!(tables, CityTables::default());
    }

    #[test]
    fn test_shipped_file_matches_reference() {
        let tables = CityTables::from_toml_str(SHIPPED).unwrap();
        assert_eq!(tables, CityTables::default());
    }

    #[test]
    fn test_partial_override() {
        let text = r#"
            [outage]
            jitter_hours = 0.25
            causes = [
                { name = "Cable Fault", value = 5.0 },
                { name = "Maintenance", value = 2.0 },
            ]

            [reports]
            confidence_range = [0.80, 0.95]
        "#;
        let tables = CityTables::from_toml_str(text).unwrap();

        assert_eq!(tables.outage.jitter_hours, 0.25);
        assert_eq!(tables.outage.causes[0], NamedFactor::new("Cable Fault", 5.0));
        assert_eq!(tables.outage.zones, CityTables::default().outage.zones);
        assert_eq!(tables.reports.confidence_range, (0.80, 0.95));
        assert_eq!(tables.aqi, AqiTable::default());
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let text = r#"
            [aqi]
            thresholds = [50.0, 40.0, 150.0, 200.0]
        "#;
        assert!(matches!(
            CityTables::from_toml_str(text),
            Err(ConfigError::Aqi(_))
        ));
    }

    #[test]
    fn test_malformed_text_is_a_load_error() {
        assert!(matches!(
            CityTables::from_toml_str("[outage\njitter_hours = "),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn test_validation_section() {
        let text = r#"
            [validation]
            concentration_range = [0.0, 1000.0]
            hour_range = [6, 22]
        "#;
        let tables = CityTables::from_toml_str(text).unwrap();
        assert_eq!(tables.validation.concentration_range, (0.0, 1000.0));
        assert_eq!(tables.validation.hour_range, (6, 22));

        let inverted = "[validation]\nhour_range = [22, 6]\n";
        assert!(matches!(
            CityTables::from_toml_str(inverted),
            Err(ConfigError::Validation(_))
        ));
    }

    fn write_tables(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file must be created");
        file.write_all(text.as_bytes()).expect("temp file must be writable");
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_tables(
            r#"
            [outage]
            jitter_hours = 0.3

            [reports]
            model = "MobileNetV3-Small"
        "#,
        );
        let tables = CityTables::load(Some(file.path())).unwrap();

        assert_eq!(tables.outage.jitter_hours, 0.3);
        assert_eq!(tables.reports.model, "MobileNetV3-Small");
        assert_eq!(tables.outage.causes, OutageTables::default().causes);
        assert_eq!(tables.routes, RouteTable::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        // Key is not read by any other test in this module
        let key = format!("{ENV_PREFIX}_OUTAGE__MIN_ETA_HOURS");
        std::env::set_var(&key, "0.75");

        let file = write_tables("[outage]\nmin_eta_hours = 1.0\njitter_hours = 0.2\n");
        let loaded = CityTables::load(Some(file.path()));
        std::env::remove_var(&key);

        let tables = loaded.unwrap();
        assert_eq!(tables.outage.min_eta_hours, 0.75);
        assert_eq!(tables.outage.jitter_hours, 0.2);
        assert_eq!(tables.outage.zones.len(), 4);
    }

    #[test]
    fn test_invalid_file_fails_validation() {
        let file = write_tables("[routes]\nrush_multiplier = 0.0\n");
        assert!(matches!(
            CityTables::load(Some(file.path())),
            Err(ConfigError::Route(_))
        ));
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let path = Path::new("/nonexistent/cityassist.toml");
        assert!(matches!(CityTables::load(Some(path)), Err(ConfigError::Load(_))));
    }
}
