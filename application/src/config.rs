//! [`Config`]-related definitions.

use std::path::PathBuf;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Config {
    /// Path to the input JSON file.
    #[default(PathBuf::from("data.json"))]
    pub input: PathBuf,

    /// Path to the output JSON file.
    #[default(PathBuf::from("output.json"))]
    pub output: PathBuf,

    /// [`Batch`] to run over the input.
    pub batch: Batch,

    /// Service configuration.
    pub service: Service,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Kind of a batch to run.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Batch {
    /// [`Batch::Modifications`] if the input has rental modifications,
    /// otherwise [`Batch::Prices`].
    #[default]
    Auto,

    /// Prices of rentals.
    Prices,

    /// Money movements settling rentals.
    Actions,

    /// Money movements settling rental modifications.
    Modifications,
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Tariff to price the rental time with.
    pub tariff: Tariff,

    /// Indicator whether priced rentals should carry their commission
    /// breakdown.
    #[default(true)]
    pub commission: bool,

    /// Indicator whether priced rentals should carry their options
    /// breakdown.
    pub options: bool,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            tariff,
            commission,
            options,
        } = value;

        Self {
            tariff: tariff.into(),
            commission,
            options,
        }
    }
}

/// Tariff to price the rental time with.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tariff {
    /// Every day is charged at the full price.
    Flat,

    /// Later days of a rental are charged cheaper.
    #[default]
    Degressive,
}

impl From<Tariff> for service::domain::pricing::Tariff {
    fn from(value: Tariff) -> Self {
        match value {
            Tariff::Flat => Self::Flat,
            Tariff::Degressive => Self::Degressive,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{io::Write as _, path::Path};

    use service::domain::pricing;

    use super::{Batch, Config, Tariff};

    #[test]
    fn defaults_without_file() {
        let config = Config::new("does-not-exist.toml").unwrap();

        assert_eq!(config.input, Path::new("data.json"));
        assert_eq!(config.output, Path::new("output.json"));
        assert_eq!(config.batch, Batch::Auto);
        assert_eq!(config.service.tariff, Tariff::Degressive);
        assert!(config.service.commission);
        assert!(!config.service.options);
        assert_eq!(
            tracing::Level::from(config.log.level),
            tracing::Level::INFO,
        );
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(
            br#"
                input = "level5/data.json"
                batch = "MODIFICATIONS"

                [service]
                tariff = "FLAT"
                options = true

                [log]
                level = "DEBUG"
            "#,
        )
        .unwrap();

        let config = Config::new(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.input, Path::new("level5/data.json"));
        assert_eq!(config.output, Path::new("output.json"));
        assert_eq!(config.batch, Batch::Modifications);
        assert!(config.service.commission);
        assert!(config.service.options);
        assert_eq!(
            tracing::Level::from(config.log.level),
            tracing::Level::DEBUG,
        );

        let service = service::Config::from(config.service);
        assert_eq!(service.tariff, pricing::Tariff::Flat);
        assert!(service.options);
    }

    #[test]
    fn rejects_unknown_batch() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(br#"batch = "EVERYTHING""#).unwrap();

        assert!(Config::new(file.path().to_str().unwrap()).is_err());
    }
}
