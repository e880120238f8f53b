use std::path::PathBuf;

use thiserror::Error;

pub const ENV_NAME: &str = "GARDEN_NAME";
pub const ENV_ZONE: &str = "GARDEN_ZONE";
pub const ENV_HARVEST_WINDOW: &str = "GARDEN_HARVEST_WINDOW_DAYS";
pub const ENV_LAYOUT: &str = "GARDEN_LAYOUT";
pub const ENV_OUTPUT: &str = "GARDEN_OUTPUT";

pub const DEFAULT_HARVEST_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative whole number of days, got '{value}'")]
    InvalidDays { var: &'static str, value: String },

    #[error("{var} must be 'text' or 'json', got '{value}'")]
    InvalidOutput { var: &'static str, value: String },

    #[error("could not read .env file: {0}")]
    DotEnv(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for the demonstration binary.
#[derive(Debug, Clone, PartialEq)]
pub struct GardenConfig {
    pub name: String,
    /// USDA hardiness zone label, e.g. `7a`.
    pub zone: String,
    pub harvest_window_days: u32,
    /// JSON layout to load instead of the built-in demo garden.
    pub layout_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            name: "Demonstration Garden".into(),
            zone: "7a".into(),
            harvest_window_days: DEFAULT_HARVEST_WINDOW_DAYS,
            layout_path: None,
            output: OutputFormat::Text,
        }
    }
}

impl GardenConfig {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        accept_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unset or blank
    /// variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(name) = get(ENV_NAME) {
            config.name = name;
        }
        if let Some(zone) = get(ENV_ZONE) {
            config.zone = zone;
        }
        if let Some(days) = get(ENV_HARVEST_WINDOW) {
            config.harvest_window_days = days.parse().map_err(|_| ConfigError::InvalidDays {
                var: ENV_HARVEST_WINDOW,
                value: days.clone(),
            })?;
        }
        config.layout_path = get(ENV_LAYOUT).map(PathBuf::from);
        if let Some(output) = get(ENV_OUTPUT) {
            config.output = match output.to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidOutput {
                        var: ENV_OUTPUT,
                        value: output,
                    })
                }
            };
        }
        Ok(config)
    }
}

/// A missing `.env` file is fine; any other load failure is reported.
fn accept_dotenv(loaded: dotenvy::Result<PathBuf>) -> Result<(), ConfigError> {
    match loaded {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::DotEnv(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<GardenConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GardenConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(from_pairs(&[]).unwrap(), GardenConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = from_pairs(&[
            (ENV_NAME, "Allotment 12"),
            (ENV_ZONE, "8b"),
            (ENV_HARVEST_WINDOW, "30"),
            (ENV_LAYOUT, "gardens/allotment.json"),
            (ENV_OUTPUT, "JSON"),
        ])
        .unwrap();
        assert_eq!(config.name, "Allotment 12");
        assert_eq!(config.zone, "8b");
        assert_eq!(config.harvest_window_days, 30);
        assert_eq!(
            config.layout_path,
            Some(PathBuf::from("gardens/allotment.json"))
        );
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = from_pairs(&[(ENV_NAME, "   "), (ENV_LAYOUT, "")]).unwrap();
        assert_eq!(config.name, "Demonstration Garden");
        assert!(config.layout_path.is_none());
    }

    #[test]
    fn test_invalid_window_rejected() {
        assert_eq!(
            from_pairs(&[(ENV_HARVEST_WINDOW, "-3")]).unwrap_err(),
            ConfigError::InvalidDays {
                var: ENV_HARVEST_WINDOW,
                value: "-3".into()
            }
        );
    }

    #[test]
    fn test_missing_dotenv_is_accepted() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(accept_dotenv(Err(missing)), Ok(()));
        assert_eq!(accept_dotenv(Ok(PathBuf::from(".env"))), Ok(()));
    }

    #[test]
    fn test_malformed_dotenv_is_reported() {
        let malformed = dotenvy::Error::LineParse("GARDEN_NAME='Allotment".into(), 12);
        assert!(matches!(
            accept_dotenv(Err(malformed)),
            Err(ConfigError::DotEnv(_))
        ));

        let denied = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(matches!(accept_dotenv(Err(denied)), Err(ConfigError::DotEnv(_))));
    }

    #[test]
    fn test_invalid_output_rejected() {
        assert!(matches!(
            from_pairs(&[(ENV_OUTPUT, "yaml")]),
            Err(ConfigError::InvalidOutput { .. })
        ));
    }
}
