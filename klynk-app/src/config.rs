//! Configuration loading
//!
//! Reads the TOML configuration file. Falls back to the embedded
//! defaults when the file does not exist; a file that exists but does
//! not parse or validate is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use klynk_core::config::{
    default_categories, CategoryConfig, ClientConfig, CookingConfig, ScalingConfig,
    ServingsConfig,
};
use serde::Deserialize;

use crate::error::AppError;

/// Embedded default configuration
pub const EMBEDDED_CONFIG: &str = include_str!("../klynk.toml");

/// File looked up when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "klynk.toml";

/// Recipe data location
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON table dump; the bundled catalog when absent
    pub path: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, e.g. "info" or "klynk_app=debug"
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

/// Complete file contents
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub cooking: CookingConfig,
    pub scaling: ScalingConfig,
    pub servings: ServingsConfig,
    pub categories: Vec<CategoryConfig>,
    pub catalog: CatalogConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cooking: CookingConfig::default(),
            scaling: ScalingConfig::default(),
            servings: ServingsConfig::default(),
            categories: default_categories(),
            catalog: CatalogConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Settings handed to the core
    pub fn client(&self) -> ClientConfig {
        ClientConfig {
            cooking: self.cooking.clone(),
            scaling: self.scaling.clone(),
            servings: self.servings.clone(),
            categories: self.categories.clone(),
        }
    }
}

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    Embedded,
}

/// Parse and validate TOML configuration text
pub fn parse_config(text: &str) -> Result<AppConfig, AppError> {
    let mut config: AppConfig = toml::from_str(text)?;
    if config.categories.is_empty() {
        config.categories = default_categories();
    }
    config.client().validate()?;
    Ok(config)
}

/// Load configuration from `path`, or the embedded defaults if it is missing
pub fn load_config(path: &Path) -> Result<(AppConfig, ConfigOrigin), AppError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok((parse_config(&text)?, ConfigOrigin::File(path.to_path_buf()))),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Ok((parse_config(EMBEDDED_CONFIG)?, ConfigOrigin::Embedded))
        }
        Err(source) => Err(AppError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.cooking.auto_advance_delay_s, 1);
        assert_eq!(config.servings.max, 99);
        assert_eq!(config.categories.len(), 6);
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config("[servings]\nmax = 12\n").unwrap();
        assert_eq!(config.servings.max, 12);
        assert_eq!(config.scaling, ScalingConfig::default());
        assert_eq!(config.categories, default_categories());
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            parse_config("[servings]\nmax = 0\n"),
            Err(AppError::ConfigInvalid(_))
        ));
        assert!(matches!(
            parse_config("[scaling]\nfraction_tolerance = 0.7\n"),
            Err(AppError::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            parse_config("[servings\nmax = 3"),
            Err(AppError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_embedded() {
        let (config, origin) = load_config(Path::new("/nonexistent/klynk.toml")).unwrap();
        assert_eq!(origin, ConfigOrigin::Embedded);
        assert_eq!(config, parse_config(EMBEDDED_CONFIG).unwrap());
    }

    #[test]
    fn test_unknown_sections_ignored() {
        let config = parse_config("[clock]\ntick_interval_ms = 250\n").unwrap();
        assert_eq!(config, parse_config("").unwrap());
    }
}
