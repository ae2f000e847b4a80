//! Application settings loaded from config.toml
//!
//! The file is optional. It controls console behaviour and lists reference
//! data (suppliers, starter categories) that is inserted at startup when the
//! store does not have it yet.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming an alternative settings file
pub const CONFIG_PATH_VAR: &str = "NORTHWIND_CONFIG";

/// Settings file used when `NORTHWIND_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Console presentation settings
    pub console: ConsoleConfig,
    /// Suppliers to make available for product references
    pub suppliers: Vec<SupplierSeed>,
    /// Categories to create on first run
    pub categories: Vec<CategorySeed>,
}

/// Console presentation settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Clear the terminal after each line of operator input
    pub clear_screen: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// A supplier seeded at startup, matched by company name
#[derive(Debug, Deserialize, Clone)]
pub struct SupplierSeed {
    /// Company name of the supplier
    pub company_name: String,
}

/// A category seeded at startup, matched by name
#[derive(Debug, Deserialize, Clone)]
pub struct CategorySeed {
    /// Name of the category
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file {}: {e}", path_ref.display()),
    })
}

fn parse_config(contents: &str) -> std::result::Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Loads settings from `NORTHWIND_CONFIG`, or `config.toml` in the working
/// directory. A missing default file is not an error: defaults are used.
pub fn load_app_configuration() -> Result<AppConfig> {
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        return load_config(path);
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        load_config(DEFAULT_CONFIG_PATH)
    } else {
        info!("No {} found, using default settings.", DEFAULT_CONFIG_PATH);
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [console]
            clear_screen = false

            [[suppliers]]
            company_name = "Exotic Liquids"

            [[suppliers]]
            company_name = "Tokyo Traders"

            [[categories]]
            name = "Beverages"
            description = "Soft drinks, coffees, teas, beers, and ales"

            [[categories]]
            name = "Produce"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert!(!config.console.clear_screen);
        assert_eq!(config.suppliers.len(), 2);
        assert_eq!(config.suppliers[1].company_name, "Tokyo Traders");
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[0].name, "Beverages");
        assert!(config.categories[1].description.is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.console.clear_screen);
        assert!(config.suppliers.is_empty());
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let result = load_config("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
