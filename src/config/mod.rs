//! Application configuration: catalog, delivery slots, and delivery partners.
//!
//! Every setting has a built-in default. A TOML file named by the `GROCERY_CONFIG`
//! environment variable may replace any of the three sections; keys it omits keep
//! their defaults.

/// Catalog tables from the config file
pub mod catalog;

use crate::{
    core::{
        catalog::Catalog,
        delivery::{DEFAULT_PARTNERS, DeliverySlot},
    },
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, error};

/// Environment variable holding the path of the TOML config file.
pub const CONFIG_ENV_VAR: &str = "GROCERY_CONFIG";

/// Raw structure of the config file; every section is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Replacement catalog
    pub categories: Option<Vec<catalog::CategoryConfig>>,
    /// Replacement delivery slots, written like "2:00 PM"
    pub delivery_slots: Option<Vec<String>>,
    /// Replacement delivery partner names
    pub delivery_partners: Option<Vec<String>>,
}

/// Fully resolved settings for one session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Products offered
    pub catalog: Catalog,
    /// Delivery times the shopper chooses from, in menu order
    pub delivery_slots: Vec<DeliverySlot>,
    /// Candidates for delivery partner assignment
    pub delivery_partners: Vec<String>,
}

impl AppConfig {
    /// The built-in catalog, the five standard slots, and the four standard partners.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            catalog: Catalog::builtin(),
            delivery_slots: DeliverySlot::defaults(),
            delivery_partners: DEFAULT_PARTNERS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Applies a parsed config file on top of the built-in defaults.
    ///
    /// # Errors
    /// Returns `Error::Config` if any provided section is empty or invalid.
    pub fn from_file_config(file: FileConfig) -> Result<Self> {
        let mut config = Self::builtin();

        if let Some(categories) = file.categories {
            config.catalog = catalog::build_catalog(&categories)?;
        }

        if let Some(slots) = file.delivery_slots {
            if slots.is_empty() {
                return Err(Error::Config {
                    message: "delivery_slots cannot be empty".to_string(),
                });
            }
            config.delivery_slots = slots
                .iter()
                .map(|s| DeliverySlot::parse(s))
                .collect::<Result<_>>()?;
        }

        if let Some(partners) = file.delivery_partners {
            let partners: Vec<String> = partners
                .into_iter()
                .map(|p| p.trim().to_string())
                .collect();
            if partners.is_empty() || partners.iter().any(String::is_empty) {
                return Err(Error::Config {
                    message: "delivery_partners must list at least one non-empty name"
                        .to_string(),
                });
            }
            config.delivery_partners = partners;
        }

        Ok(config)
    }
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns an error if the TOML syntax is invalid, an unknown key is present, or a
/// section fails validation.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let file: FileConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config: {e}"),
    })?;
    AppConfig::from_file_config(file)
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or its contents are invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    parse_config(&contents)
}

/// Resolves configuration from an optional file path, falling back to the built-ins.
///
/// # Errors
/// Returns an error if a path is given and loading it fails.
pub fn resolve_configuration(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config(path)
            .inspect_err(|e| error!("Critical error loading configuration: {}", e)),
        None => {
            debug!("No {} set; using built-in catalog", CONFIG_ENV_VAR);
            Ok(AppConfig::builtin())
        }
    }
}

/// Loads the configuration named by `GROCERY_CONFIG`, or the built-ins if unset.
///
/// # Errors
/// Returns an error if the variable is set and the file fails to load.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var_os(CONFIG_ENV_VAR);
    resolve_configuration(path.as_deref().map(Path::new))
}
