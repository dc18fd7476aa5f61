//! Configuration module for bazr
//!
//! Manages application configuration including named catalog paths and
//! search defaults. Configuration is stored in the user's config
//! directory as TOML.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BazrConfig {
    /// Map of catalog names to their JSON file paths
    #[serde(default)]
    pub catalogs: HashMap<String, PathBuf>,

    /// The default catalog to use when none is specified
    #[serde(default)]
    pub default_catalog: Option<String>,

    /// Default sort key for searches (kebab-case, e.g. "rating-desc")
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Cap on displayed results; `None` shows everything
    #[serde(default)]
    pub limit: Option<usize>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl BazrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("bazr").join("config.toml"))
    }

    /// Load configuration from the default location, creating a default
    /// config file if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created or the file
    /// cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Add a catalog to the configuration and persist it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn add_catalog(&mut self, name: String, path: PathBuf) -> Result<(), ConfigError> {
        self.catalogs.insert(name, path);
        self.save()
    }

    /// Remove a catalog from the configuration and persist it
    ///
    /// Clears the default if it pointed at the removed catalog.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog does not exist or saving fails.
    pub fn remove_catalog(&mut self, name: &str) -> Result<(), ConfigError> {
        if self.catalogs.remove(name).is_none() {
            return Err(ConfigError::Message(format!("Catalog '{name}' not found")));
        }

        if self.default_catalog.as_deref() == Some(name) {
            self.default_catalog = None;
        }

        self.save()
    }

    /// Set the default catalog and persist it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog does not exist or saving fails.
    pub fn set_default_catalog(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.catalogs.contains_key(name) {
            return Err(ConfigError::Message(format!("Catalog '{name}' not found")));
        }

        self.default_catalog = Some(name.to_string());
        self.save()
    }

    /// Resolve the catalog path to use: the named one, or the default
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the name is unknown, or if no name was
    /// given and no default is configured.
    pub fn resolve_catalog(&self, name: Option<&str>) -> Result<PathBuf, ConfigError> {
        let name = match name {
            Some(name) => name,
            None => self.default_catalog.as_deref().ok_or_else(|| {
                ConfigError::Message(
                    "No catalog specified and no default catalog configured".to_string(),
                )
            })?,
        };

        self.catalogs
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::Message(format!("Catalog '{name}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_through_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = BazrConfig::default();
        config
            .catalogs
            .insert("main".into(), PathBuf::from("/data/listings.json"));
        config.default_catalog = Some("main".into());
        config.default_sort = Some("rating-desc".into());
        config.limit = Some(25);

        config.save_to(&path).unwrap();
        let loaded = BazrConfig::load_from(&path).unwrap();

        assert_eq!(loaded.catalogs.len(), 1);
        assert_eq!(loaded.default_catalog.as_deref(), Some("main"));
        assert_eq!(loaded.default_sort.as_deref(), Some("rating-desc"));
        assert_eq!(loaded.limit, Some(25));
        assert!(!loaded.quiet);
    }

    #[test]
    fn test_load_from_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "quiet = true").unwrap();

        let loaded = BazrConfig::load_from(&path).unwrap();
        assert!(loaded.quiet);
        assert!(loaded.catalogs.is_empty());
        assert!(loaded.default_catalog.is_none());
        assert!(loaded.limit.is_none());
    }

    #[test]
    fn test_resolve_catalog_by_name_and_default() {
        let mut config = BazrConfig::default();
        config
            .catalogs
            .insert("main".into(), PathBuf::from("/data/listings.json"));
        config.default_catalog = Some("main".into());

        assert_eq!(
            config.resolve_catalog(Some("main")).unwrap(),
            PathBuf::from("/data/listings.json")
        );
        assert_eq!(
            config.resolve_catalog(None).unwrap(),
            PathBuf::from("/data/listings.json")
        );
        assert!(config.resolve_catalog(Some("other")).is_err());
    }

    #[test]
    fn test_resolve_catalog_without_default_errors() {
        let config = BazrConfig::default();
        assert!(config.resolve_catalog(None).is_err());
    }
}
