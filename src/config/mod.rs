use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to a catalog JSON file. When unset the bundled catalog is used.
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub start_fullscreen: bool,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default = "default_config_version")]
    pub config_version: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_width() -> f32 {
    1200.0
}

fn default_window_height() -> f32 {
    800.0
}

fn default_config_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: default_log_level(),
            start_fullscreen: false,
            window_width: default_window_width(),
            window_height: default_window_height(),
            config_version: default_config_version(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;

            match toml::from_str::<Config>(&contents) {
                Ok(mut config) => {
                    if config.config_version < default_config_version() {
                        log::info!(
                            "Migrating config from version {} to {}",
                            config.config_version,
                            default_config_version()
                        );
                        config = Self::migrate_config(config)?;
                        config.save()?;
                    }
                    config.validate()?;
                    Ok(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config: {}. Using defaults and merging.", e);
                    let mut config = Self::default();

                    // Salvage the fields we can from the broken file.
                    if let Ok(value) = toml::from_str::<toml::Value>(&contents) {
                        if let Some(table) = value.as_table() {
                            if let Some(path) = table.get("catalog_path").and_then(|v| v.as_str()) {
                                config.catalog_path = Some(PathBuf::from(path));
                            }
                            if let Some(level) = table.get("log_level").and_then(|v| v.as_str()) {
                                config.log_level = level.to_string();
                            }
                        }
                    }

                    config.validate()?;
                    config.save()?;
                    Ok(config)
                }
            }
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Migrate config from older versions
    fn migrate_config(mut config: Config) -> Result<Self> {
        let current_version = config.config_version;
        let target_version = default_config_version();

        log::info!("Migrating config from v{} to v{}", current_version, target_version);

        if current_version < 1 {
            let defaults = Self::default();
            if config.window_width <= 0.0 {
                config.window_width = defaults.window_width;
            }
            if config.window_height <= 0.0 {
                config.window_height = defaults.window_height;
            }
        }

        config.config_version = target_version;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        if let Some(path) = &self.catalog_path {
            if path.is_dir() {
                return Err(Error::Config(format!(
                    "Catalog path is a directory, expected a JSON file: {}",
                    path.display()
                )));
            }
        }

        if self.window_width < 640.0 || self.window_height < 480.0 {
            return Err(Error::Config(format!(
                "Window size {}x{} is below the 640x480 minimum",
                self.window_width, self.window_height
            )));
        }

        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "playhub")
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "playhub")
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))?;

        Ok(project_dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert!(config.catalog_path.is_none());
        assert!(!config.start_fullscreen);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.log_level, deserialized.log_level);
        assert_eq!(config.window_width, deserialized.window_width);
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_tiny_window() {
        let config = Config {
            window_width: 100.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
