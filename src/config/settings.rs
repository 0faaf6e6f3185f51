use std::{
    fs,
    path::{Path, PathBuf}
};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

use crate::{
    adapter::source::EventSourceType,
    domain::{
        constant::config,
        view::{CurrentLayout, PastLayout}
    }
};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration structure for the event board CLI
///
/// Missing keys fall back to their defaults, so older config files keep loading.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where events come from
    pub source:         EventSourceType,
    /// Catalog file used by the `file` source
    pub catalog_path:   Option<PathBuf>,
    /// Layout of `eb current` when `--layout` is not given
    pub current_layout: CurrentLayout,
    /// Layout of `eb past` when `--layout` is not given
    pub past_layout:    PastLayout,
    /// Tracing filter directive used when `RUST_LOG` is unset
    pub log_level:      String,
    /// Colored terminal output
    pub color:          bool
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source:         EventSourceType::Sample,
            catalog_path:   None,
            current_layout: CurrentLayout::Grid,
            past_layout:    PastLayout::Grid,
            log_level:      DEFAULT_LOG_LEVEL.to_string(),
            color:          true
        }
    }
}

/// Get the project directories for cross-platform config path resolution
pub fn get_project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "eventboard").context("Failed to determine project directories")
}

/// Get the configuration directory path
pub fn get_config_dir() -> Result<PathBuf> {
    let project_dirs = get_project_dirs()?;
    Ok(project_dirs.config_dir().to_path_buf())
}

/// Get the config file path
pub fn get_config_file_path() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.yaml"))
}

/// Load configuration from file or create default if it doesn't exist
pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_file_path()?)
}

pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if config_path.exists() {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;

        event!(Level::DEBUG, event = config::CONFIG_LOADED, path = %config_path.display());
        Ok(config)
    } else {
        let config = Config::default();
        save_config_to(config_path, &config)?;

        event!(Level::INFO, event = config::CONFIG_CREATED, path = %config_path.display());
        Ok(config)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(&get_config_file_path()?, config)
}

pub fn save_config_to(config_path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = serde_yaml::to_string(config).context("Failed to serialize config")?;

    fs::write(config_path, content)
        .with_context(|| format!("Failed to write config file {}", config_path.display()))?;

    event!(Level::DEBUG, event = config::CONFIG_SAVED, path = %config_path.display());
    Ok(())
}

/// Load, modify and persist the configuration at `config_path`
pub fn update_config_at(config_path: &Path, update: impl FnOnce(&mut Config) -> Result<()>) -> Result<Config> {
    let mut config = load_config_from(config_path)?;
    update(&mut config)?;
    save_config_to(config_path, &config)?;
    Ok(config)
}

impl Config {
    /// Store the catalog file as an absolute path
    pub fn set_catalog_path(&mut self, path: &Path) -> Result<()> {
        let absolute =
            std::path::absolute(path).with_context(|| format!("Failed to resolve catalog path {}", path.display()))?;
        self.catalog_path = Some(absolute);
        Ok(())
    }

    /// Set the default layouts; `None` keeps the stored value
    pub fn set_layouts(&mut self, current: Option<CurrentLayout>, past: Option<PastLayout>) {
        if let Some(layout) = current {
            self.current_layout = layout;
        }
        if let Some(layout) = past {
            self.past_layout = layout;
        }
    }

    /// Set the log filter; must be a valid tracing filter directive
    pub fn set_log_level(&mut self, level: &str) -> Result<()> {
        validate_log_level(level)?;
        self.log_level = level.to_string();
        Ok(())
    }
}

pub fn validate_log_level(level: &str) -> Result<()> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{}'", level))?;
    Ok(())
}
