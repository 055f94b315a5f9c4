//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.hatch/config.yaml)
//! 3. Environment variables (HATCH_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::{CommandConfig, HatchConfig, HatchConfigFile};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "hatch-defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
}

impl HierarchicalConfigLoader {
    /// Create a new hierarchical config loader
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self { config_dir })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the standard config directory ($HATCH_HOME or ~/.hatch)
    ///
    /// The directory is not created; a missing directory simply means no user config.
    fn get_config_dir() -> Result<Utf8PathBuf> {
        if let Ok(dir) = env::var("HATCH_HOME") {
            return Ok(Utf8PathBuf::from(dir));
        }

        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| Error::invalid_config("Could not determine home directory"))?;

        Ok(Utf8PathBuf::from(home).join(".hatch"))
    }

    /// Load configuration with hierarchical precedence
    pub fn load(&self) -> Result<HatchConfig> {
        let mut config = Self::load_embedded_config::<HatchConfig>(DEFAULTS_FILE)?;

        let user_config_path = self.config_dir.join(USER_CONFIG_FILE);
        if user_config_path.exists() {
            debug!("Loading user config from {}", user_config_path);
            let file_config = self.load_yaml_file::<HatchConfigFile>(&user_config_path)?;
            config = Self::merge_config(config, file_config);
        }

        Self::apply_env_overrides(config)
    }

    /// Load an embedded configuration file
    fn load_embedded_config<T: DeserializeOwned>(filename: &str) -> Result<T> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file and parse it
    fn load_yaml_file<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Merge a user config file over a base config (sections present in the overlay win)
    fn merge_config(base: HatchConfig, overlay: HatchConfigFile) -> HatchConfig {
        HatchConfig {
            template: overlay.template.unwrap_or(base.template),
            vcs: overlay.vcs.unwrap_or(base.vcs),
            install: overlay.install.unwrap_or(base.install),
            scripts: overlay.scripts.unwrap_or(base.scripts),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: HatchConfig) -> Result<HatchConfig> {
        if let Ok(val) = env::var("HATCH_TEMPLATE_SOURCE") {
            config.template.source = val;
        }

        if let Ok(val) = env::var("HATCH_JS_BRANCH") {
            config.template.branches.javascript = val;
        }

        if let Ok(val) = env::var("HATCH_TS_BRANCH") {
            config.template.branches.typescript = val;
        }

        if let Ok(val) = env::var("HATCH_SHALLOW_CLONE") {
            config.template.shallow = val.parse().map_err(|_| {
                Error::invalid_config("HATCH_SHALLOW_CLONE must be 'true' or 'false'")
            })?;
        }

        if let Ok(val) = env::var("HATCH_INSTALL_COMMAND") {
            config.install = CommandConfig::parse(&val).ok_or_else(|| {
                Error::invalid_config("HATCH_INSTALL_COMMAND must not be empty")
            })?;
        }

        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}
