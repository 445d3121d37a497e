//! Configuration loading for the `plaudit` CLI.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.plaudit/config.toml` (user)
//! 3. `/etc/plaudit/config.toml` (system)
//!
//! With no file present the built-in defaults apply.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::{CacheConfig, DEFAULT_HISTORY_SIZE};
use crate::types::{ComplimentType, GenerateOptions, SpecificityLevel};
use crate::{PlauditError, Result};

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub cache: CacheSection,
    #[serde(default)]
    pub history: HistorySection,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Where the file store lives.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Store directory (default: the platform data dir + `plaudit`).
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Resolved store directory.
    pub fn resolve_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("plaudit"))
            .ok_or_else(|| {
                PlauditError::Configuration(
                    "No data directory available; set [store] dir in config.toml".to_string(),
                )
            })
    }
}

/// Cache tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSection {
    /// Entry lifetime in seconds (default: 86400).
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    /// Compliments kept per cache key (default: 20).
    #[serde(default = "default_max_per_key")]
    pub max_per_key: usize,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_per_key: default_max_per_key(),
        }
    }
}

impl From<&CacheSection> for CacheConfig {
    fn from(section: &CacheSection) -> Self {
        CacheConfig::new()
            .ttl(Duration::from_secs(section.ttl_secs))
            .max_per_key(section.max_per_key)
    }
}

fn default_ttl_secs() -> u64 {
    24 * 3600
}

fn default_max_per_key() -> usize {
    20
}

/// Recent-history tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct HistorySection {
    /// Recent compliments not to repeat (default: 5).
    #[serde(default = "default_history_size")]
    pub size: usize,
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            size: default_history_size(),
        }
    }
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

/// Generation defaults used when no preference is stored.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// Category name; unknown names mean `random`.
    #[serde(default = "default_type", rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub specificity: SpecificityLevel,
    #[serde(default = "default_work_safe")]
    pub work_safe: bool,
    #[serde(default)]
    pub recipient_name: Option<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            kind: default_type(),
            specificity: SpecificityLevel::default(),
            work_safe: default_work_safe(),
            recipient_name: None,
        }
    }
}

impl DefaultsConfig {
    /// Generation options these defaults describe.
    pub fn to_options(&self) -> GenerateOptions {
        let opts = GenerateOptions::new()
            .kind(ComplimentType::lenient(&self.kind))
            .specificity(self.specificity)
            .work_safe(self.work_safe);
        match &self.recipient_name {
            Some(name) => opts.recipient_name(name.clone()),
            None => opts,
        }
    }
}

fn default_type() -> String {
    ComplimentType::Random.as_str().to_string()
}

fn default_work_safe() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; must exist)
    /// 2. `~/.plaudit/config.toml`
    /// 3. `/etc/plaudit/config.toml`
    /// 4. Built-in defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PlauditError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            PlauditError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path, `None` if no file exists.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(PlauditError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".plaudit").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/plaudit/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}
