//! Optional JSON configuration. A missing file means defaults everywhere.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::utils::{ensure_dir, PathResolver};
use crate::domain::BudgetDefaults;
use crate::errors::{BudgetError, Result};
use crate::storage::{json_backend::replace_file, DEFAULT_STORAGE_KEY};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub storage_key: String,
    pub currency_symbol: String,
    pub default_budget: BudgetDefaults,
    pub color_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    /// Overrides where the state blob is written. Defaults to `<data dir>/store`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            currency_symbol: "$".into(),
            default_budget: BudgetDefaults::default(),
            color_enabled: true,
            log_filter: None,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(BudgetError::ConfigError("storage_key must not be empty".into()));
        }
        if !self.default_budget.total_amount.is_finite() {
            return Err(BudgetError::ConfigError(
                "default_budget.total_amount must be a number".into(),
            ));
        }
        Ok(())
    }

    /// Directory holding the state blob, relative to the resolved base directory.
    pub fn store_dir(&self, base: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathResolver::store_dir_in(base))
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Manager for `<base>/config.json`.
    pub fn from_base(base: &Path) -> Self {
        Self::new(PathResolver::config_file_in(base))
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|err| BudgetError::ConfigError(format!("{}: {}", self.path.display(), err)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        replace_file(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
