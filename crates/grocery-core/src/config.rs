//! Application Configuration
//!
//! Parsed from a TOML document bundled with the app. Every field has a
//! default, so an empty document is a valid configuration.

use std::str::FromStr;

use serde::Deserialize;

use crate::domain::{GroceryError, GroceryResult};

/// Storage key used by every release so far
pub const DEFAULT_STORAGE_KEY: &str = "groceryItems";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GroceryConfig {
    pub storage: StorageConfig,
    pub messages: MessagesConfig,
    pub log: LogConfig,
}

impl GroceryConfig {
    pub fn from_toml_str(source: &str) -> GroceryResult<Self> {
        Ok(toml::from_str(source)?)
    }
}

/// How much of the backing store Clear-All erases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearScope {
    /// Wipe the whole backing store, including keys this app does not own
    #[default]
    Everything,
    /// Remove only the item blob
    Items,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub key: String,
    pub clear_scope: ClearScope,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_STORAGE_KEY.to_string(),
            clear_scope: ClearScope::default(),
        }
    }
}

/// User-facing prompt texts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub validation: String,
    pub confirm_delete: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            validation: "Please fill in all fields. Try again.".to_string(),
            confirm_delete: "Delete item?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl LogConfig {
    pub fn max_level(&self) -> GroceryResult<tracing::Level> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| GroceryError::Config(format!("unknown log level '{}'", self.level)))
    }
}
