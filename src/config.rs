//! Bundled Configuration
//!
//! `Grocery.toml` is compiled into the binary. A broken file falls back
//! to the built-in defaults.

use grocery_core::{GroceryConfig, GroceryResult};
use tracing::{error, warn, Level};

const CONFIG_SOURCE: &str = include_str!("../Grocery.toml");

pub fn bundled_config() -> GroceryResult<GroceryConfig> {
    GroceryConfig::from_toml_str(CONFIG_SOURCE)
}

/// Level to start the logger with, before anything can be logged
pub fn log_level(loaded: &GroceryResult<GroceryConfig>) -> Level {
    loaded
        .as_ref()
        .ok()
        .and_then(|config| config.log.max_level().ok())
        .unwrap_or(Level::INFO)
}

/// Unwrap the parsed config, reporting problems once logging is up
pub fn or_default(loaded: GroceryResult<GroceryConfig>) -> GroceryConfig {
    let config = loaded.unwrap_or_else(|err| {
        error!(error = %err, "using default configuration");
        GroceryConfig::default()
    });
    if let Err(err) = config.log.max_level() {
        warn!(error = %err, "falling back to info logging");
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocery_core::{ClearScope, GroceryError};

    #[test]
    fn test_bundled_config_parses() {
        let config = bundled_config().unwrap();
        assert_eq!(config.storage.key, "groceryItems");
        assert_eq!(config.storage.clear_scope, ClearScope::Everything);
        assert_eq!(config.messages.confirm_delete, "Delete item?");
    }

    #[test]
    fn test_broken_config_falls_back() {
        let loaded = GroceryConfig::from_toml_str("[storage");
        assert!(matches!(loaded, Err(GroceryError::Config(_))));
        assert_eq!(log_level(&loaded), Level::INFO);
        assert_eq!(or_default(loaded), GroceryConfig::default());
    }

    #[test]
    fn test_log_level_from_config() {
        let loaded = GroceryConfig::from_toml_str("[log]\nlevel = \"warn\"");
        assert_eq!(log_level(&loaded), Level::WARN);
    }
}
