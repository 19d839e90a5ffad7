//! Domain Errors
//!
//! Everything that can go wrong while managing the list. None of these are
//! fatal: the UI reports them and keeps running.

use thiserror::Error;

use super::item::ItemId;

/// Common result type for domain operations
pub type GroceryResult<T> = Result<T, GroceryError>;

/// A required form field that was left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("item name must not be empty")]
    EmptyName,
    #[error("item description must not be empty")]
    EmptyDescription,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GroceryError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("item {0} not found")]
    NotFound(ItemId),

    /// Every id has been handed out; adding would reuse a live id.
    #[error("no item ids left")]
    IdsExhausted,

    #[error("storage error: {0}")]
    Storage(String),

    /// Persisted blob could not be parsed. `ItemStore::load` swallows this.
    #[error("corrupt persisted data: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GroceryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, GroceryError::Validation(_))
    }
}

impl From<serde_json::Error> for GroceryError {
    fn from(err: serde_json::Error) -> Self {
        GroceryError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for GroceryError {
    fn from(err: toml::de::Error) -> Self {
        GroceryError::Config(err.to_string())
    }
}
