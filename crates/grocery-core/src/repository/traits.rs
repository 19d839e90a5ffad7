//! Repository Layer - Core Traits
//!
//! The persisted list lives in a flat string-to-string store. Browsers
//! provide `localStorage`; tests and native builds use `MemoryStore`.

use crate::domain::GroceryResult;

/// Whole-value key-value storage
///
/// `set` replaces the previous value in one call; there are no partial writes.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> GroceryResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> GroceryResult<()>;

    /// Remove `key`; removing a missing key succeeds
    fn remove(&mut self, key: &str) -> GroceryResult<()>;

    /// Erase every key in the store
    fn clear(&mut self) -> GroceryResult<()>;
}
