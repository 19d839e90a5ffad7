//! Persisted Item Blob
//!
//! All items are stored as one JSON object under a single key:
//! `{"0": {"name": .., "description": .., "id": 0}, ...}`.
//! Every mutation rewrites the whole object with one `set` call.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::traits::KeyValueStore;
use crate::config::{ClearScope, StorageConfig};
use crate::domain::{GroceryError, GroceryResult, Item, ItemId};

/// Items keyed by id, iterated in ascending id order
pub type ItemMap = BTreeMap<ItemId, Item>;

pub struct ItemStore<S> {
    backend: S,
    key: String,
    clear_scope: ClearScope,
}

impl<S: KeyValueStore> ItemStore<S> {
    pub fn new(backend: S, config: &StorageConfig) -> Self {
        Self {
            backend,
            key: config.key.clone(),
            clear_scope: config.clear_scope,
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Serialize the full mapping and overwrite the stored blob
    pub fn save(&mut self, items: &ItemMap) -> GroceryResult<()> {
        let blob = serde_json::to_string(items).map_err(|e| GroceryError::Storage(e.to_string()))?;
        self.backend.set(&self.key, &blob)?;
        debug!(key = %self.key, count = items.len(), "saved items");
        Ok(())
    }

    /// Read the stored mapping, treating corrupt or missing data as empty
    pub fn load(&self) -> ItemMap {
        match self.try_load() {
            Ok(items) => {
                info!(key = %self.key, count = items.len(), "loaded items");
                items
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding unreadable item store");
                ItemMap::new()
            }
        }
    }

    /// Strict variant of [`ItemStore::load`]
    ///
    /// Fails with `Decode` when the blob is not a JSON object. Individual
    /// entries that cannot be read are skipped. The map key wins over the
    /// record's own `id` field.
    pub fn try_load(&self) -> GroceryResult<ItemMap> {
        let Some(blob) = self.backend.get(&self.key)? else {
            return Ok(ItemMap::new());
        };
        let entries: Map<String, Value> = serde_json::from_str(&blob)?;

        let mut items = ItemMap::new();
        for (key, value) in entries {
            let Ok(id) = key.parse::<ItemId>() else {
                warn!(entry = %key, "skipping entry with non-numeric key");
                continue;
            };
            let mut item: Item = match serde_json::from_value(value) {
                Ok(item) => item,
                Err(err) => {
                    warn!(entry = %key, error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if item.id != id {
                warn!(entry = %key, record_id = item.id, "record id disagrees with key");
                item.id = id;
            }
            items.insert(id, item);
        }
        Ok(items)
    }

    /// Erase persisted state according to the configured scope
    pub fn clear(&mut self) -> GroceryResult<()> {
        match self.clear_scope {
            ClearScope::Everything => self.backend.clear()?,
            ClearScope::Items => self.backend.remove(&self.key)?,
        }
        info!(key = %self.key, scope = ?self.clear_scope, "cleared item store");
        Ok(())
    }
}
