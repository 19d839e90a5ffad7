//! Grocery List Service
//!
//! Pairs the registry with its persisted blob. Every successful mutation
//! is mirrored to storage before returning.

use tracing::{debug, info};

use crate::config::GroceryConfig;
use crate::confirm::Confirm;
use crate::domain::{GroceryResult, Item, ItemId};
use crate::registry::ItemRegistry;
use crate::repository::{ItemStore, KeyValueStore};

pub struct GroceryList<S> {
    registry: ItemRegistry,
    store: ItemStore<S>,
    confirm_prompt: String,
}

impl<S: KeyValueStore> GroceryList<S> {
    /// Load persisted items from `backend` and rebuild the registry
    pub fn open(backend: S, config: &GroceryConfig) -> Self {
        let store = ItemStore::new(backend, &config.storage);
        let registry = ItemRegistry::from_items(store.load());
        info!(count = registry.len(), next_id = registry.next_id(), "grocery list opened");
        Self {
            registry,
            store,
            confirm_prompt: config.messages.confirm_delete.clone(),
        }
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn store(&self) -> &ItemStore<S> {
        &self.store
    }

    /// Snapshot of the current items in display order
    pub fn items(&self) -> Vec<Item> {
        self.registry.iter().cloned().collect()
    }

    pub fn add_item(&mut self, name: &str, description: &str) -> GroceryResult<Item> {
        let item = self.registry.add(name, description)?;
        self.store.save(self.registry.items())?;
        debug!(id = item.id, name = %item.name, "item added");
        Ok(item)
    }

    pub fn edit_item(&mut self, id: ItemId, name: &str, description: &str) -> GroceryResult<Item> {
        let item = self.registry.edit(id, name, description)?;
        self.store.save(self.registry.items())?;
        debug!(id, name = %item.name, "item edited");
        Ok(item)
    }

    /// Remove `id` once the user agrees
    ///
    /// Unknown ids are ignored without prompting. Returns the removed item,
    /// or `None` when nothing changed.
    pub fn remove_item(&mut self, id: ItemId, confirm: &impl Confirm) -> GroceryResult<Option<Item>> {
        if !self.registry.contains(id) {
            debug!(id, "remove ignored, no such item");
            return Ok(None);
        }
        if !confirm.confirm(&self.confirm_prompt) {
            debug!(id, "remove declined");
            return Ok(None);
        }
        let removed = self.registry.remove(id);
        self.store.save(self.registry.items())?;
        debug!(id, "item removed");
        Ok(removed)
    }

    /// Drop every item and erase the persisted store
    pub fn clear_all(&mut self) -> GroceryResult<()> {
        let count = self.registry.len();
        self.registry.clear();
        self.store.clear()?;
        info!(count, "list cleared");
        Ok(())
    }

    /// Visibility of each item under `query`
    pub fn filter(&self, query: &str) -> Vec<(ItemId, bool)> {
        self.registry.filter(query)
    }
}
