//! Item Registry
//!
//! The in-memory set of active items plus the id counter. The registry
//! never touches storage; `GroceryList` persists after each mutation.

use crate::domain::{validate_fields, GroceryError, GroceryResult, Item, ItemId};
use crate::repository::ItemMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemRegistry {
    items: ItemMap,
    /// Wider than `ItemId` so a full id space is visible instead of wrapping
    next_id: u64,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted items, reseeding the counter past the highest id
    pub fn from_items(items: ItemMap) -> Self {
        let next_id = items.keys().next_back().map_or(0, |max| u64::from(*max) + 1);
        Self { items, next_id }
    }

    pub fn items(&self) -> &ItemMap {
        &self.items
    }

    /// Items in display order (ascending id)
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counter value the next added item will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Fails with `IdsExhausted` rather than reuse an id still in the list
    pub fn add(&mut self, name: &str, description: &str) -> GroceryResult<Item> {
        validate_fields(name, description)?;
        let id = ItemId::try_from(self.next_id).map_err(|_| GroceryError::IdsExhausted)?;
        let item = Item::new(id, name, description)?;
        self.next_id += 1;
        self.items.insert(item.id, item.clone());
        Ok(item)
    }

    pub fn edit(&mut self, id: ItemId, name: &str, description: &str) -> GroceryResult<Item> {
        validate_fields(name, description)?;
        let item = self.items.get_mut(&id).ok_or(GroceryError::NotFound(id))?;
        item.rename(name, description)?;
        Ok(item.clone())
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.items.remove(&id)
    }

    /// Drop every item and restart the counter at 0
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_id = 0;
    }

    /// Visibility of each item under `query`, in display order
    pub fn filter(&self, query: &str) -> Vec<(ItemId, bool)> {
        self.iter().map(|item| (item.id, item.matches_filter(query))).collect()
    }
}
