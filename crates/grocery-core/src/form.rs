//! Form/Mode Controller
//!
//! Owns the two text inputs and decides what a submission does:
//! `Add` creates an item, `Edit(id)` rewrites item `id`.

use tracing::debug;

use crate::domain::{FormMode, GroceryError, GroceryResult, Item, ItemId};
use crate::list::GroceryList;
use crate::registry::ItemRegistry;
use crate::repository::KeyValueStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    mode: FormMode,
    name: String,
    description: String,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn title(&self) -> &'static str {
        self.mode.title()
    }

    /// Add button is hidden while editing
    pub fn shows_add_button(&self) -> bool {
        !self.mode.is_editing()
    }

    /// Edit-confirm and cancel buttons appear only while editing
    pub fn shows_edit_controls(&self) -> bool {
        self.mode.is_editing()
    }

    /// Switch to `Edit(id)` and load the item's fields into the inputs
    pub fn begin_edit(&mut self, registry: &ItemRegistry, id: ItemId) -> GroceryResult<()> {
        let item = registry.get(id).ok_or(GroceryError::NotFound(id))?;
        self.name = item.name.clone();
        self.description = item.description.clone();
        self.mode = FormMode::Edit(id);
        debug!(id, "edit mode");
        Ok(())
    }

    /// Perform whatever the current mode calls for
    ///
    /// Validation failures leave mode and inputs untouched. If the edit
    /// target has disappeared the form falls back to `Add`. A failed save
    /// also resets: the list already holds the change, so resubmitting
    /// would add a duplicate.
    pub fn submit<S: KeyValueStore>(&mut self, list: &mut GroceryList<S>) -> GroceryResult<Item> {
        let result = match self.mode {
            FormMode::Add => list.add_item(&self.name, &self.description),
            FormMode::Edit(id) => list.edit_item(id, &self.name, &self.description),
        };
        match &result {
            Ok(_) | Err(GroceryError::NotFound(_) | GroceryError::Storage(_)) => self.reset(),
            Err(_) => {}
        }
        result
    }

    /// Leave edit mode without touching the list
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Leave edit mode if `id` was the item under edit
    pub fn release(&mut self, id: ItemId) {
        if self.mode.target() == Some(id) {
            debug!(id, "edit target removed");
            self.reset();
        }
    }

    /// Leave edit mode if the target is no longer in `registry`
    pub fn release_missing(&mut self, registry: &ItemRegistry) {
        if let Some(id) = self.mode.target() {
            if !registry.contains(id) {
                self.release(id);
            }
        }
    }

    fn reset(&mut self) {
        self.mode = FormMode::Add;
        self.name.clear();
        self.description.clear();
    }
}
