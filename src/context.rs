//! Application Context
//!
//! Owns the grocery list (not `Send`, so it lives in a local `StoredValue`)
//! and exposes every user action. Components call these instead of
//! touching the list or the store directly.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use tracing::{debug, error};

use grocery_core::config::MessagesConfig;
use grocery_core::{GroceryConfig, GroceryError, GroceryList, ItemId};

use crate::dialogs::{alert, BrowserConfirm};
use crate::storage::Backend;
use crate::store::{self, ViewStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    list: StoredValue<GroceryList<Backend>, LocalStorage>,
    messages: StoredValue<MessagesConfig>,
    view: ViewStore,
}

impl AppContext {
    /// Load the persisted list and publish it to the view store
    pub fn new(config: &GroceryConfig, view: ViewStore) -> Self {
        let list = GroceryList::open(Backend::open(), config);
        let ctx = Self {
            list: StoredValue::new_local(list),
            messages: StoredValue::new(config.messages.clone()),
            view,
        };
        ctx.sync_items();
        ctx
    }

    /// Submit the form in whatever mode it is in
    pub fn submit(&self) {
        let mut form = store::store_form_untracked(&self.view);
        let Some(result) = self.list.try_update_value(|list| form.submit(list)) else {
            return;
        };
        store::store_set_form(&self.view, form);
        // a failed save still leaves the item in the session list
        self.sync_items();
        match result {
            Ok(item) => debug!(id = item.id, "form submitted"),
            Err(err) => self.report(err),
        }
    }

    /// Load item `id` into the form and switch to edit mode
    pub fn begin_edit(&self, id: ItemId) {
        let mut form = store::store_form_untracked(&self.view);
        let result = self
            .list
            .try_with_value(|list| form.begin_edit(list.registry(), id))
            .unwrap_or(Err(GroceryError::NotFound(id)));
        match result {
            Ok(()) => store::store_set_form(&self.view, form),
            Err(err) => self.report(err),
        }
    }

    pub fn cancel_edit(&self) {
        let mut form = store::store_form_untracked(&self.view);
        form.cancel();
        store::store_set_form(&self.view, form);
    }

    /// Delete item `id` after the user confirms
    pub fn remove(&self, id: ItemId) {
        let Some(result) = self.list.try_update_value(|list| list.remove_item(id, &BrowserConfirm)) else {
            return;
        };
        match result {
            Ok(Some(_)) => {
                let mut form = store::store_form_untracked(&self.view);
                form.release(id);
                store::store_set_form(&self.view, form);
                self.sync_items();
            }
            Ok(None) => {}
            Err(err) => {
                self.report(err);
                self.sync_items();
            }
        }
    }

    pub fn clear_all(&self) {
        let result = self.list.try_update_value(|list| list.clear_all());
        if let Some(Err(err)) = result {
            self.report(err);
        }
        let mut form = store::store_form_untracked(&self.view);
        self.list.with_value(|list| form.release_missing(list.registry()));
        store::store_set_form(&self.view, form);
        self.sync_items();
    }

    pub fn set_filter(&self, query: String) {
        store::store_set_filter(&self.view, query);
    }

    /// Copy the list's items into the view store
    fn sync_items(&self) {
        let items = self.list.with_value(|list| list.items());
        store::store_set_items(&self.view, items);
    }

    fn report(&self, err: GroceryError) {
        match &err {
            GroceryError::Validation(reason) => {
                debug!(%reason, "rejected form input");
                alert(&self.messages.with_value(|m| m.validation.clone()));
            }
            _ => {
                error!(error = %err, "grocery action failed");
                alert(&err.to_string());
            }
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
