//! View State Store
//!
//! Uses Leptos reactive_stores so rows, form and filter re-render
//! independently. Mirrors the core list after every action.

use leptos::prelude::*;
use reactive_stores::Store;

use grocery_core::{FormController, Item, ItemId};

/// Everything the components render from
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Items in display order
    pub items: Vec<Item>,
    /// Add/Edit form, including what is typed into it
    pub form: FormController,
    /// Live filter text
    pub filter: String,
}

pub type ViewStore = Store<ViewState>;

pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_items(store: &ViewStore, items: Vec<Item>) {
    store.items().set(items);
}

pub fn store_items(store: &ViewStore) -> Vec<Item> {
    store.items().get()
}

pub fn store_form(store: &ViewStore) -> FormController {
    store.form().get()
}

pub fn store_form_untracked(store: &ViewStore) -> FormController {
    store.form().get_untracked()
}

pub fn store_set_form(store: &ViewStore, form: FormController) {
    store.form().set(form);
}

pub fn store_form_title(store: &ViewStore) -> &'static str {
    store.form().read().title()
}

pub fn store_shows_add_button(store: &ViewStore) -> bool {
    store.form().read().shows_add_button()
}

pub fn store_shows_edit_controls(store: &ViewStore) -> bool {
    store.form().read().shows_edit_controls()
}

pub fn store_set_name(store: &ViewStore, name: String) {
    store.form().write().set_name(name);
}

pub fn store_set_description(store: &ViewStore, description: String) {
    store.form().write().set_description(description);
}

pub fn store_filter(store: &ViewStore) -> String {
    store.filter().get()
}

pub fn store_set_filter(store: &ViewStore, filter: String) {
    store.filter().set(filter);
}

/// Whether item `id` passes the current filter
pub fn store_is_visible(store: &ViewStore, id: ItemId) -> bool {
    let query = store.filter().read();
    store
        .items()
        .read()
        .iter()
        .find(|item| item.id == id)
        .is_some_and(|item| item.matches_filter(&query))
}

/// Number of items passing the current filter
pub fn store_visible_count(store: &ViewStore) -> usize {
    let query = store.filter().read();
    store.items().read().iter().filter(|item| item.matches_filter(&query)).count()
}
