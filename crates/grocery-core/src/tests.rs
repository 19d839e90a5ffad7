//! Grocery List Integration Tests
//!
//! Exercises the list service against the in-memory store, reopening it
//! to stand in for a page reload.

use crate::config::{ClearScope, GroceryConfig};
use crate::confirm::{FixedAnswer, ScriptedConfirm};
use crate::domain::{GroceryError, GroceryResult, ItemId};
use crate::form::FormController;
use crate::list::GroceryList;
use crate::repository::{KeyValueStore, MemoryStore};

/// Reopen the list over a copy of its backing store
fn reload(list: &GroceryList<MemoryStore>, config: &GroceryConfig) -> GroceryList<MemoryStore> {
    GroceryList::open(list.store().backend().clone(), config)
}

fn stored_blob(list: &GroceryList<MemoryStore>) -> Option<String> {
    list.store().backend().get("groceryItems").unwrap()
}

/// Backend whose writes always fail, like a full browser quota
#[derive(Default)]
struct FullStore {
    inner: MemoryStore,
}

impl KeyValueStore for FullStore {
    fn get(&self, key: &str) -> GroceryResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> GroceryResult<()> {
        Err(GroceryError::Storage("quota exceeded".to_string()))
    }

    fn remove(&mut self, key: &str) -> GroceryResult<()> {
        self.inner.remove(key)
    }

    fn clear(&mut self) -> GroceryResult<()> {
        self.inner.clear()
    }
}

#[test]
fn test_added_item_survives_reload() {
    let config = GroceryConfig::default();
    let mut list = GroceryList::open(MemoryStore::new(), &config);
    let milk = list.add_item("Milk", "2%").unwrap();

    let reopened = reload(&list, &config);
    let restored = reopened.registry().get(milk.id).unwrap();
    assert_eq!(restored, &milk);
    assert_eq!(reopened.registry().next_id(), 1);
}

#[test]
fn test_add_and_edit_scenario() {
    let config = GroceryConfig::default();
    let mut list = GroceryList::open(MemoryStore::new(), &config);

    assert_eq!(list.add_item("Milk", "2%").unwrap().id, 0);
    assert_eq!(list.add_item("Eggs", "Dozen").unwrap().id, 1);
    let edited = list.edit_item(0, "Milk", "Whole").unwrap();
    assert_eq!(edited.id, 0);

    let reopened = reload(&list, &config);
    let milk = reopened.registry().get(0).unwrap();
    assert_eq!(milk.description, "Whole");
    assert_eq!(reopened.registry().len(), 2);
}

#[test]
fn test_edit_unknown_item() {
    let mut list = GroceryList::open(MemoryStore::new(), &GroceryConfig::default());
    assert_eq!(list.edit_item(4, "Milk", "Whole"), Err(GroceryError::NotFound(4)));
    assert_eq!(stored_blob(&list), None);
}

#[test]
fn test_remove_requires_confirmation() {
    let mut list = GroceryList::open(MemoryStore::new(), &GroceryConfig::default());
    list.add_item("Milk", "2%").unwrap();
    let before = stored_blob(&list);

    let confirm = ScriptedConfirm::new([false, true]);
    assert_eq!(list.remove_item(0, &confirm).unwrap(), None);
    assert_eq!(list.registry().len(), 1);
    assert_eq!(stored_blob(&list), before);

    let removed = list.remove_item(0, &confirm).unwrap().unwrap();
    assert_eq!(removed.name, "Milk");
    assert!(list.registry().is_empty());
    assert_eq!(stored_blob(&list).as_deref(), Some("{}"));
    assert_eq!(confirm.prompts(), vec!["Delete item?", "Delete item?"]);
}

#[test]
fn test_remove_unknown_is_noop() {
    let mut list = GroceryList::open(MemoryStore::new(), &GroceryConfig::default());
    list.add_item("Milk", "2%").unwrap();
    let before = stored_blob(&list);

    let confirm = ScriptedConfirm::new([true]);
    assert_eq!(list.remove_item(42, &confirm).unwrap(), None);
    assert!(confirm.prompts().is_empty());
    assert_eq!(list.registry().len(), 1);
    assert_eq!(stored_blob(&list), before);
}

#[test]
fn test_clear_all_scenario() {
    let config = GroceryConfig::default();
    let mut backend = MemoryStore::new();
    backend.set("theme", "dark").unwrap();
    let mut list = GroceryList::open(backend, &config);
    list.add_item("Milk", "2%").unwrap();
    list.add_item("Eggs", "Dozen").unwrap();

    list.clear_all().unwrap();
    assert!(list.registry().is_empty());
    assert!(list.store().backend().is_empty());
    assert_eq!(list.add_item("Bread", "Rye").unwrap().id, 0);
}

#[test]
fn test_clear_all_scoped_to_items() {
    let mut config = GroceryConfig::default();
    config.storage.clear_scope = ClearScope::Items;
    let mut backend = MemoryStore::new();
    backend.set("theme", "dark").unwrap();
    let mut list = GroceryList::open(backend, &config);
    list.add_item("Milk", "2%").unwrap();

    list.clear_all().unwrap();
    assert_eq!(stored_blob(&list), None);
    assert_eq!(list.store().backend().get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_filter_scenario() {
    let mut list = GroceryList::open(MemoryStore::new(), &GroceryConfig::default());
    list.add_item("Milk", "2%").unwrap();
    list.add_item("Eggs", "Dozen").unwrap();

    assert_eq!(list.filter("mi"), vec![(0, true), (1, false)]);
    assert!(list.filter("zzz").iter().all(|(_, visible)| !*visible));
    assert_eq!(list.filter(""), vec![(0, true), (1, true)]);
}

#[test]
fn test_reload_reseeds_past_highest_id() {
    let config = GroceryConfig::default();
    let mut list = GroceryList::open(MemoryStore::new(), &config);
    for name in ["Milk", "Eggs", "Bread"] {
        list.add_item(name, "x").unwrap();
    }
    list.remove_item(1, &FixedAnswer(true)).unwrap();

    let mut reopened = reload(&list, &config);
    assert_eq!(reopened.add_item("Tea", "Green").unwrap().id, 3);
}

#[test]
fn test_corrupt_store_opens_empty() {
    let mut backend = MemoryStore::new();
    backend.set("groceryItems", "not json at all").unwrap();
    let mut list = GroceryList::open(backend, &GroceryConfig::default());
    assert!(list.registry().is_empty());

    assert_eq!(list.add_item("Milk", "2%").unwrap().id, 0);
    assert!(stored_blob(&list).unwrap().contains("\"Milk\""));
}

#[test]
fn test_custom_storage_key() {
    let mut config = GroceryConfig::default();
    config.storage.key = "pantry".to_string();
    let mut list = GroceryList::open(MemoryStore::new(), &config);
    list.add_item("Milk", "2%").unwrap();

    assert!(list.store().backend().get("pantry").unwrap().is_some());
    assert_eq!(stored_blob(&list), None);
}

#[test]
fn test_storage_failure_is_reported() {
    let mut list = GroceryList::open(FullStore::default(), &GroceryConfig::default());
    let err = list.add_item("Milk", "2%").unwrap_err();
    assert_eq!(err, GroceryError::Storage("quota exceeded".to_string()));
    // the registry keeps the item for the rest of the session
    assert_eq!(list.registry().len(), 1);
}

#[test]
fn test_failed_save_does_not_duplicate_on_resubmit() {
    let mut list = GroceryList::open(FullStore::default(), &GroceryConfig::default());
    let mut form = FormController::new();
    form.set_name("Milk");
    form.set_description("2%");

    assert!(matches!(form.submit(&mut list), Err(GroceryError::Storage(_))));
    assert_eq!(form, FormController::new());

    // submitting the now-empty form is rejected instead of adding again
    assert!(form.submit(&mut list).unwrap_err().is_validation());
    assert_eq!(list.registry().len(), 1);
}

#[test]
fn test_highest_possible_id_is_not_overwritten() {
    let config = GroceryConfig::default();
    let mut backend = MemoryStore::new();
    backend
        .set("groceryItems", r#"{"4294967295":{"name":"Salt","description":"Sea","id":4294967295}}"#)
        .unwrap();
    let mut list = GroceryList::open(backend, &config);
    let before = stored_blob(&list);

    assert_eq!(list.add_item("Milk", "2%"), Err(GroceryError::IdsExhausted));
    assert_eq!(list.registry().get(ItemId::MAX).unwrap().name, "Salt");
    assert_eq!(list.registry().len(), 1);
    assert_eq!(stored_blob(&list), before);
}
