//! Grocery List Core
//!
//! Layered like the app that uses it:
//! - domain: items, errors and the form mode
//! - repository: key-value storage and the persisted item blob
//! - registry / list: in-memory items and the persisting service
//! - form: the Add/Edit controller driving submissions
//!
//! Nothing in this crate depends on the browser.

pub mod config;
pub mod confirm;
pub mod domain;
pub mod form;
pub mod list;
pub mod registry;
pub mod repository;

#[cfg(test)]
mod tests;

pub use config::{ClearScope, GroceryConfig};
pub use confirm::Confirm;
pub use domain::{FormMode, GroceryError, GroceryResult, Item, ItemId, ValidationError};
pub use form::FormController;
pub use list::GroceryList;
pub use registry::ItemRegistry;
pub use repository::{ItemMap, ItemStore, KeyValueStore, MemoryStore};
