//! Domain Layer
//!
//! Entities, errors and the form mode shared by every other layer.
//! Nothing here touches storage or the browser.

mod error;
mod item;
mod mode;

pub use error::{GroceryError, GroceryResult, ValidationError};
pub use item::{validate_fields, Item, ItemId};
pub use mode::FormMode;
