//! UI Components
//!
//! Leptos components for the form, the list and its controls.

mod grocery_form;
mod item_row;
mod item_list;
mod filter_input;
mod clear_list_button;

pub use grocery_form::GroceryForm;
pub use item_row::ItemRow;
pub use item_list::ItemList;
pub use filter_input::FilterInput;
pub use clear_list_button::ClearListButton;
