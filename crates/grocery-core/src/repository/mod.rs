//! Repository Layer
//!
//! Storage abstraction and the persisted item blob built on top of it.

mod traits;
mod memory;
mod item_store;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use item_store::{ItemMap, ItemStore};
