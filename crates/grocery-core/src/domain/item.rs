//! Item Entity
//!
//! A single grocery entry: what to buy and a note about it.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::ValidationError;

/// Identifier handed out by the registry counter
pub type ItemId = u32;

/// A named, described grocery entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    /// Older saves stored edited items with a string id, so both forms are read.
    #[serde(deserialize_with = "deserialize_item_id")]
    pub id: ItemId,
}

impl Item {
    /// Build an item after checking both fields are non-empty
    pub fn new(id: ItemId, name: impl Into<String>, description: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let description = description.into();
        validate_fields(&name, &description)?;
        Ok(Self { id, name, description })
    }

    /// Replace name and description, keeping the id
    pub fn rename(&mut self, name: impl Into<String>, description: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        let description = description.into();
        validate_fields(&name, &description)?;
        self.name = name;
        self.description = description;
        Ok(())
    }

    /// Case-insensitive substring match against the name only
    pub fn matches_filter(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Both fields are required; nothing else is checked.
pub fn validate_fields(name: &str, description: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(())
}

fn deserialize_item_id<'de, D>(deserializer: D) -> Result<ItemId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(ItemId),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
