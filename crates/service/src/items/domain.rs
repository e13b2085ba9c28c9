use serde::{Deserialize, Serialize};

pub type ItemId = u64;

/// Stored item. `id` is assigned on creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Create/update payload. Any `id` sent by the client is dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: Some(name.into()), description: Some(description.into()) }
    }

    /// Full replace: every field of the stored item comes from the payload.
    pub fn into_item(self, id: ItemId) -> Item {
        Item { id, name: self.name, description: self.description }
    }
}
