use async_trait::async_trait;

use super::domain::{Item, ItemId, ItemInput};

/// Storage abstraction for items.
///
/// Each call must be atomic for its key; no ordering is promised across keys.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All stored items, in no particular order.
    async fn list(&self) -> Vec<Item>;
    async fn get(&self, id: ItemId) -> Option<Item>;
    /// Allocate a fresh id and store the item under it.
    async fn insert(&self, input: ItemInput) -> Item;
    /// Replace an existing item; `None` when `id` is absent (nothing is inserted).
    async fn replace(&self, id: ItemId, input: ItemInput) -> Option<Item>;
    /// Remove and return the item, `None` when absent.
    async fn remove(&self, id: ItemId) -> Option<Item>;
}
