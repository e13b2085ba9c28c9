use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::items::domain::{Item, ItemId, ItemInput};
use crate::items::repository::ItemRepository;

const FIRST_ID: ItemId = 1;

/// Process-local item table. Contents live as long as the value does.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    items: DashMap<ItemId, Item>,
    next_id: AtomicU64,
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self { items: DashMap::new(), next_id: AtomicU64::new(FIRST_ID) }
    }
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn allocate_id(&self) -> ItemId {
        // Relaxed is enough: uniqueness comes from the RMW, not from ordering with the map.
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> Vec<Item> {
        self.items.iter().map(|entry| entry.value().clone()).collect()
    }

    async fn get(&self, id: ItemId) -> Option<Item> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    async fn insert(&self, input: ItemInput) -> Item {
        let id = self.allocate_id();
        let item = input.into_item(id);
        // ids are never handed out twice, so this cannot overwrite
        self.items.entry(id).or_insert_with(|| item.clone());
        item
    }

    async fn replace(&self, id: ItemId, input: ItemInput) -> Option<Item> {
        let mut entry = self.items.get_mut(&id)?;
        *entry = input.into_item(id);
        Some(entry.value().clone())
    }

    async fn remove(&self, id: ItemId) -> Option<Item> {
        self.items.remove(&id).map(|(_, item)| item)
    }
}
