use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::items::domain::{Item, ItemId, ItemInput};
use crate::items::repository::ItemRepository;

/// Application service for items, shared across handlers as `Arc<ItemService>`.
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self { Self { repo } }

    /// All items ordered by id.
    pub async fn list(&self) -> Vec<Item> {
        let mut items = self.repo.list().await;
        items.sort_unstable_by_key(|item| item.id);
        debug!(count = items.len(), "list items");
        items
    }

    pub async fn get(&self, id: ItemId) -> Result<Item, ServiceError> {
        self.repo.get(id).await.ok_or(ServiceError::NotFound(id))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: ItemInput) -> Item {
        let item = self.repo.insert(input).await;
        info!(item_id = item.id, "created item");
        item
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: ItemId, input: ItemInput) -> Result<Item, ServiceError> {
        let item = self.repo.replace(id, input).await.ok_or(ServiceError::NotFound(id))?;
        info!(item_id = id, "updated item");
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ItemId) -> Result<(), ServiceError> {
        self.repo.remove(id).await.ok_or(ServiceError::NotFound(id))?;
        info!(item_id = id, "deleted item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::InMemoryItemRepository;

    fn service() -> ItemService {
        ItemService::new(Arc::new(InMemoryItemRepository::new()))
    }

    #[tokio::test]
    async fn list_is_empty_then_counts_creates() {
        let svc = service();
        assert!(svc.list().await.is_empty());
        for i in 0..3 {
            svc.create(ItemInput::new(format!("item-{i}"), "d")).await;
        }
        let ids: Vec<ItemId> = svc.list().await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn get_returns_created_item() {
        let svc = service();
        let created = svc.create(ItemInput::new("Widget", "A widget")).await;
        assert_eq!(svc.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_keeps_id_and_replaces_fields() {
        let svc = service();
        let created = svc.create(ItemInput::new("Widget", "A widget")).await;
        let updated = svc.update(created.id, ItemInput::new("Widget2", "B")).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name.as_deref(), Some("Widget2"));
        assert_eq!(updated.description.as_deref(), Some("B"));
        assert_eq!(svc.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn delete_then_everything_is_not_found() {
        let svc = service();
        let created = svc.create(ItemInput::new("Widget", "A widget")).await;
        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound(id)) if id == created.id));
        assert!(matches!(svc.delete(created.id).await, Err(ServiceError::NotFound(_))));
        assert!(svc.list().await.is_empty());
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let svc = service();
        assert!(matches!(svc.get(99).await, Err(ServiceError::NotFound(99))));
        assert!(matches!(svc.update(99, ItemInput::default()).await, Err(ServiceError::NotFound(99))));
        assert!(matches!(svc.delete(99).await, Err(ServiceError::NotFound(99))));
    }

    #[tokio::test]
    async fn ids_increase_across_interleaved_deletes() {
        let svc = service();
        let mut last = 0;
        for round in 0..5 {
            let a = svc.create(ItemInput::default()).await;
            let b = svc.create(ItemInput::default()).await;
            assert!(a.id > last && b.id > a.id, "round {round}");
            svc.delete(a.id).await.unwrap();
            last = b.id;
        }
        assert_eq!(svc.list().await.len(), 5);
    }
}
