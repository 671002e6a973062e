use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::Item;

/// Whole-collection access to the persisted items.
///
/// The collection is always read and written as one ordered sequence.
/// Implementations provide no locking across a load/save pair; callers that
/// mutate must serialize themselves (see `ItemService`).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Load the full collection. A missing document is an empty collection.
    async fn load(&self) -> ItemResult<Vec<Item>>;

    /// Replace the persisted collection with `items`.
    async fn save(&self, items: &[Item]) -> ItemResult<()>;
}

/// In-memory repository, used by tests and local experiments
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn load(&self) -> ItemResult<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn save(&self, items: &[Item]) -> ItemResult<()> {
        *self.items.write().await = items.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            category: Some("Office".to_string()),
            price: Some(Price::Amount(1.0)),
        }
    }

    #[tokio::test]
    async fn test_empty_repository_loads_nothing() {
        let repo = InMemoryItemRepository::new();
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_collection() {
        let repo = InMemoryItemRepository::with_items(vec![item(1, "Pen")]);

        repo.save(&[item(2, "Cup"), item(3, "Mug")]).await.unwrap();

        let names: Vec<_> = repo.load().await.unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Cup", "Mug"]);
    }
}
