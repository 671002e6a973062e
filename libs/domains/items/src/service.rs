//! Item Service - Business logic layer

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemPayload, ItemQuery};
use crate::report::{self, StatsReport, SummaryReport};
use crate::repository::ItemRepository;

const LIMIT_MESSAGE: &str = "Limit must be a non-negative number";

/// Item service providing business logic operations
///
/// Every load/mutate/save sequence runs under the write gate, so concurrent
/// mutations within one process never compute the same id or overwrite each
/// other. Reads go straight to the repository.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
    write_gate: Arc<Mutex<()>>,
}

fn parse_limit(raw: Option<&str>) -> ItemResult<Option<usize>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ItemError::InvalidArgument(LIMIT_MESSAGE.to_string())),
    }
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// List items, optionally filtered by `q` and truncated to `limit`
    #[instrument(skip(self))]
    pub async fn list_items(&self, query: ItemQuery) -> ItemResult<Vec<Item>> {
        let limit = parse_limit(query.limit.as_deref())?;
        let mut items = self.repository.load().await?;

        if let Some(q) = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let needle = q.to_lowercase();
            items.retain(|item| item.matches(&needle));
        }
        if let Some(limit) = limit {
            items.truncate(limit);
        }

        Ok(items)
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<Item> {
        self.repository
            .load()
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(ItemError::NotFound(id))
    }

    /// Create a new item with the next free id
    #[instrument(skip(self, payload))]
    pub async fn create_item(&self, payload: ItemPayload) -> ItemResult<Item> {
        let input = payload.into_input()?;

        let _gate = self.write_gate.lock().await;
        let mut items = self.repository.load().await?;

        let id = match items.iter().map(|item| item.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or(ItemError::IdsExhausted(max))?,
        };
        let item = Item::new(id, input);
        items.push(item.clone());
        self.repository.save(&items).await?;

        info!(item_id = id, "Item created");
        Ok(item)
    }

    /// Replace an existing item, keeping its id
    #[instrument(skip(self, payload))]
    pub async fn update_item(&self, id: i64, payload: ItemPayload) -> ItemResult<Item> {
        let input = payload.into_input()?;

        let _gate = self.write_gate.lock().await;
        let mut items = self.repository.load().await?;

        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ItemError::NotFound(id))?;
        *slot = Item::new(id, input);
        let item = slot.clone();
        self.repository.save(&items).await?;

        info!(item_id = id, "Item updated");
        Ok(item)
    }

    /// Delete an item, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<Item> {
        let _gate = self.write_gate.lock().await;
        let mut items = self.repository.load().await?;

        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ItemError::NotFound(id))?;
        let removed = items.remove(index);
        self.repository.save(&items).await?;

        info!(item_id = id, "Item deleted");
        Ok(removed)
    }

    /// Full statistics report
    #[instrument(skip(self))]
    pub async fn stats_report(&self) -> ItemResult<StatsReport> {
        let items = self.repository.load().await?;
        let report = report::build_report(&items, Utc::now());

        info!(
            total = report.total,
            average_price = report.average_price,
            total_value = report.total_value,
            "Stats calculated"
        );
        Ok(report)
    }

    /// Quick count and total value
    #[instrument(skip(self))]
    pub async fn stats_summary(&self) -> ItemResult<SummaryReport> {
        let items = self.repository.load().await?;
        Ok(report::build_summary(&items, Utc::now()))
    }

    /// Whether the store can currently be read
    pub async fn check_store(&self) -> ItemResult<()> {
        self.repository.load().await.map(|_| ())
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            write_gate: Arc::clone(&self.write_gate),
        }
    }
}
