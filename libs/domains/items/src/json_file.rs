//! JSON document implementation of ItemRepository

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

use crate::error::{ItemError, ItemResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// Stores the collection as one pretty-printed JSON array on disk.
///
/// Saves write a sibling temporary file and rename it over the document,
/// so a concurrent `load` sees either the old or the new collection.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "items.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ItemRepository for JsonFileRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> ItemResult<Vec<Item>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No item document yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ItemError::CorruptStore(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let items: Vec<Item> = serde_json::from_str(&raw)
            .map_err(|e| ItemError::CorruptStore(format!("{}: {}", self.path.display(), e)))?;

        debug!(count = items.len(), "Loaded items");
        Ok(items)
    }

    #[instrument(skip(self, items), fields(path = %self.path.display(), count = items.len()))]
    async fn save(&self, items: &[Item]) -> ItemResult<()> {
        let body = serde_json::to_string_pretty(items)
            .map_err(|e| ItemError::Persistence(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ItemError::Persistence(e.to_string()))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, body)
            .await
            .map_err(|e| ItemError::Persistence(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| ItemError::Persistence(e.to_string()))?;

        debug!("Saved items");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn repo_in(dir: &TempDir) -> JsonFileRepository {
        JsonFileRepository::new(dir.path().join("items.json"))
    }

    #[tokio::test]
    async fn test_missing_document_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(repo_in(&dir).load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_document_is_corrupt_store() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        std::fs::write(repo.path(), "{ not json").unwrap();

        assert!(matches!(repo.load().await, Err(ItemError::CorruptStore(_))));
    }

    #[tokio::test]
    async fn test_save_writes_pretty_json_and_creates_parent() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested/data/items.json"));
        let items = vec![Item {
            id: 1,
            name: "Pen".to_string(),
            category: Some("Office".to_string()),
            price: Some(Price::Amount(1.5)),
        }];

        repo.save(&items).await.unwrap();

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        assert!(raw.starts_with("[\n  {"));
        assert_eq!(repo.load().await.unwrap(), items);
        assert!(!repo.temp_path().exists());
    }

    #[tokio::test]
    async fn test_save_load_round_trip_preserves_content() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        let original = json!([
            {"id": 1, "name": "Pen", "category": "Office", "price": 1.5},
            {"id": 4, "name": "Odd", "price": "bad"},
            {"id": 2, "name": "Cup", "category": "Kitchen"}
        ]);
        std::fs::write(repo.path(), original.to_string()).unwrap();

        let items = repo.load().await.unwrap();
        repo.save(&items).await.unwrap();

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        let saved: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved, original);
    }

    #[tokio::test]
    async fn test_save_into_unwritable_location_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();
        let repo = JsonFileRepository::new(blocker.join("items.json"));

        assert!(matches!(
            repo.save(&[]).await,
            Err(ItemError::Persistence(_))
        ));
    }
}
