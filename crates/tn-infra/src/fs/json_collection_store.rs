//! File-backed selection collection store.
//!
//! One JSON file per collection, holding the whole collection as a single
//! array. The analog of a namespaced key in browser local storage.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use tn_core::ports::SelectionStorePort;

pub struct JsonCollectionStore<T> {
    path: PathBuf,
    _entry: PhantomData<fn() -> T>,
}

impl<T> JsonCollectionStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entry: PhantomData,
        }
    }

    /// Store for a named collection (e.g. `favorites`) under the given
    /// directory.
    pub fn in_dir(dir: impl AsRef<Path>, collection: &str) -> Self {
        Self::new(dir.as_ref().join(format!("{collection}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl<T> SelectionStorePort<T> for JsonCollectionStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    /// Read the stored collection. Absent, empty, or malformed data yields an
    /// empty collection; a parse failure is logged, never propagated.
    async fn load(&self) -> anyhow::Result<Vec<T>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read collection file, treating as empty"
                );
                return Ok(Vec::new());
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Corrupt collection file, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Replace the stored collection with the given snapshot. Written to a
    /// temp file and renamed into place so a crash mid-write leaves either
    /// the old contents or the new, never a torn file.
    async fn save(&self, entries: &[T]) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| anyhow::anyhow!("Failed to serialize collection: {}", e))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write collection file: {}", e))?;

        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to replace collection file: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        hotel_id: String,
        room_id: String,
        price: i64,
    }

    fn entry(hotel_id: &str, room_id: &str) -> Entry {
        Entry {
            hotel_id: hotel_id.to_string(),
            room_id: room_id.to_string(),
            price: 12_900,
        }
    }

    #[tokio::test]
    async fn load_returns_empty_when_file_missing() {
        let dir = TempDir::new().unwrap();
        let store: JsonCollectionStore<Entry> = JsonCollectionStore::in_dir(dir.path(), "compare");

        let entries = store.load().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store: JsonCollectionStore<Entry> = JsonCollectionStore::in_dir(dir.path(), "compare");

        let entries = vec![entry("h1", "r1"), entry("h1", "r2")];
        store.save(&entries).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, entries);
    }

    #[tokio::test]
    async fn save_replaces_prior_contents() {
        let dir = TempDir::new().unwrap();
        let store: JsonCollectionStore<Entry> = JsonCollectionStore::in_dir(dir.path(), "compare");

        store.save(&[entry("h1", "r1")]).await.unwrap();
        store.save(&[entry("h2", "r9")]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, vec![entry("h2", "r9")]);
    }

    #[tokio::test]
    async fn empty_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "  \n").await.unwrap();

        let store: JsonCollectionStore<Entry> = JsonCollectionStore::new(path);
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty_without_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "{not valid json").await.unwrap();

        let store: JsonCollectionStore<Entry> = JsonCollectionStore::new(path);
        let loaded = store.load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn wrong_shape_loads_as_empty_without_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        // Valid JSON, but not an array of entries.
        fs::write(&path, r#"{"hotel_id": "h1"}"#).await.unwrap();

        let store: JsonCollectionStore<Entry> = JsonCollectionStore::new(path);
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store: JsonCollectionStore<Entry> = JsonCollectionStore::in_dir(&nested, "compare");

        store.save(&[entry("h1", "r1")]).await.unwrap();
        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn no_temp_file_left_behind_after_save() {
        let dir = TempDir::new().unwrap();
        let store: JsonCollectionStore<Entry> = JsonCollectionStore::in_dir(dir.path(), "compare");

        store.save(&[entry("h1", "r1")]).await.unwrap();

        let mut names = Vec::new();
        let mut read_dir = fs::read_dir(dir.path()).await.unwrap();
        while let Some(item) = read_dir.next_entry().await.unwrap() {
            names.push(item.file_name().to_string_lossy().into_owned());
        }
        assert_eq!(names, vec!["compare.json".to_string()]);
    }
}
