//! In-memory selection store with per-mutation persistence.
//!
//! [`SelectionService`] owns one [`SelectionList`] and a backing store port.
//! Every mutation rewrites the full snapshot before the call returns — no
//! debouncing, no batching; collections are small and writes are local. A
//! failed write is logged and swallowed: the in-memory list stays the source
//! of truth for the rest of the session, and nothing is rolled back.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use tn_core::ports::SelectionStorePort;
use tn_core::selection::{
    ComparisonEntry, FavoriteEntry, InsertOutcome, SelectionItem, SelectionList, ToggleOutcome,
    MAX_COMPARED_ROOMS,
};

pub struct SelectionService<T: SelectionItem> {
    /// Collection name for logs and diagnostics (`comparison`, `favorites`).
    name: &'static str,
    list: Mutex<SelectionList<T>>,
    store: Arc<dyn SelectionStorePort<T>>,
}

/// The room comparison tray: capacity four, keyed by (hotel, room).
pub type ComparisonStore = SelectionService<ComparisonEntry>;

/// The favorites list: unbounded, keyed by hotel.
pub type FavoritesStore = SelectionService<FavoriteEntry>;

impl SelectionService<ComparisonEntry> {
    pub fn comparison(store: Arc<dyn SelectionStorePort<ComparisonEntry>>) -> Self {
        Self::bounded("comparison", MAX_COMPARED_ROOMS, store)
    }
}

impl SelectionService<FavoriteEntry> {
    pub fn favorites(store: Arc<dyn SelectionStorePort<FavoriteEntry>>) -> Self {
        Self::unbounded("favorites", store)
    }
}

impl<T> SelectionService<T>
where
    T: SelectionItem + Clone + Send + Sync,
{
    pub fn bounded(
        name: &'static str,
        capacity: usize,
        store: Arc<dyn SelectionStorePort<T>>,
    ) -> Self {
        Self {
            name,
            list: Mutex::new(SelectionList::with_capacity(capacity)),
            store,
        }
    }

    pub fn unbounded(name: &'static str, store: Arc<dyn SelectionStorePort<T>>) -> Self {
        Self {
            name,
            list: Mutex::new(SelectionList::unbounded()),
            store,
        }
    }

    /// Rebuild the in-memory list from the backing store. Run once at
    /// startup; a load failure degrades to an empty collection.
    pub async fn hydrate(&self) -> usize {
        let entries = match self.store.load().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    collection = self.name,
                    error = %e,
                    "Failed to load collection, starting empty"
                );
                Vec::new()
            }
        };

        let mut list = self.list.lock().await;
        list.replace(entries);
        debug!(collection = self.name, count = list.len(), "Hydrated collection");
        list.len()
    }

    /// Insert unless duplicate or at capacity, then persist.
    pub async fn add(&self, entry: T) -> InsertOutcome {
        let mut list = self.list.lock().await;
        let outcome = list.insert(entry);
        if outcome == InsertOutcome::Inserted {
            self.persist(&list).await;
        }
        outcome
    }

    /// Add if absent, remove if present, then persist.
    pub async fn toggle(&self, entry: T) -> ToggleOutcome {
        let mut list = self.list.lock().await;
        let outcome = list.toggle(entry);
        if outcome != ToggleOutcome::Rejected {
            self.persist(&list).await;
        }
        outcome
    }

    /// Remove the entry with the given key. Idempotent; persists only when
    /// something was removed.
    pub async fn remove(&self, key: &T::Key) -> bool {
        let mut list = self.list.lock().await;
        let removed = list.remove(key);
        if removed {
            self.persist(&list).await;
        }
        removed
    }

    pub async fn clear(&self) {
        let mut list = self.list.lock().await;
        list.clear();
        self.persist(&list).await;
    }

    pub async fn contains(&self, key: &T::Key) -> bool {
        self.list.lock().await.contains(key)
    }

    pub async fn count(&self) -> usize {
        self.list.lock().await.len()
    }

    pub async fn is_full(&self) -> bool {
        self.list.lock().await.is_full()
    }

    /// Current entries in insertion order.
    pub async fn entries(&self) -> Vec<T> {
        self.list.lock().await.entries().to_vec()
    }

    /// Write the full snapshot. Called with the list lock held so writes hit
    /// the store in mutation order. Failures are logged, never propagated.
    async fn persist(&self, list: &SelectionList<T>) {
        if let Err(e) = self.store.save(list.entries()).await {
            warn!(
                collection = self.name,
                error = %e,
                "Failed to persist collection, in-memory state unaffected"
            );
        }
    }
}
