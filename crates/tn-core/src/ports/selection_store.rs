use async_trait::async_trait;

/// Durable backing store for one selection collection.
///
/// The store holds the whole collection as a single snapshot under one
/// namespaced location; `save` replaces any prior value. Contract for `load`:
/// absent, empty, or unparseable data degrades to an empty collection — it
/// must not surface a parse error to the caller. The in-memory collection
/// stays authoritative for the session even when `save` fails.
#[async_trait]
pub trait SelectionStorePort<T>: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<T>>;
    async fn save(&self, entries: &[T]) -> anyhow::Result<()>;
}
