//! Application dependency grouping.
//!
//! Not a builder: no build steps, no defaults, no hidden logic. The struct
//! is the dependency manifest — collections and the catalog are injected
//! explicitly instead of living in ambient global state.

use std::sync::Arc;

use tn_core::ports::{CatalogPort, ClockPort};

use crate::services::selection::{ComparisonStore, FavoritesStore};

pub struct AppDeps {
    pub catalog: Arc<dyn CatalogPort>,
    pub comparison: Arc<ComparisonStore>,
    pub favorites: Arc<FavoritesStore>,
    pub clock: Arc<dyn ClockPort>,
}
