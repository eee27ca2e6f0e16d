//! Application assembly.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use tn_app::services::selection::{ComparisonStore, FavoritesStore};
use tn_app::usecases::comparison::{
    AddRoomToComparison, BuildComparisonTable, ClearComparison, RemoveRoomFromComparison,
};
use tn_app::usecases::favorites::{ListFavorites, ToggleFavorite};
use tn_app::usecases::{GetHotelDetail, SearchHotels};
use tn_app::AppDeps;
use tn_core::selection::{ComparisonEntry, FavoriteEntry};
use tn_infra::{AppConfig, JsonCollectionStore, SeedCatalog, SystemClock};

/// The assembled application: hydrated stores plus use case accessors.
///
/// Shells hold one `App` and call the accessors per interaction; all state
/// lives in the injected stores, not in the shell.
pub struct App {
    deps: AppDeps,
}

impl App {
    /// Build adapters from config, wire the dependency set, and hydrate both
    /// collections from disk.
    pub async fn init(config: &AppConfig) -> Result<Self> {
        let collections_dir = config.collections_dir()?;
        debug!(dir = %collections_dir.display(), "Using collections directory");

        let comparison_store: Arc<JsonCollectionStore<ComparisonEntry>> =
            Arc::new(JsonCollectionStore::in_dir(&collections_dir, "comparison"));
        let favorites_store: Arc<JsonCollectionStore<FavoriteEntry>> =
            Arc::new(JsonCollectionStore::in_dir(&collections_dir, "favorites"));

        let comparison = Arc::new(ComparisonStore::comparison(comparison_store));
        let favorites = Arc::new(FavoritesStore::favorites(favorites_store));
        comparison.hydrate().await;
        favorites.hydrate().await;

        let deps = AppDeps {
            catalog: Arc::new(SeedCatalog::new()),
            comparison,
            favorites,
            clock: Arc::new(SystemClock),
        };

        Ok(Self { deps })
    }

    pub fn deps(&self) -> &AppDeps {
        &self.deps
    }

    pub fn search_hotels(&self) -> SearchHotels {
        SearchHotels::new(self.deps.catalog.clone(), self.deps.favorites.clone())
    }

    pub fn get_hotel_detail(&self) -> GetHotelDetail {
        GetHotelDetail::new(
            self.deps.catalog.clone(),
            self.deps.favorites.clone(),
            self.deps.comparison.clone(),
        )
    }

    pub fn add_room_to_comparison(&self) -> AddRoomToComparison {
        AddRoomToComparison::new(
            self.deps.catalog.clone(),
            self.deps.comparison.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn remove_room_from_comparison(&self) -> RemoveRoomFromComparison {
        RemoveRoomFromComparison::new(self.deps.comparison.clone())
    }

    pub fn clear_comparison(&self) -> ClearComparison {
        ClearComparison::new(self.deps.comparison.clone())
    }

    pub fn build_comparison_table(&self) -> BuildComparisonTable {
        BuildComparisonTable::new(self.deps.comparison.clone())
    }

    pub fn toggle_favorite(&self) -> ToggleFavorite {
        ToggleFavorite::new(
            self.deps.catalog.clone(),
            self.deps.favorites.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn list_favorites(&self) -> ListFavorites {
        ListFavorites::new(self.deps.favorites.clone())
    }
}
