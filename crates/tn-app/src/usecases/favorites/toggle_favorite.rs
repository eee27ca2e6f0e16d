use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use tn_core::catalog::CatalogError;
use tn_core::ids::HotelId;
use tn_core::ports::{CatalogPort, ClockPort};
use tn_core::selection::{FavoriteEntry, ToggleOutcome};

use crate::services::selection::FavoritesStore;

/// Flip a hotel's favorite state: first call saves it, second removes it.
/// The returned outcome drives the filled/empty heart affordance.
pub struct ToggleFavorite {
    catalog: Arc<dyn CatalogPort>,
    favorites: Arc<FavoritesStore>,
    clock: Arc<dyn ClockPort>,
}

impl ToggleFavorite {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        favorites: Arc<FavoritesStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            clock,
        }
    }

    pub async fn execute(&self, hotel_id: &HotelId) -> Result<ToggleOutcome> {
        let hotel = self
            .catalog
            .get_hotel(hotel_id)
            .await?
            .ok_or_else(|| CatalogError::HotelNotFound(hotel_id.clone()))?;

        let entry = FavoriteEntry::new(&hotel, self.clock.now_ms());
        let outcome = self.favorites.toggle(entry).await;

        info!(hotel = %hotel_id, outcome = ?outcome, "Toggled favorite");
        Ok(outcome)
    }
}
