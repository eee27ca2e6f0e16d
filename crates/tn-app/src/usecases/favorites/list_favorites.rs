use std::sync::Arc;

use tn_core::selection::FavoriteEntry;

use crate::services::selection::FavoritesStore;

/// Current favorites in the order they were saved, for the wishlist drawer.
pub struct ListFavorites {
    favorites: Arc<FavoritesStore>,
}

impl ListFavorites {
    pub fn new(favorites: Arc<FavoritesStore>) -> Self {
        Self { favorites }
    }

    pub async fn execute(&self) -> Vec<FavoriteEntry> {
        self.favorites.entries().await
    }
}
