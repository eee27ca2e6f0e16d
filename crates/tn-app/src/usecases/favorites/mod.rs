//! Favorites (wishlist) operations.

pub mod list_favorites;
pub mod toggle_favorite;

pub use list_favorites::ListFavorites;
pub use toggle_favorite::ToggleFavorite;
