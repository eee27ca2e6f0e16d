use std::sync::Arc;

use anyhow::Result;
use tracing::{info_span, Instrument};

use tn_core::catalog::{Amenity, Hotel};
use tn_core::ports::CatalogPort;

use crate::models::HotelCard;
use crate::services::selection::FavoritesStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    PriceAscending,
    RatingDescending,
}

/// Search filters. Empty query matches everything.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Case-insensitive substring match on the city.
    pub city: Option<String>,
    pub max_nightly_price_minor: Option<i64>,
    pub min_rating_tenths: Option<u8>,
    /// All listed amenities must be present.
    pub amenities: Vec<Amenity>,
    pub sort: SortBy,
}

impl SearchQuery {
    fn matches(&self, hotel: &Hotel) -> bool {
        if let Some(city) = &self.city {
            if !hotel.city.to_lowercase().contains(&city.to_lowercase()) {
                return false;
            }
        }
        if let Some(max_price) = self.max_nightly_price_minor {
            if hotel.nightly_price_minor > max_price {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating_tenths {
            if hotel.rating.tenths() < min_rating {
                return false;
            }
        }
        self.amenities
            .iter()
            .all(|amenity| hotel.has_amenity(*amenity))
    }
}

/// Filter and sort the catalog into hotel cards for the results list.
pub struct SearchHotels {
    catalog: Arc<dyn CatalogPort>,
    favorites: Arc<FavoritesStore>,
}

impl SearchHotels {
    pub fn new(catalog: Arc<dyn CatalogPort>, favorites: Arc<FavoritesStore>) -> Self {
        Self { catalog, favorites }
    }

    pub async fn execute(&self, query: &SearchQuery) -> Result<Vec<HotelCard>> {
        let span = info_span!("usecase.search_hotels.execute");

        async {
            let mut hotels: Vec<Hotel> = self
                .catalog
                .list_hotels()
                .await?
                .into_iter()
                .filter(|hotel| query.matches(hotel))
                .collect();

            match query.sort {
                SortBy::PriceAscending => {
                    hotels.sort_by_key(|hotel| hotel.nightly_price_minor);
                }
                SortBy::RatingDescending => {
                    hotels.sort_by(|a, b| b.rating.cmp(&a.rating));
                }
            }

            let mut cards = Vec::with_capacity(hotels.len());
            for hotel in &hotels {
                let is_favorite = self.favorites.contains(&hotel.hotel_id).await;
                cards.push(HotelCard::from_hotel(hotel, is_favorite));
            }
            Ok(cards)
        }
        .instrument(span)
        .await
    }
}
