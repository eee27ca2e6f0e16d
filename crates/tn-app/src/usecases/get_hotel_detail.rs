use std::sync::Arc;

use anyhow::Result;

use tn_core::catalog::CatalogError;
use tn_core::ids::HotelId;
use tn_core::ports::CatalogPort;

use crate::models::{HotelDetail, RoomView};
use crate::services::selection::{ComparisonStore, FavoritesStore};

/// Assemble a hotel detail page: the hotel, its rooms, and the current
/// favorite / comparison affordance flags.
pub struct GetHotelDetail {
    catalog: Arc<dyn CatalogPort>,
    favorites: Arc<FavoritesStore>,
    comparison: Arc<ComparisonStore>,
}

impl GetHotelDetail {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        favorites: Arc<FavoritesStore>,
        comparison: Arc<ComparisonStore>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            comparison,
        }
    }

    pub async fn execute(&self, hotel_id: &HotelId) -> Result<HotelDetail> {
        let hotel = self
            .catalog
            .get_hotel(hotel_id)
            .await?
            .ok_or_else(|| CatalogError::HotelNotFound(hotel_id.clone()))?;

        let is_favorite = self.favorites.contains(hotel_id).await;
        let comparison_full = self.comparison.is_full().await;

        let mut rooms = Vec::new();
        for room in self.catalog.rooms_for_hotel(hotel_id).await? {
            let in_comparison = self
                .comparison
                .contains(&(hotel_id.clone(), room.room_id.clone()))
                .await;
            rooms.push(RoomView {
                room,
                in_comparison,
                comparison_full,
            });
        }

        Ok(HotelDetail {
            hotel,
            rooms,
            is_favorite,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tn_core::catalog::{GuestRating, Hotel, Room};
    use tn_core::ids::RoomId;
    use tn_core::ports::SelectionStorePort;
    use tn_core::selection::{ComparisonEntry, FavoriteEntry};

    struct OneHotelCatalog {
        hotel: Hotel,
        rooms: Vec<Room>,
    }

    #[async_trait]
    impl CatalogPort for OneHotelCatalog {
        async fn list_hotels(&self) -> anyhow::Result<Vec<Hotel>> {
            Ok(vec![self.hotel.clone()])
        }

        async fn get_hotel(&self, hotel_id: &HotelId) -> anyhow::Result<Option<Hotel>> {
            Ok((self.hotel.hotel_id == *hotel_id).then(|| self.hotel.clone()))
        }

        async fn rooms_for_hotel(&self, hotel_id: &HotelId) -> anyhow::Result<Vec<Room>> {
            Ok(if self.hotel.hotel_id == *hotel_id {
                self.rooms.clone()
            } else {
                vec![]
            })
        }

        async fn get_room(
            &self,
            hotel_id: &HotelId,
            room_id: &RoomId,
        ) -> anyhow::Result<Option<Room>> {
            Ok(self
                .rooms
                .iter()
                .find(|r| r.hotel_id == *hotel_id && r.room_id == *room_id)
                .cloned())
        }
    }

    struct NullStore;

    #[async_trait]
    impl<T: Send + Sync + 'static> SelectionStorePort<T> for NullStore {
        async fn load(&self) -> anyhow::Result<Vec<T>> {
            Ok(vec![])
        }

        async fn save(&self, _entries: &[T]) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn fixture() -> (Arc<OneHotelCatalog>, Arc<FavoritesStore>, Arc<ComparisonStore>) {
        let hotel = Hotel {
            hotel_id: HotelId::from_str("h1"),
            name: "Hotel h1".to_string(),
            city: "Lisbon".to_string(),
            description: String::new(),
            image_url: String::new(),
            nightly_price_minor: 10_000,
            rating: GuestRating::from_tenths(40),
            amenities: vec![],
        };
        let rooms = ["r1", "r2"]
            .iter()
            .map(|id| Room {
                room_id: RoomId::from_str(id),
                hotel_id: hotel.hotel_id.clone(),
                name: format!("Room {id}"),
                image_url: String::new(),
                nightly_price_minor: 12_000,
                sleeps: 2,
                size_sqm: 20,
                amenities: vec![],
            })
            .collect();

        (
            Arc::new(OneHotelCatalog { hotel, rooms }),
            Arc::new(FavoritesStore::favorites(Arc::new(NullStore))),
            Arc::new(ComparisonStore::comparison(Arc::new(NullStore))),
        )
    }

    #[tokio::test]
    async fn detail_carries_affordance_flags() {
        let (catalog, favorites, comparison) = fixture();
        let hotel_id = HotelId::from_str("h1");

        favorites.toggle(FavoriteEntry::new(&catalog.hotel, 0)).await;
        comparison
            .add(ComparisonEntry::new(&catalog.hotel, &catalog.rooms[0], 0))
            .await;

        let usecase = GetHotelDetail::new(catalog, favorites, comparison);
        let detail = usecase.execute(&hotel_id).await.unwrap();

        assert!(detail.is_favorite);
        assert_eq!(detail.rooms.len(), 2);
        assert!(detail.rooms[0].in_comparison);
        assert!(!detail.rooms[1].in_comparison);
        assert!(!detail.rooms[0].comparison_full);
    }

    #[tokio::test]
    async fn full_comparison_disables_every_room() {
        let (catalog, favorites, comparison) = fixture();

        for room_id in ["x1", "x2", "x3", "x4"] {
            let room = Room {
                room_id: RoomId::from_str(room_id),
                hotel_id: HotelId::from_str("other"),
                name: String::new(),
                image_url: String::new(),
                nightly_price_minor: 1,
                sleeps: 1,
                size_sqm: 1,
                amenities: vec![],
            };
            let mut other = catalog.hotel.clone();
            other.hotel_id = HotelId::from_str("other");
            comparison.add(ComparisonEntry::new(&other, &room, 0)).await;
        }

        let usecase = GetHotelDetail::new(catalog, favorites, comparison);
        let detail = usecase.execute(&HotelId::from_str("h1")).await.unwrap();

        assert!(detail.rooms.iter().all(|room| room.comparison_full));
        assert!(detail.rooms.iter().all(|room| !room.in_comparison));
    }

    #[tokio::test]
    async fn unknown_hotel_is_an_error() {
        let (catalog, favorites, comparison) = fixture();
        let usecase = GetHotelDetail::new(catalog, favorites, comparison);

        let err = usecase
            .execute(&HotelId::from_str("missing"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("hotel not found"));
    }
}
