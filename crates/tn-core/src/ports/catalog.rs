use async_trait::async_trait;

use crate::catalog::{Hotel, Room};
use crate::ids::{HotelId, RoomId};

/// Read access to the hotel catalog.
///
/// The shipped adapter serves seeded in-memory data; the port keeps the
/// application layer indifferent to where listings come from.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    async fn list_hotels(&self) -> anyhow::Result<Vec<Hotel>>;

    async fn get_hotel(&self, hotel_id: &HotelId) -> anyhow::Result<Option<Hotel>>;

    async fn rooms_for_hotel(&self, hotel_id: &HotelId) -> anyhow::Result<Vec<Room>>;

    async fn get_room(&self, hotel_id: &HotelId, room_id: &RoomId)
        -> anyhow::Result<Option<Room>>;
}
