use serde::{Deserialize, Serialize};

use crate::catalog::Amenity;
use crate::ids::{HotelId, RoomId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub image_url: String,

    /// Nightly rate in minor currency units.
    pub nightly_price_minor: i64,

    /// Maximum number of guests.
    pub sleeps: u8,

    /// Floor area in square meters.
    pub size_sqm: u16,

    pub amenities: Vec<Amenity>,
}
