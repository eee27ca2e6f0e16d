use serde::Serialize;

use tn_core::catalog::{GuestRating, Hotel, Room};
use tn_core::ids::HotelId;

/// One hotel in a search result list, with the favorite affordance state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelCard {
    pub hotel_id: HotelId,
    pub name: String,
    pub city: String,
    pub image_url: String,
    pub nightly_price_minor: i64,
    pub rating: GuestRating,
    pub is_favorite: bool,
}

impl HotelCard {
    pub fn from_hotel(hotel: &Hotel, is_favorite: bool) -> Self {
        Self {
            hotel_id: hotel.hotel_id.clone(),
            name: hotel.name.clone(),
            city: hotel.city.clone(),
            image_url: hotel.image_url.clone(),
            nightly_price_minor: hotel.nightly_price_minor,
            rating: hotel.rating,
            is_favorite,
        }
    }
}

/// One room on a hotel detail page, with the compare affordance state.
///
/// `comparison_full` lets the surface disable the add control before the
/// store would reject the insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomView {
    pub room: Room,
    pub in_comparison: bool,
    pub comparison_full: bool,
}

/// A hotel detail page: the hotel, its rooms, and affordance flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelDetail {
    pub hotel: Hotel,
    pub rooms: Vec<RoomView>,
    pub is_favorite: bool,
}
