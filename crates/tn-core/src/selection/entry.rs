use serde::{Deserialize, Serialize};

use crate::catalog::{Amenity, GuestRating, Hotel, Room};
use crate::ids::{HotelId, RoomId};
use crate::selection::item::SelectionItem;

/// Display fields of a room captured when it enters the comparison tray.
///
/// A point-in-time copy, not a live reference: later catalog edits do not
/// change what the tray shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub hotel_name: String,
    pub room_name: String,
    pub image_url: String,
    pub nightly_price_minor: i64,
    pub sleeps: u8,
    pub size_sqm: u16,
    pub amenities: Vec<Amenity>,
}

impl RoomSnapshot {
    pub fn capture(hotel: &Hotel, room: &Room) -> Self {
        Self {
            hotel_name: hotel.name.clone(),
            room_name: room.name.clone(),
            image_url: room.image_url.clone(),
            nightly_price_minor: room.nightly_price_minor,
            sleeps: room.sleeps,
            size_sqm: room.size_sqm,
            amenities: room.amenities.clone(),
        }
    }
}

/// Display fields of a hotel captured when it is favorited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSnapshot {
    pub name: String,
    pub city: String,
    pub image_url: String,
    pub nightly_price_minor: i64,
    pub rating: GuestRating,
}

impl HotelSnapshot {
    pub fn capture(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            city: hotel.city.clone(),
            image_url: hotel.image_url.clone(),
            nightly_price_minor: hotel.nightly_price_minor,
            rating: hotel.rating,
        }
    }
}

/// One room in the comparison tray, identified by the (hotel, room) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub hotel_id: HotelId,
    pub room_id: RoomId,
    pub snapshot: RoomSnapshot,
    pub added_at_ms: i64,
}

impl ComparisonEntry {
    pub fn new(hotel: &Hotel, room: &Room, added_at_ms: i64) -> Self {
        Self {
            hotel_id: hotel.hotel_id.clone(),
            room_id: room.room_id.clone(),
            snapshot: RoomSnapshot::capture(hotel, room),
            added_at_ms,
        }
    }
}

impl SelectionItem for ComparisonEntry {
    type Key = (HotelId, RoomId);

    fn key(&self) -> Self::Key {
        (self.hotel_id.clone(), self.room_id.clone())
    }
}

/// One favorited hotel, identified by the hotel id alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub hotel_id: HotelId,
    pub snapshot: HotelSnapshot,
    pub added_at_ms: i64,
}

impl FavoriteEntry {
    pub fn new(hotel: &Hotel, added_at_ms: i64) -> Self {
        Self {
            hotel_id: hotel.hotel_id.clone(),
            snapshot: HotelSnapshot::capture(hotel),
            added_at_ms,
        }
    }
}

impl SelectionItem for FavoriteEntry {
    type Key = HotelId;

    fn key(&self) -> Self::Key {
        self.hotel_id.clone()
    }
}
