//! Hotel catalog entities.
//!
//! Pure data: hotels, rooms, amenities. The catalog itself is provided by an
//! adapter behind [`crate::ports::CatalogPort`]; nothing in here does I/O.

pub mod amenity;
pub mod hotel;
pub mod room;

pub use amenity::Amenity;
pub use hotel::{GuestRating, Hotel};
pub use room::Room;

use thiserror::Error;

use crate::ids::{HotelId, RoomId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("hotel not found: {0}")]
    HotelNotFound(HotelId),

    #[error("room not found: {room_id} (hotel {hotel_id})")]
    RoomNotFound { hotel_id: HotelId, room_id: RoomId },
}
