use serde::{Deserialize, Serialize};

use crate::catalog::Amenity;
use crate::ids::HotelId;

/// Guest rating in tenths of a star, 0..=50.
///
/// Stored as an integer so snapshots round-trip exactly through JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuestRating(u8);

impl GuestRating {
    pub const MAX: GuestRating = GuestRating(50);

    /// Clamps out-of-range input instead of failing; ratings come from mock data.
    pub fn from_tenths(tenths: u8) -> Self {
        Self(tenths.min(50))
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn stars(&self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl std::fmt::Display for GuestRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.stars())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: HotelId,
    pub name: String,
    pub city: String,
    pub description: String,
    pub image_url: String,

    /// Cheapest nightly rate across the hotel's rooms, in minor currency units.
    pub nightly_price_minor: i64,

    pub rating: GuestRating,
    pub amenities: Vec<Amenity>,
}

impl Hotel {
    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }
}
