use serde::{Deserialize, Serialize};

/// Closed set of amenities a hotel or room can advertise.
///
/// Display mapping is an exhaustive match, not a string-keyed lookup, so adding
/// a variant forces every consumer through the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Wifi,
    Pool,
    Spa,
    Gym,
    Parking,
    Restaurant,
    Bar,
    RoomService,
    AirConditioning,
    PetFriendly,
    Breakfast,
    SeaView,
}

impl Amenity {
    /// Human-readable label for list and table surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Wifi => "Free Wi-Fi",
            Amenity::Pool => "Swimming pool",
            Amenity::Spa => "Spa",
            Amenity::Gym => "Fitness center",
            Amenity::Parking => "Parking",
            Amenity::Restaurant => "Restaurant",
            Amenity::Bar => "Bar",
            Amenity::RoomService => "Room service",
            Amenity::AirConditioning => "Air conditioning",
            Amenity::PetFriendly => "Pet friendly",
            Amenity::Breakfast => "Breakfast included",
            Amenity::SeaView => "Sea view",
        }
    }

    /// Compact glyph used by text surfaces.
    pub fn glyph(&self) -> &'static str {
        match self {
            Amenity::Wifi => "📶",
            Amenity::Pool => "🏊",
            Amenity::Spa => "💆",
            Amenity::Gym => "🏋",
            Amenity::Parking => "🅿",
            Amenity::Restaurant => "🍽",
            Amenity::Bar => "🍸",
            Amenity::RoomService => "🛎",
            Amenity::AirConditioning => "❄",
            Amenity::PetFriendly => "🐾",
            Amenity::Breakfast => "☕",
            Amenity::SeaView => "🌊",
        }
    }
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
