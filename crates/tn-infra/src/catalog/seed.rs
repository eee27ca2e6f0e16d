//! Seeded in-memory hotel catalog.
//!
//! The product ships with mocked listings; this adapter is that data behind
//! [`CatalogPort`]. Ids are fixed strings so persisted selections stay valid
//! across runs.

use async_trait::async_trait;

use tn_core::catalog::{Amenity, GuestRating, Hotel, Room};
use tn_core::ids::{HotelId, RoomId};
use tn_core::ports::CatalogPort;

pub struct SeedCatalog {
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

struct RoomSeed {
    id: &'static str,
    name: &'static str,
    price_minor: i64,
    sleeps: u8,
    size_sqm: u16,
    amenities: &'static [Amenity],
}

struct HotelSeed {
    id: &'static str,
    name: &'static str,
    city: &'static str,
    description: &'static str,
    rating_tenths: u8,
    amenities: &'static [Amenity],
    rooms: &'static [RoomSeed],
}

use Amenity::*;

const SEED: &[HotelSeed] = &[
    HotelSeed {
        id: "harborview-lisbon",
        name: "Harborview Palace",
        city: "Lisbon",
        description: "Riverside grande dame a short walk from Alfama.",
        rating_tenths: 47,
        amenities: &[Wifi, Pool, Spa, Restaurant, Bar, SeaView],
        rooms: &[
            RoomSeed {
                id: "standard-queen",
                name: "Standard Queen",
                price_minor: 11_900,
                sleeps: 2,
                size_sqm: 22,
                amenities: &[Wifi, AirConditioning],
            },
            RoomSeed {
                id: "deluxe-river",
                name: "Deluxe River View",
                price_minor: 18_900,
                sleeps: 2,
                size_sqm: 28,
                amenities: &[Wifi, AirConditioning, SeaView, RoomService],
            },
            RoomSeed {
                id: "family-suite",
                name: "Family Suite",
                price_minor: 27_500,
                sleeps: 4,
                size_sqm: 46,
                amenities: &[Wifi, AirConditioning, RoomService],
            },
        ],
    },
    HotelSeed {
        id: "atlas-garden-porto",
        name: "Atlas Garden Hotel",
        city: "Porto",
        description: "Quiet courtyard hotel in the art district.",
        rating_tenths: 43,
        amenities: &[Wifi, Breakfast, Bar, PetFriendly],
        rooms: &[
            RoomSeed {
                id: "cosy-double",
                name: "Cosy Double",
                price_minor: 8_900,
                sleeps: 2,
                size_sqm: 18,
                amenities: &[Wifi],
            },
            RoomSeed {
                id: "garden-twin",
                name: "Garden Twin",
                price_minor: 10_400,
                sleeps: 2,
                size_sqm: 21,
                amenities: &[Wifi, Breakfast],
            },
        ],
    },
    HotelSeed {
        id: "azure-bay-faro",
        name: "Azure Bay Resort",
        city: "Faro",
        description: "Cliff-top resort above the lagoon beaches.",
        rating_tenths: 49,
        amenities: &[Wifi, Pool, Spa, Gym, Restaurant, Bar, SeaView, Parking],
        rooms: &[
            RoomSeed {
                id: "lagoon-double",
                name: "Lagoon Double",
                price_minor: 21_900,
                sleeps: 2,
                size_sqm: 30,
                amenities: &[Wifi, AirConditioning, SeaView],
            },
            RoomSeed {
                id: "panorama-suite",
                name: "Panorama Suite",
                price_minor: 39_900,
                sleeps: 3,
                size_sqm: 58,
                amenities: &[Wifi, AirConditioning, SeaView, RoomService, Bar],
            },
            RoomSeed {
                id: "family-villa",
                name: "Family Villa",
                price_minor: 54_000,
                sleeps: 6,
                size_sqm: 92,
                amenities: &[Wifi, AirConditioning, Pool, Parking],
            },
        ],
    },
    HotelSeed {
        id: "old-mill-coimbra",
        name: "Old Mill Boutique",
        city: "Coimbra",
        description: "Converted watermill on the Mondego.",
        rating_tenths: 41,
        amenities: &[Wifi, Breakfast, Parking, Restaurant],
        rooms: &[
            RoomSeed {
                id: "mill-double",
                name: "Mill Double",
                price_minor: 7_600,
                sleeps: 2,
                size_sqm: 19,
                amenities: &[Wifi, Breakfast],
            },
            RoomSeed {
                id: "loft-suite",
                name: "Loft Suite",
                price_minor: 12_800,
                sleeps: 3,
                size_sqm: 34,
                amenities: &[Wifi, Breakfast, AirConditioning],
            },
        ],
    },
    HotelSeed {
        id: "citylight-madrid",
        name: "Citylight Madrid",
        city: "Madrid",
        description: "Glass tower over Gran Vía.",
        rating_tenths: 44,
        amenities: &[Wifi, Gym, Bar, RoomService, AirConditioning],
        rooms: &[
            RoomSeed {
                id: "urban-queen",
                name: "Urban Queen",
                price_minor: 13_400,
                sleeps: 2,
                size_sqm: 24,
                amenities: &[Wifi, AirConditioning],
            },
            RoomSeed {
                id: "skyline-king",
                name: "Skyline King",
                price_minor: 19_900,
                sleeps: 2,
                size_sqm: 31,
                amenities: &[Wifi, AirConditioning, RoomService],
            },
            RoomSeed {
                id: "corner-suite",
                name: "Corner Suite",
                price_minor: 31_000,
                sleeps: 4,
                size_sqm: 52,
                amenities: &[Wifi, AirConditioning, RoomService, Bar],
            },
        ],
    },
    HotelSeed {
        id: "sierra-lodge-granada",
        name: "Sierra Lodge",
        city: "Granada",
        description: "Mountain lodge facing the Alhambra.",
        rating_tenths: 45,
        amenities: &[Wifi, Breakfast, Spa, Parking, PetFriendly],
        rooms: &[
            RoomSeed {
                id: "alpine-twin",
                name: "Alpine Twin",
                price_minor: 9_800,
                sleeps: 2,
                size_sqm: 20,
                amenities: &[Wifi, Breakfast],
            },
            RoomSeed {
                id: "alhambra-view",
                name: "Alhambra View Double",
                price_minor: 15_700,
                sleeps: 2,
                size_sqm: 26,
                amenities: &[Wifi, Breakfast, AirConditioning],
            },
        ],
    },
    HotelSeed {
        id: "canal-house-amsterdam",
        name: "Canal House 1712",
        city: "Amsterdam",
        description: "Seventeenth-century townhouse on the Keizersgracht.",
        rating_tenths: 46,
        amenities: &[Wifi, Breakfast, Bar],
        rooms: &[
            RoomSeed {
                id: "canal-double",
                name: "Canal Double",
                price_minor: 17_300,
                sleeps: 2,
                size_sqm: 23,
                amenities: &[Wifi, Breakfast],
            },
            RoomSeed {
                id: "attic-suite",
                name: "Attic Suite",
                price_minor: 24_600,
                sleeps: 2,
                size_sqm: 35,
                amenities: &[Wifi, Breakfast, AirConditioning],
            },
        ],
    },
    HotelSeed {
        id: "palm-marina-dubai",
        name: "Palm Marina Towers",
        city: "Dubai",
        description: "Twin towers on the marina promenade.",
        rating_tenths: 48,
        amenities: &[Wifi, Pool, Spa, Gym, Restaurant, Bar, RoomService, Parking, SeaView],
        rooms: &[
            RoomSeed {
                id: "marina-king",
                name: "Marina King",
                price_minor: 28_700,
                sleeps: 2,
                size_sqm: 38,
                amenities: &[Wifi, AirConditioning, SeaView, RoomService],
            },
            RoomSeed {
                id: "palm-suite",
                name: "Palm Suite",
                price_minor: 46_500,
                sleeps: 3,
                size_sqm: 64,
                amenities: &[Wifi, AirConditioning, SeaView, RoomService, Bar],
            },
            RoomSeed {
                id: "royal-penthouse",
                name: "Royal Penthouse",
                price_minor: 120_000,
                sleeps: 6,
                size_sqm: 180,
                amenities: &[Wifi, AirConditioning, SeaView, RoomService, Pool],
            },
        ],
    },
];

impl SeedCatalog {
    pub fn new() -> Self {
        let mut hotels = Vec::with_capacity(SEED.len());
        let mut rooms = Vec::new();

        for seed in SEED {
            let hotel_id = HotelId::from_str(seed.id);
            let cheapest = seed
                .rooms
                .iter()
                .map(|room| room.price_minor)
                .min()
                .unwrap_or(0);

            hotels.push(Hotel {
                hotel_id: hotel_id.clone(),
                name: seed.name.to_string(),
                city: seed.city.to_string(),
                description: seed.description.to_string(),
                image_url: format!("https://images.tripnest.example/hotels/{}.jpg", seed.id),
                nightly_price_minor: cheapest,
                rating: GuestRating::from_tenths(seed.rating_tenths),
                amenities: seed.amenities.to_vec(),
            });

            for room in seed.rooms {
                rooms.push(Room {
                    room_id: RoomId::from_str(room.id),
                    hotel_id: hotel_id.clone(),
                    name: room.name.to_string(),
                    image_url: format!(
                        "https://images.tripnest.example/rooms/{}/{}.jpg",
                        seed.id, room.id
                    ),
                    nightly_price_minor: room.price_minor,
                    sleeps: room.sleeps,
                    size_sqm: room.size_sqm,
                    amenities: room.amenities.to_vec(),
                });
            }
        }

        Self { hotels, rooms }
    }
}

#[async_trait]
impl CatalogPort for SeedCatalog {
    async fn list_hotels(&self) -> anyhow::Result<Vec<Hotel>> {
        Ok(self.hotels.clone())
    }

    async fn get_hotel(&self, hotel_id: &HotelId) -> anyhow::Result<Option<Hotel>> {
        Ok(self
            .hotels
            .iter()
            .find(|hotel| hotel.hotel_id == *hotel_id)
            .cloned())
    }

    async fn rooms_for_hotel(&self, hotel_id: &HotelId) -> anyhow::Result<Vec<Room>> {
        Ok(self
            .rooms
            .iter()
            .filter(|room| room.hotel_id == *hotel_id)
            .cloned()
            .collect())
    }

    async fn get_room(
        &self,
        hotel_id: &HotelId,
        room_id: &RoomId,
    ) -> anyhow::Result<Option<Room>> {
        Ok(self
            .rooms
            .iter()
            .find(|room| room.hotel_id == *hotel_id && room.room_id == *room_id)
            .cloned())
    }
}
