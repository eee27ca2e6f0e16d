//! # tn-core
//!
//! Core domain models and business logic for TripNest.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod ids;
pub mod ports;
pub mod selection;

// Re-export commonly used types at the crate root
pub use catalog::{Amenity, GuestRating, Hotel, Room};
pub use ids::{HotelId, RoomId};
pub use selection::{
    ComparisonEntry, FavoriteEntry, InsertOutcome, SelectionItem, SelectionList, ToggleOutcome,
    MAX_COMPARED_ROOMS,
};
