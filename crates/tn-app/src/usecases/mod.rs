//! Business logic use cases.
//!
//! One struct per user-visible operation. Dependencies come in as `Arc<dyn
//! Port>` so every use case can be exercised against test doubles.

pub mod comparison;
pub mod favorites;
pub mod get_hotel_detail;
pub mod search_hotels;

pub use get_hotel_detail::GetHotelDetail;
pub use search_hotels::{SearchHotels, SearchQuery, SortBy};
