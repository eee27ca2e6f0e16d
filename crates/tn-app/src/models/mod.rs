//! Read models handed to consumer surfaces.
//!
//! Consumers render these and call back into the stores; they own no state.

pub mod comparison;
pub mod hotel;

pub use comparison::{ComparisonDimension, ComparisonTable};
pub use hotel::{HotelCard, HotelDetail, RoomView};
