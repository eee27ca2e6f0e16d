//! ID type wrappers for type safety.

mod id_macro;
pub mod catalog;

pub use catalog::{HotelId, RoomId};
