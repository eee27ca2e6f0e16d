//! Bounded, duplicate-free, order-preserving selection collections.
//!
//! Two collections in the product are instances of the same shape: the room
//! comparison tray (hard cap of four, keyed by hotel + room) and the favorites
//! list (unbounded, keyed by hotel). [`SelectionList`] is the shared in-memory
//! state machine; persistence lives behind
//! [`crate::ports::SelectionStorePort`].

pub mod entry;
pub mod item;
pub mod list;

pub use entry::{ComparisonEntry, FavoriteEntry, HotelSnapshot, RoomSnapshot};
pub use item::SelectionItem;
pub use list::{InsertOutcome, SelectionList, ToggleOutcome};

/// Hard cap on the comparison tray. Enforced by the list, surfaced to the UI so
/// the "add to compare" affordance can disable itself before the cap is hit.
pub const MAX_COMPARED_ROOMS: usize = 4;
