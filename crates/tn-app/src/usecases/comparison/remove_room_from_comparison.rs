use std::sync::Arc;

use tracing::info;

use tn_core::ids::{HotelId, RoomId};

use crate::services::selection::ComparisonStore;

/// Take a room out of the comparison tray. Removing a room that is not in
/// the tray is a no-op.
pub struct RemoveRoomFromComparison {
    comparison: Arc<ComparisonStore>,
}

impl RemoveRoomFromComparison {
    pub fn new(comparison: Arc<ComparisonStore>) -> Self {
        Self { comparison }
    }

    /// Returns whether an entry was actually removed.
    pub async fn execute(&self, hotel_id: &HotelId, room_id: &RoomId) -> bool {
        let removed = self
            .comparison
            .remove(&(hotel_id.clone(), room_id.clone()))
            .await;
        if removed {
            info!(hotel = %hotel_id, room = %room_id, "Removed room from comparison");
        }
        removed
    }
}
