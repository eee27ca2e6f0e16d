use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use tn_core::catalog::CatalogError;
use tn_core::ids::{HotelId, RoomId};
use tn_core::ports::{CatalogPort, ClockPort};
use tn_core::selection::{ComparisonEntry, InsertOutcome};

use crate::services::selection::ComparisonStore;

/// Put a room into the comparison tray.
///
/// Resolves the room from the catalog and captures its display snapshot at
/// this moment. Duplicate and over-capacity adds are silent no-ops at the
/// store level; the outcome is returned so the surface can explain itself.
/// Surfaces are expected to disable the control once the tray is full.
pub struct AddRoomToComparison {
    catalog: Arc<dyn CatalogPort>,
    comparison: Arc<ComparisonStore>,
    clock: Arc<dyn ClockPort>,
}

impl AddRoomToComparison {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        comparison: Arc<ComparisonStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            catalog,
            comparison,
            clock,
        }
    }

    pub async fn execute(&self, hotel_id: &HotelId, room_id: &RoomId) -> Result<InsertOutcome> {
        let hotel = self
            .catalog
            .get_hotel(hotel_id)
            .await?
            .ok_or_else(|| CatalogError::HotelNotFound(hotel_id.clone()))?;

        let room = self
            .catalog
            .get_room(hotel_id, room_id)
            .await?
            .ok_or_else(|| CatalogError::RoomNotFound {
                hotel_id: hotel_id.clone(),
                room_id: room_id.clone(),
            })?;

        let entry = ComparisonEntry::new(&hotel, &room, self.clock.now_ms());
        let outcome = self.comparison.add(entry).await;

        info!(
            hotel = %hotel_id,
            room = %room_id,
            outcome = ?outcome,
            "Add room to comparison"
        );
        Ok(outcome)
    }
}
