//! Side-by-side comparison table read model.

use serde::Serialize;

use tn_core::selection::ComparisonEntry;

/// Rows of the comparison table, one per compared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonDimension {
    NightlyPrice,
    Sleeps,
    Size,
    Amenities,
}

impl ComparisonDimension {
    pub const ALL: [ComparisonDimension; 4] = [
        ComparisonDimension::NightlyPrice,
        ComparisonDimension::Sleeps,
        ComparisonDimension::Size,
        ComparisonDimension::Amenities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonDimension::NightlyPrice => "Price per night",
            ComparisonDimension::Sleeps => "Sleeps",
            ComparisonDimension::Size => "Room size",
            ComparisonDimension::Amenities => "Amenities",
        }
    }

    /// Cell value for one compared room.
    fn cell(&self, entry: &ComparisonEntry) -> String {
        let snapshot = &entry.snapshot;
        match self {
            ComparisonDimension::NightlyPrice => {
                format!(
                    "{}.{:02}",
                    snapshot.nightly_price_minor / 100,
                    snapshot.nightly_price_minor % 100
                )
            }
            ComparisonDimension::Sleeps => snapshot.sleeps.to_string(),
            ComparisonDimension::Size => format!("{} m²", snapshot.size_sqm),
            ComparisonDimension::Amenities => {
                if snapshot.amenities.is_empty() {
                    "—".to_string()
                } else {
                    snapshot
                        .amenities
                        .iter()
                        .map(|amenity| amenity.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub cells: Vec<String>,
}

/// The comparison modal's data: columns are compared rooms in insertion
/// order, rows are dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn build(entries: &[ComparisonEntry]) -> Self {
        let columns = entries
            .iter()
            .map(|entry| format!("{} — {}", entry.snapshot.hotel_name, entry.snapshot.room_name))
            .collect();

        let rows = ComparisonDimension::ALL
            .iter()
            .map(|dimension| ComparisonRow {
                label: dimension.label(),
                cells: entries.iter().map(|entry| dimension.cell(entry)).collect(),
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tn_core::catalog::{Amenity, GuestRating, Hotel, Room};
    use tn_core::ids::{HotelId, RoomId};

    fn entry() -> ComparisonEntry {
        let hotel = Hotel {
            hotel_id: HotelId::from_str("h1"),
            name: "Harborview Palace".to_string(),
            city: "Lisbon".to_string(),
            description: String::new(),
            image_url: String::new(),
            nightly_price_minor: 11_900,
            rating: GuestRating::from_tenths(47),
            amenities: vec![],
        };
        let room = Room {
            room_id: RoomId::from_str("r1"),
            hotel_id: hotel.hotel_id.clone(),
            name: "Deluxe River View".to_string(),
            image_url: String::new(),
            nightly_price_minor: 18_905,
            sleeps: 2,
            size_sqm: 28,
            amenities: vec![Amenity::SeaView, Amenity::Wifi],
        };
        ComparisonEntry::new(&hotel, &room, 0)
    }

    #[test]
    fn table_has_one_row_per_dimension_and_one_cell_per_entry() {
        let entries = vec![entry(), entry()];
        let table = ComparisonTable::build(&entries);

        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.rows.len(), ComparisonDimension::ALL.len());
        for row in &table.rows {
            assert_eq!(row.cells.len(), 2);
        }
    }

    #[test]
    fn cells_format_price_and_amenities() {
        let table = ComparisonTable::build(&[entry()]);

        assert_eq!(table.rows[0].cells[0], "189.05");
        assert_eq!(table.rows[3].cells[0], "Sea view, Free Wi-Fi");
    }

    #[test]
    fn empty_tray_builds_empty_table() {
        let table = ComparisonTable::build(&[]);
        assert!(table.is_empty());
        assert!(table.rows.iter().all(|row| row.cells.is_empty()));
    }
}
