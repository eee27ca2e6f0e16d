//! Room comparison tray operations.

pub mod add_room_to_comparison;
pub mod build_comparison_table;
pub mod clear_comparison;
pub mod remove_room_from_comparison;

pub use add_room_to_comparison::AddRoomToComparison;
pub use build_comparison_table::BuildComparisonTable;
pub use clear_comparison::ClearComparison;
pub use remove_room_from_comparison::RemoveRoomFromComparison;
