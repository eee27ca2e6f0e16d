pub mod selection;

pub use selection::{ComparisonStore, FavoritesStore, SelectionService};
