//! TripNest application layer.
//!
//! Use cases and the in-memory selection store services. Everything here
//! talks to the outside world through tn-core ports.

pub mod deps;
pub mod models;
pub mod services;
pub mod usecases;

pub use deps::AppDeps;
pub use services::selection::{ComparisonStore, FavoritesStore, SelectionService};
