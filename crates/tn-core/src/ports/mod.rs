//! Ports (trait interfaces) the application layer depends on.
//!
//! Adapters live in tn-infra; tests substitute hand-rolled doubles.

pub mod catalog;
pub mod clock;
pub mod selection_store;

pub use catalog::CatalogPort;
pub use clock::ClockPort;
pub use selection_store::SelectionStorePort;
