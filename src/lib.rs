//! TripNest composition root.
//!
//! Wires the infra adapters into the application layer and exposes the
//! assembled [`App`] to delivery shells (the CLI binary, tests).

pub mod bootstrap;

pub use bootstrap::App;
pub use tn_app::AppDeps;
pub use tn_infra::AppConfig;
