pub mod catalog;
pub mod config;
pub mod fs;
pub mod time;

pub use catalog::SeedCatalog;
pub use config::AppConfig;
pub use fs::JsonCollectionStore;
pub use time::SystemClock;
