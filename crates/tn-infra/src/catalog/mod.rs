pub mod seed;

pub use seed::SeedCatalog;
