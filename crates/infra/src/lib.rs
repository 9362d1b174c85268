//! Infrastructure layer: catalog storage, seed fixtures, configuration.

pub mod config;
pub mod read_model;
pub mod seed;

pub use config::{AppConfig, ConfigError};
pub use read_model::InMemoryCatalogStore;
pub use seed::{SeedError, load_embedded_seed, load_seed_file, parse_seed};
