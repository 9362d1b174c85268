use std::sync::Arc;

use thiserror::Error;

use shopfront_catalog::CatalogStore;
use shopfront_infra::{AppConfig, SeedError, load_embedded_seed, load_seed_file};

use crate::render::Templates;

#[derive(Debug, Error)]
pub enum ServicesError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("failed to load templates: {0}")]
    Templates(#[from] minijinja::Error),
}

/// Shared, read-only collaborators handed to every handler.
pub struct AppServices {
    pub store: Arc<dyn CatalogStore>,
    pub templates: Templates,
}

impl AppServices {
    pub fn new(store: Arc<dyn CatalogStore>) -> Result<Self, ServicesError> {
        Ok(Self {
            store,
            templates: Templates::new()?,
        })
    }
}

pub fn build_services(config: &AppConfig) -> Result<AppServices, ServicesError> {
    let store = match &config.seed_path {
        Some(path) => load_seed_file(path)?,
        None => {
            tracing::info!("SHOPFRONT_SEED_PATH not set; serving the embedded demo catalog");
            load_embedded_seed()?
        }
    };
    AppServices::new(Arc::new(store))
}
