//! Application state - shared across all handlers.

use std::sync::Arc;

use pulse_core::BlogService;
use pulse_infra::{InMemoryDataset, InMemoryEventBus, SeedData, SeedError};

use crate::config::AppConfig;
use crate::graphql::{BlogSchema, build_schema};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BlogService>,
    pub schema: BlogSchema,
}

impl AppState {
    /// Load the dataset, create the event bus and wire both into the schema.
    ///
    /// Each call builds a fresh dataset and bus, so states never share data.
    pub fn new(config: &AppConfig) -> Result<Self, SeedError> {
        let seed = match &config.seed_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading seed file");
                SeedData::from_file(path)?
            }
            None => SeedData::default(),
        };

        let dataset = InMemoryDataset::new(seed)?;
        let events = Arc::new(InMemoryEventBus::new());
        let service = Arc::new(BlogService::new(dataset.authors, dataset.posts, events));
        let schema = build_schema(Arc::clone(&service));

        tracing::info!("Application state initialized");

        Ok(Self { service, schema })
    }
}
