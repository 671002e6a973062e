//! Application state management

use domain_items::{ItemService, JsonFileRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub service: ItemService<JsonFileRepository>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let repository = JsonFileRepository::new(config.data_path.clone());
        Self {
            service: ItemService::new(repository),
            config,
        }
    }
}
