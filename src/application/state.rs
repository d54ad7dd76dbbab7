// src/application/state.rs

use std::sync::Arc;

use crate::application::view_coordinator::ViewCoordinator;
use crate::error::AppResult;
use crate::integrations::{CatalogClient, OmdbClient, OmdbConfig};
use crate::repositories::{FavoritesRepository, JsonFileFavoritesRepository};
use crate::services::{FavoritesService, SearchService};

/// Application composition root.
/// All fields are Arc-wrapped for thread-safe sharing with the
/// presentation layer; the coordinator is the only mutation surface.
pub struct AppState {
    pub search_service: Arc<SearchService>,
    pub favorites_service: Arc<FavoritesService>,
    pub view: Arc<ViewCoordinator>,
}

impl AppState {
    /// Wire the default stack: OMDb client from the environment
    /// credential, JSON file favorites store under the user data
    /// directory. A missing credential fails here, before any search.
    pub fn initialize() -> AppResult<Self> {
        let config = OmdbConfig::from_env()?;
        let client: Arc<dyn CatalogClient> = Arc::new(OmdbClient::new(config));
        let repository: Arc<dyn FavoritesRepository> =
            Arc::new(JsonFileFavoritesRepository::new()?);
        Ok(Self::with_collaborators(client, repository))
    }

    /// Wire against explicit collaborators (embedders, tests).
    pub fn with_collaborators(
        client: Arc<dyn CatalogClient>,
        repository: Arc<dyn FavoritesRepository>,
    ) -> Self {
        let search_service = Arc::new(SearchService::new(client));
        let favorites_service = Arc::new(FavoritesService::load(repository));
        let view = Arc::new(ViewCoordinator::new(
            Arc::clone(&search_service),
            Arc::clone(&favorites_service),
        ));

        Self {
            search_service,
            favorites_service,
            view,
        }
    }

    /// Issue the automatic startup search through the normal path.
    pub async fn cold_start(&self) {
        self.view.cold_start().await;
    }
}
