// src/lib.rs
// MovieHub - movie catalog search client with local favorites
//
// Architecture:
// - Domain-centric: catalog records and query rules live in `domain`
// - Explicit state: search results, favorites, and view mode are owned
//   by a single coordinator and change only through its methods
// - Pluggable edges: the remote catalog and the favorites store are
//   traits; the presentation layer is an external collaborator

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{validate_movie, DomainError, Movie, MovieSummary, SearchQuery};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{CatalogClient, OmdbClient, OmdbConfig};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{FavoritesMap, FavoritesRepository, JsonFileFavoritesRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{FavoritesService, SearchService, SearchState, SearchStatus, DETAIL_FETCH_LIMIT};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorSeverity, RenderFrame, ViewCoordinator, ViewMode};
