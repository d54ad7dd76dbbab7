// src/integrations/catalog.rs

use crate::domain::{Movie, MovieSummary};
use crate::error::AppResult;
use async_trait::async_trait;

/// Remote movie catalog: a two-call provider shape.
///
/// The core is written against this trait, not against any concrete
/// provider. Implementations perform no caching and no retry; each call
/// is a single round trip.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Keyword search, optionally narrowed to a release year.
    ///
    /// A provider-level "no results" answer is `AppError::NoResults`
    /// carrying the provider message; transport and decode failures are
    /// `AppError::Transport`.
    async fn search(&self, keyword: &str, year: Option<&str>) -> AppResult<Vec<MovieSummary>>;

    /// Single-item detail lookup for an id returned by a prior `search`.
    async fn fetch_detail(&self, imdb_id: &str) -> AppResult<Movie>;
}
