use serde::{Deserialize, Serialize};

/// Minimal catalog record returned by a keyword search.
/// Exists only between the search phase and the detail enrichment phase;
/// nothing above the catalog client layer ever renders a summary directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Provider-assigned immutable identifier
    pub imdb_id: String,

    pub title: String,

    /// Release year as the provider reports it (may be a range for series)
    pub year: String,

    /// Poster image URL, or the provider's "N/A" placeholder
    pub poster: String,
}

/// Enriched catalog record fetched per-item after a search.
/// This is the only movie shape exposed outside the catalog client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Provider-assigned immutable identifier
    pub imdb_id: String,

    pub title: String,

    pub year: String,

    pub poster: String,

    /// Short-form plot synopsis
    pub plot: String,

    pub director: String,

    /// Comma-separated principal cast, as the provider formats it
    pub actors: String,

    pub genre: String,

    pub runtime: String,

    pub imdb_rating: String,
}

impl Movie {
    /// Summary view of this record, for callers that only need the
    /// search-phase fields.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id.clone(),
            title: self.title.clone(),
            year: self.year.clone(),
            poster: self.poster.clone(),
        }
    }
}
