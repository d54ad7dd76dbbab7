// src/integrations/omdb/client.rs
//
// OMDb API Integration
//
// ARCHITECTURE:
// - HTTP client for the OMDb movie metadata service
// - Maps external payloads → domain records (NO domain mutation)
// - Used by SearchService through the CatalogClient trait
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never creates application state; returns records that services own
// - Handles all external API concerns (credentials, wire shapes, timeouts)

use crate::domain::{Movie, MovieSummary};
use crate::error::{AppError, AppResult};
use crate::integrations::catalog::CatalogClient;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
const API_KEY_ENV: &str = "OMDB_API_KEY";
const NO_RESULTS_FALLBACK: &str = "No results found.";

/// OMDb connection settings
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub api_key: String,
    pub base_url: String,
}

impl OmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read the credential from the environment.
    /// A missing or blank key is fatal to any search.
    pub fn from_env() -> AppResult<Self> {
        match env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AppError::Configuration(format!(
                "{} is not set; the catalog service requires an API key",
                API_KEY_ENV
            ))),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Search response envelope
///
/// OMDb signals success in-band: `Response` is the string "True" or
/// "False", and only one of `Search` / `Error` is populated.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search")]
    search: Option<Vec<SummaryData>>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryData {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: Option<String>,
}

/// Detail response envelope (flat record plus the same in-band flag)
#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "imdbID", default)]
    imdb_id: Option<String>,
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Year", default)]
    year: Option<String>,
    #[serde(rename = "Poster", default)]
    poster: Option<String>,
    #[serde(rename = "Plot", default)]
    plot: Option<String>,
    #[serde(rename = "Director", default)]
    director: Option<String>,
    #[serde(rename = "Actors", default)]
    actors: Option<String>,
    #[serde(rename = "Genre", default)]
    genre: Option<String>,
    #[serde(rename = "Runtime", default)]
    runtime: Option<String>,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: Option<String>,
}

/// OMDb API Client
pub struct OmdbClient {
    config: OmdbConfig,
    http_client: Client,
}

impl OmdbClient {
    /// Create a new OMDb client.
    ///
    /// Every request carries a 30-second timeout so a hung provider
    /// cannot leave a search loading indefinitely.
    pub fn new(config: OmdbConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    async fn get_json<T>(&self, params: &[(&str, &str)]) -> AppResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&[("apikey", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("OMDb request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Transport(format!(
                "OMDb returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to parse OMDb response: {}", e)))
    }

    // ========================================================================
    // INTERNAL: Payload decoding
    // ========================================================================

    fn decode_search(envelope: SearchEnvelope) -> AppResult<Vec<MovieSummary>> {
        if envelope.response != "True" {
            let message = envelope
                .error
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| NO_RESULTS_FALLBACK.to_string());
            return Err(AppError::NoResults(message));
        }

        let summaries = envelope
            .search
            .unwrap_or_default()
            .into_iter()
            .map(Self::map_summary)
            .collect();

        Ok(summaries)
    }

    fn decode_detail(envelope: DetailEnvelope) -> AppResult<Movie> {
        if envelope.response != "True" {
            let message = envelope
                .error
                .unwrap_or_else(|| "detail lookup failed".to_string());
            return Err(AppError::Transport(format!("OMDb detail error: {}", message)));
        }

        Ok(Movie {
            imdb_id: envelope.imdb_id.unwrap_or_default(),
            title: envelope.title.unwrap_or_default(),
            year: envelope.year.unwrap_or_default(),
            poster: envelope.poster.unwrap_or_else(|| "N/A".to_string()),
            plot: envelope.plot.unwrap_or_else(|| "N/A".to_string()),
            director: envelope.director.unwrap_or_else(|| "N/A".to_string()),
            actors: envelope.actors.unwrap_or_else(|| "N/A".to_string()),
            genre: envelope.genre.unwrap_or_else(|| "N/A".to_string()),
            runtime: envelope.runtime.unwrap_or_else(|| "N/A".to_string()),
            imdb_rating: envelope.imdb_rating.unwrap_or_else(|| "N/A".to_string()),
        })
    }

    fn map_summary(data: SummaryData) -> MovieSummary {
        MovieSummary {
            imdb_id: data.imdb_id,
            title: data.title,
            year: data.year,
            poster: data.poster.unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

#[async_trait]
impl CatalogClient for OmdbClient {
    async fn search(&self, keyword: &str, year: Option<&str>) -> AppResult<Vec<MovieSummary>> {
        let mut params = vec![("s", keyword), ("type", "movie")];
        if let Some(year) = year {
            params.push(("y", year));
        }

        let envelope: SearchEnvelope = self.get_json(&params).await?;
        Self::decode_search(envelope)
    }

    async fn fetch_detail(&self, imdb_id: &str) -> AppResult<Movie> {
        let params = [("i", imdb_id), ("plot", "short")];

        let envelope: DetailEnvelope = self.get_json(&params).await?;
        Self::decode_detail(envelope)
    }
}
