// src/services/search_service.rs
//
// Search orchestration: coarse keyword search followed by per-item
// detail enrichment, reported as explicit loading/success/error states.
//
// RULES:
// - The public contract never fails; remote faults become error *states*
// - A superseded search never writes state (last-request-wins)
// - The enriched list preserves the provider's summary order

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::domain::{Movie, MovieSummary, SearchQuery};
use crate::error::{AppError, AppResult};
use crate::integrations::CatalogClient;

/// Detail enrichment is capped at the first results of any search to
/// bound the number of concurrent detail calls. A throughput/latency
/// tradeoff, not a correctness requirement.
pub const DETAIL_FETCH_LIMIT: usize = 12;

/// Shown for any transport-level fault; provider messages are reserved
/// for domain-level "no results" answers.
const TRANSPORT_ERROR_MESSAGE: &str = "Failed to fetch movies.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Outcome of the most recent orchestrated search.
/// Recreated on every search call; never mutated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchState {
    pub status: SearchStatus,
    pub items: Vec<Movie>,
    pub error_message: Option<String>,
    pub last_query: SearchQuery,
}

impl SearchState {
    fn idle() -> Self {
        Self {
            status: SearchStatus::Idle,
            items: Vec::new(),
            error_message: None,
            last_query: SearchQuery::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }
}

pub struct SearchService {
    client: Arc<dyn CatalogClient>,
    state: Mutex<SearchState>,
    generation: AtomicU64,
}

impl SearchService {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self {
            client,
            state: Mutex::new(SearchState::idle()),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current search state.
    pub fn state(&self) -> SearchState {
        self.state.lock().unwrap().clone()
    }

    /// Run a full search: validate, keyword search, detail fan-out.
    ///
    /// Each call takes a fresh generation token; in-flight calls for
    /// older generations are not cancelled, but their results are
    /// discarded when they settle.
    pub async fn search(&self, query: SearchQuery) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        // An all-empty query clears the list without a remote call.
        if query.is_empty() {
            self.commit(generation, |state| {
                *state = SearchState {
                    status: SearchStatus::Success,
                    items: Vec::new(),
                    error_message: None,
                    last_query: query.clone(),
                };
            });
            return;
        }

        self.commit(generation, |state| {
            *state = SearchState {
                status: SearchStatus::Loading,
                items: Vec::new(),
                error_message: None,
                last_query: query.clone(),
            };
        });

        let outcome = self.run(&query).await;

        match outcome {
            Ok(movies) => self.commit(generation, |state| {
                state.status = SearchStatus::Success;
                state.items = movies;
                state.error_message = None;
            }),
            Err(AppError::NoResults(message)) => self.commit(generation, |state| {
                state.status = SearchStatus::Error;
                state.items = Vec::new();
                state.error_message = Some(message);
            }),
            Err(e) => {
                log::warn!("search failed: {}", e);
                self.commit(generation, |state| {
                    state.status = SearchStatus::Error;
                    state.items = Vec::new();
                    state.error_message = Some(TRANSPORT_ERROR_MESSAGE.to_string());
                });
            }
        }
    }

    /// Apply a state transition unless this generation has been superseded.
    /// The generation check happens under the state lock, so a newer
    /// search that has already taken a token always wins.
    fn commit<F>(&self, generation: u64, apply: F)
    where
        F: FnOnce(&mut SearchState),
    {
        let mut state = self.state.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) != generation {
            return;
        }
        apply(&mut state);
    }

    async fn run(&self, query: &SearchQuery) -> AppResult<Vec<Movie>> {
        let summaries = self
            .client
            .search(query.keyword(), query.year_filter())
            .await?;
        self.enrich(summaries).await
    }

    /// Fetch details for the first `DETAIL_FETCH_LIMIT` summaries
    /// concurrently. All fetches must succeed before anything is
    /// exposed; the batch is all-or-nothing.
    async fn enrich(&self, summaries: Vec<MovieSummary>) -> AppResult<Vec<Movie>> {
        let mut handles = Vec::new();
        for summary in summaries.into_iter().take(DETAIL_FETCH_LIMIT) {
            let client = Arc::clone(&self.client);
            handles.push(tokio::spawn(async move {
                client.fetch_detail(&summary.imdb_id).await
            }));
        }

        // Join in spawn order: a stable zip by original index, so the
        // enriched list matches the provider's ordering regardless of
        // completion order.
        let mut movies = Vec::with_capacity(handles.len());
        for handle in handles {
            let movie = handle
                .await
                .map_err(|e| AppError::Transport(format!("detail fetch task failed: {}", e)))??;
            movies.push(movie);
        }

        Ok(movies)
    }
}
