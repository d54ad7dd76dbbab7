// src/application/view_coordinator_tests.rs
//
// View coordination unit tests
//
// INVARIANTS TESTED:
// - returning to search mode retains the last search state and issues no call
// - displayed items follow the active mode
// - the modal only ever references an item visible in the active list

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::state::AppState;
use crate::application::view_coordinator::{ViewMode, DEFAULT_SEED_KEYWORD};
use crate::domain::{Movie, MovieSummary, SearchQuery};
use crate::error::AppResult;
use crate::integrations::CatalogClient;
use crate::repositories::JsonFileFavoritesRepository;
use crate::services::SearchStatus;

fn detail(id: &str) -> Movie {
    Movie {
        imdb_id: id.to_string(),
        title: format!("Movie {}", id),
        year: "1999".to_string(),
        poster: "N/A".to_string(),
        plot: format!("Plot of {}", id),
        director: "Someone".to_string(),
        actors: "Some Cast".to_string(),
        genre: "Action".to_string(),
        runtime: "120 min".to_string(),
        imdb_rating: "7.0".to_string(),
    }
}

struct ScriptedCatalog {
    summaries: Mutex<HashMap<String, Vec<MovieSummary>>>,
    search_calls: AtomicUsize,
}

impl ScriptedCatalog {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            summaries: Mutex::new(HashMap::new()),
            search_calls: AtomicUsize::new(0),
        })
    }

    fn script(&self, keyword: &str, ids: &[&str]) {
        let summaries = ids.iter().map(|id| detail(id).summary()).collect();
        self.summaries
            .lock()
            .unwrap()
            .insert(keyword.to_string(), summaries);
    }

    fn search_call_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogClient for ScriptedCatalog {
    async fn search(&self, keyword: &str, _year: Option<&str>) -> AppResult<Vec<MovieSummary>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .summaries
            .lock()
            .unwrap()
            .get(keyword)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_detail(&self, imdb_id: &str) -> AppResult<Movie> {
        Ok(detail(imdb_id))
    }
}

fn app_with(catalog: Arc<ScriptedCatalog>) -> (AppState, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(JsonFileFavoritesRepository::with_path(
        dir.path().join("favorites.json"),
    ));
    (AppState::with_collaborators(catalog, repo), dir)
}

#[tokio::test]
async fn cold_start_populates_the_search_list() {
    let catalog = ScriptedCatalog::new();
    catalog.script(DEFAULT_SEED_KEYWORD, &["tt0000001", "tt0000002"]);
    let (app, _dir) = app_with(catalog.clone());

    app.cold_start().await;

    let frame = app.view.frame();
    assert_eq!(frame.mode, ViewMode::Search);
    assert_eq!(frame.items.len(), 2);
    assert!(!frame.loading);
    assert_eq!(frame.error, None);
}

#[tokio::test]
async fn returning_to_search_mode_keeps_results_and_issues_no_call() {
    let catalog = ScriptedCatalog::new();
    catalog.script("Matrix", &["tt0133093", "tt0234215", "tt0242653"]);
    let (app, _dir) = app_with(catalog.clone());

    app.view.search(SearchQuery::new("Matrix", "")).await;
    assert_eq!(catalog.search_call_count(), 1);
    let before = app.view.displayed_items();

    app.view.toggle_mode();
    assert_eq!(app.view.mode(), ViewMode::Favorites);
    app.view.toggle_mode();
    assert_eq!(app.view.mode(), ViewMode::Search);

    assert_eq!(app.view.displayed_items(), before);
    assert_eq!(catalog.search_call_count(), 1);
    assert_eq!(app.search_service.state().status, SearchStatus::Success);
}

#[tokio::test]
async fn displayed_items_follow_the_active_mode() {
    let catalog = ScriptedCatalog::new();
    catalog.script("Matrix", &["tt0133093", "tt0234215"]);
    let (app, _dir) = app_with(catalog.clone());

    app.view.search(SearchQuery::new("Matrix", "")).await;
    app.view.toggle_favorite(&detail("tt0133093")).unwrap();

    app.view.set_mode(ViewMode::Favorites);
    let favorites = app.view.displayed_items();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].imdb_id, "tt0133093");

    app.view.set_mode(ViewMode::Search);
    assert_eq!(app.view.displayed_items().len(), 2);
}

#[tokio::test]
async fn double_toggle_restores_favorite_status() {
    let catalog = ScriptedCatalog::new();
    let (app, _dir) = app_with(catalog.clone());
    let movie = detail("tt0133093");

    assert!(!app.view.is_favorite("tt0133093"));
    assert!(app.view.toggle_favorite(&movie).unwrap());
    assert!(app.view.is_favorite("tt0133093"));
    assert!(!app.view.toggle_favorite(&movie).unwrap());
    assert!(!app.view.is_favorite("tt0133093"));
}

#[tokio::test]
async fn modal_only_opens_for_a_visible_item() {
    let catalog = ScriptedCatalog::new();
    catalog.script("Matrix", &["tt0133093"]);
    let (app, _dir) = app_with(catalog.clone());

    app.view.search(SearchQuery::new("Matrix", "")).await;

    app.view.open_modal(detail("tt9999999"));
    assert_eq!(app.view.frame().modal, None);

    app.view.open_modal(detail("tt0133093"));
    let modal = app.view.frame().modal.unwrap();
    assert_eq!(modal.imdb_id, "tt0133093");
}

#[tokio::test]
async fn modal_closes_on_mode_switch_when_item_is_absent() {
    let catalog = ScriptedCatalog::new();
    catalog.script("Matrix", &["tt0133093"]);
    let (app, _dir) = app_with(catalog.clone());

    app.view.search(SearchQuery::new("Matrix", "")).await;
    app.view.open_modal(detail("tt0133093"));
    assert!(app.view.modal().is_some());

    // Not a favorite, so the favorites list does not contain it
    app.view.set_mode(ViewMode::Favorites);
    assert_eq!(app.view.modal(), None);
}

#[tokio::test]
async fn modal_survives_mode_switch_when_item_is_still_visible() {
    let catalog = ScriptedCatalog::new();
    catalog.script("Matrix", &["tt0133093"]);
    let (app, _dir) = app_with(catalog.clone());

    app.view.search(SearchQuery::new("Matrix", "")).await;
    app.view.toggle_favorite(&detail("tt0133093")).unwrap();
    app.view.open_modal(detail("tt0133093"));

    app.view.set_mode(ViewMode::Favorites);
    let modal = app.view.modal().unwrap();
    assert_eq!(modal.imdb_id, "tt0133093");
}

#[tokio::test]
async fn unfavoriting_the_open_modal_item_closes_it_in_favorites_mode() {
    let catalog = ScriptedCatalog::new();
    catalog.script("Matrix", &["tt0133093"]);
    let (app, _dir) = app_with(catalog.clone());

    app.view.search(SearchQuery::new("Matrix", "")).await;
    let movie = detail("tt0133093");
    app.view.toggle_favorite(&movie).unwrap();
    app.view.set_mode(ViewMode::Favorites);
    app.view.open_modal(movie.clone());

    app.view.toggle_favorite(&movie).unwrap();
    assert_eq!(app.view.modal(), None);
}

#[tokio::test]
async fn a_new_search_prunes_a_stale_modal() {
    let catalog = ScriptedCatalog::new();
    catalog.script("Matrix", &["tt0133093"]);
    catalog.script("Other", &["tt0000042"]);
    let (app, _dir) = app_with(catalog.clone());

    app.view.search(SearchQuery::new("Matrix", "")).await;
    app.view.open_modal(detail("tt0133093"));

    app.view.search(SearchQuery::new("Other", "")).await;
    assert_eq!(app.view.modal(), None);
}

#[tokio::test]
async fn frame_reports_favorite_ids() {
    let catalog = ScriptedCatalog::new();
    catalog.script("Matrix", &["tt0133093", "tt0234215"]);
    let (app, _dir) = app_with(catalog.clone());

    app.view.search(SearchQuery::new("Matrix", "")).await;
    app.view.toggle_favorite(&detail("tt0234215")).unwrap();

    let frame = app.view.frame();
    assert!(frame.is_favorite("tt0234215"));
    assert!(!frame.is_favorite("tt0133093"));
    assert_eq!(frame.mode, ViewMode::Search);
    assert_eq!(frame.items.len(), 2);
}
