// src/application/view_coordinator.rs
//
// View Coordinator - the single owner of presentation-facing state
//
// RULES:
// - All view state lives here and changes only through these methods
// - No ambient globals; the presentation layer holds one coordinator
// - Remote failures never surface as faults, only as reported state

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::application::dto::RenderFrame;
use crate::domain::{Movie, SearchQuery};
use crate::error::AppResult;
use crate::services::{FavoritesService, SearchService};

/// Seed keyword for the automatic cold-start search, so the list is
/// non-empty before any user interaction.
pub const DEFAULT_SEED_KEYWORD: &str = "Action";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Search,
    Favorites,
}

#[derive(Debug, Clone)]
struct ViewState {
    mode: ViewMode,
    modal: Option<Movie>,
}

pub struct ViewCoordinator {
    search_service: Arc<SearchService>,
    favorites_service: Arc<FavoritesService>,
    view: Mutex<ViewState>,
}

impl ViewCoordinator {
    pub fn new(
        search_service: Arc<SearchService>,
        favorites_service: Arc<FavoritesService>,
    ) -> Self {
        Self {
            search_service,
            favorites_service,
            view: Mutex::new(ViewState {
                mode: ViewMode::Search,
                modal: None,
            }),
        }
    }

    /// The automatic startup search. Uses the normal search path; errors
    /// are reported exactly like a user-initiated search.
    pub async fn cold_start(&self) {
        self.search(SearchQuery::new(DEFAULT_SEED_KEYWORD, "")).await;
    }

    /// User search intent: switches to search mode, then drives the
    /// orchestrator.
    pub async fn search(&self, query: SearchQuery) {
        self.set_mode(ViewMode::Search);
        self.search_service.search(query).await;
        // Results may have changed under an open modal
        self.prune_modal();
    }

    pub fn mode(&self) -> ViewMode {
        self.view.lock().unwrap().mode
    }

    /// Switch view mode. Returning to search mode never re-triggers a
    /// remote search; the last search state is retained.
    ///
    /// Modal policy on switch: the modal stays open if its movie is
    /// visible in the new mode's list and is closed otherwise, so the
    /// modal never references an item outside the active list.
    pub fn set_mode(&self, mode: ViewMode) {
        {
            let mut view = self.view.lock().unwrap();
            view.mode = mode;
        }
        self.prune_modal();
    }

    pub fn toggle_mode(&self) {
        let next = match self.mode() {
            ViewMode::Search => ViewMode::Favorites,
            ViewMode::Favorites => ViewMode::Search,
        };
        self.set_mode(next);
    }

    /// The list the presentation layer renders for the active mode.
    /// Favorites carry no defined order.
    pub fn displayed_items(&self) -> Vec<Movie> {
        match self.mode() {
            ViewMode::Search => self.search_service.state().items,
            ViewMode::Favorites => self.favorites_service.items(),
        }
    }

    /// Open the detail modal. Honored only for a movie visible in the
    /// active mode's list; anything else is ignored.
    pub fn open_modal(&self, movie: Movie) {
        let visible = self
            .displayed_items()
            .iter()
            .any(|m| m.imdb_id == movie.imdb_id);
        if !visible {
            return;
        }
        self.view.lock().unwrap().modal = Some(movie);
    }

    pub fn close_modal(&self) {
        self.view.lock().unwrap().modal = None;
    }

    pub fn modal(&self) -> Option<Movie> {
        self.view.lock().unwrap().modal.clone()
    }

    /// Toggle favorite membership. In favorites mode this can remove the
    /// displayed item, so the modal is pruned afterwards.
    pub fn toggle_favorite(&self, movie: &Movie) -> AppResult<bool> {
        let now_favorite = self.favorites_service.toggle(movie)?;
        self.prune_modal();
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, imdb_id: &str) -> bool {
        self.favorites_service.is_favorite(imdb_id)
    }

    /// Per-render snapshot for the presentation layer.
    pub fn frame(&self) -> RenderFrame {
        let search_state = self.search_service.state();
        let view = self.view.lock().unwrap().clone();

        let items = match view.mode {
            ViewMode::Search => search_state.items.clone(),
            ViewMode::Favorites => self.favorites_service.items(),
        };

        RenderFrame {
            mode: view.mode,
            items,
            loading: search_state.is_loading(),
            error: search_state.error_message,
            favorite_ids: self.favorites_service.ids(),
            modal: view.modal,
        }
    }

    /// Close the modal if its movie is no longer visible in the active
    /// mode's list.
    fn prune_modal(&self) {
        let displayed = self.displayed_items();
        let mut view = self.view.lock().unwrap();
        if let Some(modal) = &view.modal {
            if !displayed.iter().any(|m| m.imdb_id == modal.imdb_id) {
                view.modal = None;
            }
        }
    }
}
