// src/services/favorites_service.rs
use std::sync::{Arc, Mutex};

use crate::domain::{validate_movie, Movie};
use crate::error::AppResult;
use crate::repositories::{FavoritesMap, FavoritesRepository};

/// In-memory favorites map backed by a durable store.
///
/// Loaded once at startup and mutated in place for the process lifetime;
/// every mutation is flushed to the repository before `toggle` returns.
/// A flush failure is non-fatal: the in-memory toggle stands and the
/// fault goes to the log (the UI stays responsive, durability degrades).
pub struct FavoritesService {
    repository: Arc<dyn FavoritesRepository>,
    favorites: Mutex<FavoritesMap>,
}

impl FavoritesService {
    /// Load the stored map. A missing store yields an empty map; an
    /// unreadable one degrades to empty with a logged warning.
    pub fn load(repository: Arc<dyn FavoritesRepository>) -> Self {
        let favorites = match repository.load() {
            Ok(map) => map,
            Err(e) => {
                log::warn!("Failed to load favorites store, starting empty: {}", e);
                FavoritesMap::new()
            }
        };

        Self {
            repository,
            favorites: Mutex::new(favorites),
        }
    }

    /// Toggle membership for `movie` and flush.
    /// Returns whether the movie is a favorite after the call.
    pub fn toggle(&self, movie: &Movie) -> AppResult<bool> {
        validate_movie(movie)?;

        let (snapshot, now_favorite) = {
            let mut favorites = self.favorites.lock().unwrap();
            let now_favorite = if favorites.remove(&movie.imdb_id).is_some() {
                false
            } else {
                favorites.insert(movie.imdb_id.clone(), movie.clone());
                true
            };
            (favorites.clone(), now_favorite)
        };

        if let Err(e) = self.repository.save(&snapshot) {
            log::warn!(
                "Failed to persist favorites for {}; in-memory state kept: {}",
                movie.imdb_id,
                e
            );
        }

        Ok(now_favorite)
    }

    /// Pure membership lookup, no side effects.
    pub fn is_favorite(&self, imdb_id: &str) -> bool {
        self.favorites.lock().unwrap().contains_key(imdb_id)
    }

    /// Snapshot of the favorite records. No defined order.
    pub fn items(&self) -> Vec<Movie> {
        self.favorites.lock().unwrap().values().cloned().collect()
    }

    /// Snapshot of the favorite ids. No defined order.
    pub fn ids(&self) -> Vec<String> {
        self.favorites.lock().unwrap().keys().cloned().collect()
    }
}
