// src/services/favorites_service_tests.rs
//
// Favorites service unit tests
//
// INVARIANTS TESTED:
// - double toggle restores membership and the persisted store bytes
// - every toggle is durable before it returns
// - a failed flush keeps the in-memory toggle (optimistic, logged)

use std::fs;
use std::sync::Arc;

use crate::domain::Movie;
use crate::error::AppError;
use crate::repositories::favorites_repository::MockFavoritesRepository;
use crate::repositories::{FavoritesMap, JsonFileFavoritesRepository};
use crate::services::FavoritesService;

fn movie(id: &str, title: &str) -> Movie {
    Movie {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: "1999".to_string(),
        poster: "N/A".to_string(),
        plot: "N/A".to_string(),
        director: "N/A".to_string(),
        actors: "N/A".to_string(),
        genre: "N/A".to_string(),
        runtime: "N/A".to_string(),
        imdb_rating: "N/A".to_string(),
    }
}

#[test]
fn missing_store_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(JsonFileFavoritesRepository::with_path(
        dir.path().join("favorites.json"),
    ));

    let service = FavoritesService::load(repo);

    assert!(service.items().is_empty());
    assert!(!service.is_favorite("tt0133093"));
}

#[test]
fn toggle_is_durable_before_returning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.json");
    let service = FavoritesService::load(Arc::new(JsonFileFavoritesRepository::with_path(
        path.clone(),
    )));

    let now_favorite = service.toggle(&movie("tt0133093", "The Matrix")).unwrap();
    assert!(now_favorite);

    // A completely fresh load must already see the mutation
    let reloaded = FavoritesService::load(Arc::new(JsonFileFavoritesRepository::with_path(path)));
    assert!(reloaded.is_favorite("tt0133093"));
}

#[test]
fn double_toggle_restores_membership_and_store_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.json");
    let service = FavoritesService::load(Arc::new(JsonFileFavoritesRepository::with_path(
        path.clone(),
    )));

    service.toggle(&movie("tt0133093", "The Matrix")).unwrap();
    let baseline = fs::read(&path).unwrap();

    let reloaded = FavoritesService::load(Arc::new(JsonFileFavoritesRepository::with_path(
        path.clone(),
    )));
    let toggled = movie("tt0234215", "The Matrix Reloaded");
    assert!(reloaded.toggle(&toggled).unwrap());
    assert!(!reloaded.toggle(&toggled).unwrap());

    assert!(!reloaded.is_favorite("tt0234215"));
    assert!(reloaded.is_favorite("tt0133093"));
    assert_eq!(fs::read(&path).unwrap(), baseline);
}

#[test]
fn unreadable_store_degrades_to_empty() {
    let mut repo = MockFavoritesRepository::new();
    repo.expect_load()
        .return_once(|| Err(AppError::Persistence("store unreadable".to_string())));

    let service = FavoritesService::load(Arc::new(repo));

    assert!(service.items().is_empty());
}

#[test]
fn failed_flush_keeps_the_in_memory_toggle() {
    let mut repo = MockFavoritesRepository::new();
    repo.expect_load().return_once(|| Ok(FavoritesMap::new()));
    repo.expect_save()
        .returning(|_| Err(AppError::Persistence("disk full".to_string())));

    let service = FavoritesService::load(Arc::new(repo));

    // Optimistic: the toggle stands even though the flush failed
    assert!(service.toggle(&movie("tt0133093", "The Matrix")).unwrap());
    assert!(service.is_favorite("tt0133093"));
}

#[test]
fn invalid_movie_is_rejected_without_a_save() {
    let mut repo = MockFavoritesRepository::new();
    repo.expect_load().return_once(|| Ok(FavoritesMap::new()));
    repo.expect_save().times(0);

    let service = FavoritesService::load(Arc::new(repo));

    let result = service.toggle(&movie("", "Nameless"));
    assert!(matches!(result, Err(AppError::Domain(_))));
    assert!(service.items().is_empty());
}
