// src/repositories/favorites_repository.rs
//
// Favorites persistence - durable key-value store keyed by movie id

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::domain::Movie;
use crate::error::{AppError, AppResult};

/// User-curated durable subset of catalog items, keyed by provider id.
/// Order is not meaningful.
pub type FavoritesMap = HashMap<String, Movie>;

#[cfg_attr(test, mockall::automock)]
pub trait FavoritesRepository: Send + Sync {
    /// Read the whole map. An absent store yields an empty map, not an error.
    fn load(&self) -> AppResult<FavoritesMap>;

    /// Replace the whole map. Must be durable before returning, so a
    /// subsequent `load` reflects the write.
    fn save(&self, favorites: &FavoritesMap) -> AppResult<()>;
}

/// File-backed store: one JSON document under the user data directory.
pub struct JsonFileFavoritesRepository {
    path: PathBuf,
}

impl JsonFileFavoritesRepository {
    const STORE_FILE: &'static str = "favorites.json";

    /// Store scoped to the running user's data directory.
    pub fn new() -> AppResult<Self> {
        let base = dirs::data_dir().ok_or_else(|| {
            AppError::Persistence("No user data directory available".to_string())
        })?;
        Ok(Self::with_path(base.join("moviehub").join(Self::STORE_FILE)))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FavoritesRepository for JsonFileFavoritesRepository {
    fn load(&self) -> AppResult<FavoritesMap> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(FavoritesMap::new());
            }
            Err(e) => {
                return Err(AppError::Persistence(format!(
                    "Failed to read favorites store {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            AppError::Persistence(format!(
                "Favorites store {} is not valid JSON: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, favorites: &FavoritesMap) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Persistence(format!(
                    "Failed to create favorites directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(favorites)?;

        // Write-then-rename so a crash mid-write never truncates the store
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| {
            AppError::Persistence(format!(
                "Failed to write favorites store {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            AppError::Persistence(format!(
                "Failed to commit favorites store {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
