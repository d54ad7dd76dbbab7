// src/application/dto/mod.rs
//
// Render-facing DTOs
//
// RULES:
// - Snapshots, never live references into coordinator state
// - Serializable as-is for any UI transport

use serde::Serialize;

use crate::application::view_coordinator::ViewMode;
use crate::domain::Movie;

/// Everything the presentation layer needs for one render cycle.
#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame {
    pub mode: ViewMode,
    pub items: Vec<Movie>,
    pub loading: bool,
    pub error: Option<String>,
    pub favorite_ids: Vec<String>,
    pub modal: Option<Movie>,
}

impl RenderFrame {
    pub fn is_favorite(&self, imdb_id: &str) -> bool {
        self.favorite_ids.iter().any(|id| id == imdb_id)
    }
}
