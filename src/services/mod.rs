// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod favorites_service;
pub mod search_service;

#[cfg(test)]
mod favorites_service_tests;

pub use favorites_service::FavoritesService;

pub use search_service::{SearchService, SearchState, SearchStatus, DETAIL_FETCH_LIMIT};
