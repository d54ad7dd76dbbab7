// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls

pub mod favorites_repository;

pub use favorites_repository::{FavoritesMap, FavoritesRepository, JsonFileFavoritesRepository};
