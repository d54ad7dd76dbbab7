// src/integrations/mod.rs
//
// External Integrations Module

pub mod catalog;
pub mod omdb;

pub use catalog::CatalogClient;
pub use omdb::client::{OmdbClient, OmdbConfig};
