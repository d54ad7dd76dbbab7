// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required API credential is missing or unusable. Fatal to any search.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The catalog provider answered with a domain-level negative result.
    /// Carries the provider-supplied message when one exists.
    #[error("{0}")]
    NoResults(String),

    /// Network or decode failure talking to the catalog provider.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Favorites store read/write failure. Non-fatal to the process.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
