use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Validates all Movie invariants
/// A record that fails these cannot be keyed, displayed, or persisted
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_imdb_id(&movie.imdb_id)?;
    validate_title(&movie.title)?;
    Ok(())
}

/// The identifier is the favorites key and the detail-lookup handle
fn validate_imdb_id(imdb_id: &str) -> DomainResult<()> {
    if imdb_id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}
