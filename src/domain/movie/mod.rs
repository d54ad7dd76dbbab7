pub mod entity;
pub mod invariants;

pub use entity::{Movie, MovieSummary};
pub use invariants::validate_movie;
