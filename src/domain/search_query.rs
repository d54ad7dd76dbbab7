// src/domain/search_query.rs

use serde::{Deserialize, Serialize};

/// Neutral keyword substituted when the user filters by year alone.
/// The provider requires a non-empty search term, so a year-only query
/// searches for this and lets the year parameter narrow the results.
pub const WILDCARD_KEYWORD: &str = "movie";

/// User-supplied search input: a title fragment and an optional release year.
/// Both fields are kept as entered; trimming happens at the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub title: String,
    pub year: String,
}

impl SearchQuery {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
        }
    }

    /// An all-empty query never reaches the remote provider; it clears
    /// the result list instead.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.year.trim().is_empty()
    }

    /// Keyword actually sent to the provider: the trimmed title, or the
    /// wildcard when only a year was given.
    pub fn keyword(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            WILDCARD_KEYWORD
        } else {
            title
        }
    }

    /// Year filter, if one was entered.
    pub fn year_filter(&self) -> Option<&str> {
        let year = self.year.trim();
        if year.is_empty() {
            None
        } else {
            Some(year)
        }
    }
}
