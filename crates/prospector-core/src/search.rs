//! Validated parameters for one prospecting search.

use serde::Serialize;

use crate::CoreError;

pub const DEFAULT_QUERY: &str = "cafeterías";
pub const DEFAULT_CITY: &str = "Málaga";
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

/// What to look for, where, and how many businesses to ask for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    query: String,
    city: String,
    limit: u32,
}

impl SearchParams {
    /// Builds parameters, trimming `query` and `city`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSearchParams`] if `query` or `city` is
    /// blank, or `limit` is outside `1..=50`.
    pub fn new(query: &str, city: &str, limit: u32) -> Result<Self, CoreError> {
        let query = query.trim();
        let city = city.trim();
        if query.is_empty() {
            return Err(CoreError::InvalidSearchParams(
                "query must be non-empty".to_string(),
            ));
        }
        if city.is_empty() {
            return Err(CoreError::InvalidSearchParams(
                "city must be non-empty".to_string(),
            ));
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(CoreError::InvalidSearchParams(format!(
                "limit must be between 1 and {MAX_LIMIT}, got {limit}"
            )));
        }
        Ok(Self {
            query: query.to_string(),
            city: city.to_string(),
            limit,
        })
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            city: DEFAULT_CITY.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}
