//! Validated search query.

use crate::model::ValidationError;
use std::fmt;

/// Minimum query length used when none is configured.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 1;

/// Validated search query. Never empty, always trimmed.
/// Smart constructor enforces the validity predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: trims the raw text and checks it against the
    /// minimum length (counted in characters, not bytes).
    pub fn parse(raw: &str, min_chars: usize) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }

        let actual = trimmed.chars().count();
        if actual < min_chars {
            return Err(ValidationError::TooShort {
                min: min_chars,
                actual,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validity predicate for live input feedback.
pub fn is_valid(raw: &str, min_chars: usize) -> bool {
    SearchQuery::parse(raw, min_chars).is_ok()
}
