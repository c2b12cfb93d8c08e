//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod artist;
pub mod error;
pub mod identifiers;
pub mod query;

// Re-export for convenience
pub use artist::{
    format_year_range, resolve_thumbnail, ArtistDetail, SearchResultItem, MISSING_IMAGE_SENTINEL,
    PLACEHOLDER_THUMBNAIL,
};
pub use error::{AppError, TransportError, ValidationError};
pub use identifiers::{ArtistId, InvalidArtistId};
pub use query::{is_valid, SearchQuery, DEFAULT_MIN_QUERY_CHARS};
