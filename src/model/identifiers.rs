//! Artist identifier newtype with a smart constructor.
//!
//! Identifiers validate non-empty strings at construction time.
//! The raw constructor is never exported.
//!
//! An id becomes one URL path segment, so characters that would end or
//! escape that segment are rejected.

use std::fmt;

const PATH_RESERVED: [char; 4] = ['/', '?', '#', '%'];

/// Catalog identifier of an artist (e.g., "4d8b92b34eb68a1b2c0003f4").
///
/// Derived from the trailing path segment of the artist's self link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtistId(String);

impl ArtistId {
    /// Smart constructor: validates a non-empty, whitespace-free id that
    /// is safe to use as a single path segment.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidArtistId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidArtistId::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(InvalidArtistId::Whitespace(raw));
        }
        if raw.contains(PATH_RESERVED) || raw == "." || raw == ".." {
            return Err(InvalidArtistId::NotASegment(raw));
        }
        Ok(Self(raw))
    }

    /// Extract the id from a self-referencing link.
    ///
    /// The id is the trailing path segment: `https://api.artsy.net/api/artists/abc`
    /// yields `abc`. Query, fragment and a trailing slash are ignored.
    pub fn from_self_link(href: &str) -> Result<Self, InvalidArtistId> {
        let path = href.split(['?', '#']).next().unwrap_or_default();
        let segment = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        Self::new(segment)
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejection reasons for [`ArtistId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArtistId {
    /// The id was empty.
    #[error("Artist ID cannot be empty")]
    Empty,
    /// The id contained whitespace.
    #[error("Artist ID cannot contain whitespace: {0:?}")]
    Whitespace(String),
    /// The id would not stay a single URL path segment.
    #[error("Artist ID is not a valid path segment: {0:?}")]
    NotASegment(String),
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_id_accepts_valid_string() {
        let id = ArtistId::new("4d8b92b34eb68a1b2c0003f4");
        assert!(id.is_ok(), "Valid id should be accepted");
    }

    #[test]
    fn artist_id_rejects_empty_string() {
        assert_eq!(ArtistId::new(""), Err(InvalidArtistId::Empty));
    }

    #[test]
    fn artist_id_rejects_embedded_whitespace() {
        assert!(matches!(
            ArtistId::new("claude monet"),
            Err(InvalidArtistId::Whitespace(_))
        ));
    }

    #[test]
    fn artist_id_display_returns_inner_string() {
        let id = ArtistId::new("claude-monet").expect("valid id");
        assert_eq!(id.to_string(), "claude-monet");
        assert_eq!(id.as_str(), "claude-monet");
    }

    #[test]
    fn from_self_link_takes_trailing_segment() {
        let id = ArtistId::from_self_link("https://api.artsy.net/api/artists/4d8b92b34eb68a1b2c0003f4")
            .expect("valid link");
        assert_eq!(id.as_str(), "4d8b92b34eb68a1b2c0003f4");
    }

    #[test]
    fn from_self_link_ignores_trailing_slash() {
        let id = ArtistId::from_self_link("https://api.artsy.net/api/artists/edouard-manet/")
            .expect("valid link");
        assert_eq!(id.as_str(), "edouard-manet");
    }

    #[test]
    fn from_self_link_without_slash_uses_whole_string() {
        let id = ArtistId::from_self_link("claude-monet").expect("valid link");
        assert_eq!(id.as_str(), "claude-monet");
    }

    #[test]
    fn artist_id_rejects_url_syntax() {
        for raw in ["monet?x=1", "monet#bio", "a/b", "monet%2F", ".", ".."] {
            assert_eq!(
                ArtistId::new(raw),
                Err(InvalidArtistId::NotASegment(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn artist_id_allows_dots_inside() {
        assert!(ArtistId::new("j.m.w.-turner").is_ok());
    }

    #[test]
    fn from_self_link_drops_query_and_fragment() {
        let id = ArtistId::from_self_link("https://api.artsy.net/api/artists/monet?x=1#top")
            .expect("valid link");
        assert_eq!(id.as_str(), "monet");
    }

    #[test]
    fn from_self_link_rejects_empty_href() {
        assert_eq!(ArtistId::from_self_link(""), Err(InvalidArtistId::Empty));
        assert_eq!(ArtistId::from_self_link("/"), Err(InvalidArtistId::Empty));
    }
}
