//! Artist records as the core sees them.
//!
//! These are the decoded, display-ready forms of the catalog's search
//! entries and detail records. Raw wire shapes live in `catalog::wire`.

use crate::model::ArtistId;

/// Local image shown when the catalog has no thumbnail for an artist.
pub const PLACEHOLDER_THUMBNAIL: &str = "/static/images/artsy_logo.svg";

/// Sentinel path segment the catalog uses for "no image available".
pub const MISSING_IMAGE_SENTINEL: &str = "missing_image.png";

/// Resolve a thumbnail reference, substituting the placeholder for the
/// catalog's missing-image sentinel.
pub fn resolve_thumbnail(href: &str) -> String {
    if href.contains(MISSING_IMAGE_SENTINEL) {
        PLACEHOLDER_THUMBNAIL.to_string()
    } else {
        href.to_string()
    }
}

// ===== SearchResultItem =====

/// One selectable card in the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    /// Artist id taken from the entry's self link.
    pub id: ArtistId,
    /// Display title (the artist's name).
    pub title: String,
    /// Thumbnail reference, already resolved against the missing-image sentinel.
    pub thumbnail_url: String,
}

impl SearchResultItem {
    /// Build an item, resolving the thumbnail reference.
    pub fn new(id: ArtistId, title: impl Into<String>, thumbnail_href: &str) -> Self {
        Self {
            id,
            title: title.into(),
            thumbnail_url: resolve_thumbnail(thumbnail_href),
        }
    }

    /// Whether the item shows the local placeholder instead of a server image.
    pub fn has_placeholder_thumbnail(&self) -> bool {
        self.thumbnail_url == PLACEHOLDER_THUMBNAIL
    }
}

// ===== ArtistDetail =====

/// Full detail record for one artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    /// Artist id.
    pub id: ArtistId,
    /// Display name.
    pub name: String,
    /// Birth year as provided by the catalog.
    pub birth_year: Option<String>,
    /// Death year as provided by the catalog.
    pub death_year: Option<String>,
    /// Nationality, if known.
    pub nationality: Option<String>,
    /// Biography text, if any.
    pub biography: Option<String>,
}

impl ArtistDetail {
    /// Formatted life span, e.g. `(1840 - 1926)`.
    pub fn year_range(&self) -> String {
        format_year_range(self.birth_year.as_deref(), self.death_year.as_deref())
    }

    /// Heading line: name followed by the life span.
    pub fn heading(&self) -> String {
        format!("{} {}", self.name, self.year_range())
    }
}

/// Format an optional birth/death year pair.
///
/// | birth | death | output        |
/// |-------|-------|---------------|
/// | B     | D     | `(B - D)`     |
/// | B     | -     | `(B -)`       |
/// | -     | -     | `(-)`         |
/// | -     | D     | `(-)`         |
///
/// Empty strings count as absent.
pub fn format_year_range(birth: Option<&str>, death: Option<&str>) -> String {
    let birth = birth.filter(|b| !b.is_empty());
    let death = death.filter(|d| !d.is_empty());

    match (birth, death) {
        (Some(b), Some(d)) => format!("({b} - {d})"),
        (Some(b), None) => format!("({b} -)"),
        // Death without birth does not occur in valid data
        (None, _) => "(-)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ArtistId {
        ArtistId::new(s).expect("valid id")
    }

    // ===== Year range =====

    #[test]
    fn year_range_with_birth_and_death() {
        assert_eq!(format_year_range(Some("1970"), Some("2020")), "(1970 - 2020)");
    }

    #[test]
    fn year_range_with_birth_only() {
        assert_eq!(format_year_range(Some("1970"), None), "(1970 -)");
    }

    #[test]
    fn year_range_with_neither() {
        assert_eq!(format_year_range(None, None), "(-)");
    }

    #[test]
    fn year_range_with_death_only_falls_back() {
        assert_eq!(format_year_range(None, Some("2020")), "(-)");
    }

    #[test]
    fn year_range_treats_empty_strings_as_absent() {
        assert_eq!(format_year_range(Some(""), Some("")), "(-)");
        assert_eq!(format_year_range(Some("1881"), Some("")), "(1881 -)");
    }

    #[test]
    fn heading_joins_name_and_years() {
        let detail = ArtistDetail {
            id: id("claude-monet"),
            name: "Claude Monet".to_string(),
            birth_year: Some("1840".to_string()),
            death_year: Some("1926".to_string()),
            nationality: Some("French".to_string()),
            biography: None,
        };
        assert_eq!(detail.heading(), "Claude Monet (1840 - 1926)");
    }

    // ===== Thumbnails =====

    #[test]
    fn missing_image_sentinel_resolves_to_placeholder() {
        let item = SearchResultItem::new(
            id("nobody"),
            "Nobody",
            "https://d32dm0rphc51dk.cloudfront.net/missing_image.png",
        );
        assert_eq!(item.thumbnail_url, PLACEHOLDER_THUMBNAIL);
        assert!(item.has_placeholder_thumbnail());
    }

    #[test]
    fn real_thumbnail_is_kept() {
        let href = "https://d32dm0rphc51dk.cloudfront.net/abc/square.jpg";
        let item = SearchResultItem::new(id("monet"), "Claude Monet", href);
        assert_eq!(item.thumbnail_url, href);
        assert!(!item.has_placeholder_thumbnail());
    }
}
