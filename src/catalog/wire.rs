//! Artsy JSON shapes and their decoding into model types.
//!
//! Parse at the boundary: nothing outside this module sees raw JSON.

use crate::model::{resolve_thumbnail, ArtistDetail, ArtistId, SearchResultItem, TransportError};
use serde::Deserialize;
use tracing::warn;

// ===== Search =====

/// Body of `GET /search`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchResponse {
    /// Embedded result list; absent when nothing matched.
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

/// `_embedded` block of a search response.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Embedded {
    /// Result entries in ranking order.
    #[serde(default)]
    pub results: Vec<RawSearchEntry>,
}

/// One search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchEntry {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// HAL links.
    #[serde(rename = "_links")]
    pub links: RawLinks,
}

/// HAL `_links` block of a search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLinks {
    /// Link to the entity itself; its last path segment is the id.
    #[serde(rename = "self")]
    pub self_link: RawLink,
    /// Thumbnail image link.
    #[serde(default)]
    pub thumbnail: Option<RawLink>,
}

/// A single HAL link.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLink {
    /// Link target.
    pub href: String,
}

/// Decode a search body into display items.
///
/// A missing `_embedded` block or result list means zero results. Entries
/// whose self link yields no usable id are skipped.
pub fn decode_search(body: &str) -> Result<Vec<SearchResultItem>, TransportError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(into_items(response))
}

/// Convert a decoded response into display items, preserving order.
pub fn into_items(response: SearchResponse) -> Vec<SearchResultItem> {
    let entries = response.embedded.map(|e| e.results).unwrap_or_default();

    entries
        .into_iter()
        .filter_map(|entry| {
            let id = match ArtistId::from_self_link(&entry.links.self_link.href) {
                Ok(id) => id,
                Err(err) => {
                    warn!(href = %entry.links.self_link.href, error = %err, "skipping search entry");
                    return None;
                }
            };
            let thumbnail = entry
                .links
                .thumbnail
                .map(|link| link.href)
                .unwrap_or_default();
            Some(SearchResultItem {
                id,
                title: entry.title,
                thumbnail_url: thumbnail_or_placeholder(&thumbnail),
            })
        })
        .collect()
}

fn thumbnail_or_placeholder(href: &str) -> String {
    if href.is_empty() {
        crate::model::PLACEHOLDER_THUMBNAIL.to_string()
    } else {
        resolve_thumbnail(href)
    }
}

// ===== Artist =====

/// Body of `GET /artists/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawArtist {
    /// Display name.
    pub name: String,
    /// Birth year, free-form text.
    #[serde(default)]
    pub birthday: Option<String>,
    /// Death year, free-form text.
    #[serde(default)]
    pub deathday: Option<String>,
    /// Nationality.
    #[serde(default)]
    pub nationality: Option<String>,
    /// Biography.
    #[serde(default)]
    pub biography: Option<String>,
}

/// Decode an artist body. `id` is the id the record was requested under.
pub fn decode_artist(id: &ArtistId, body: &str) -> Result<ArtistDetail, TransportError> {
    let raw: RawArtist = serde_json::from_str(body)?;
    Ok(into_detail(id.clone(), raw))
}

/// Convert a decoded record, treating blank optional fields as absent.
pub fn into_detail(id: ArtistId, raw: RawArtist) -> ArtistDetail {
    ArtistDetail {
        id,
        name: raw.name,
        birth_year: non_blank(raw.birthday),
        death_year: non_blank(raw.deathday),
        nationality: non_blank(raw.nationality),
        biography: non_blank(raw.biography),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
