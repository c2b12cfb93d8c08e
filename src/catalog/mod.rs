//! Artist catalog boundary.
//!
//! The core never talks HTTP. It hands a [`SearchQuery`] or an
//! [`ArtistId`] to an [`ArtistCatalog`] and gets back a decoded record or
//! a [`TransportError`]. Implementations:
//! - [`ArtsyClient`]: the Artsy public API over HTTPS
//! - test doubles in unit and integration tests

use crate::model::{ArtistDetail, ArtistId, SearchQuery, SearchResultItem, TransportError};
use async_trait::async_trait;

pub mod artsy;
pub mod wire;

pub use artsy::{ArtsyClient, Credentials, XappToken};

/// Source of search results and artist records.
///
/// Calls may be dropped mid-flight when superseded; implementations must
/// tolerate cancellation at any await point.
#[async_trait]
pub trait ArtistCatalog: Send + Sync {
    /// Search artists matching `query`, in the catalog's ranking order.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>, TransportError>;

    /// Fetch the full record for `id`.
    async fn artist(&self, id: &ArtistId) -> Result<ArtistDetail, TransportError>;
}
