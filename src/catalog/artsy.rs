//! Artsy public API client.
//!
//! Every request carries an application ("xapp") token in the
//! `X-XAPP-Token` header. The token is fetched on first use and reused
//! until it is within [`TOKEN_REFRESH_MARGIN_SECS`] of expiry, or until
//! the API rejects it with 401. There is no retry and no request
//! timeout: a failure is reported once, and a request that never
//! answers keeps its pane loading.

use super::wire;
use super::ArtistCatalog;
use crate::model::{ArtistDetail, ArtistId, SearchQuery, SearchResultItem, TransportError};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Default API root.
pub const DEFAULT_API_BASE: &str = "https://api.artsy.net/api";

/// Refresh the token when it expires within this many seconds.
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 300;

const TOKEN_HEADER: &str = "X-XAPP-Token";

/// Application credentials for the token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// A cached application token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct XappToken {
    /// Token value sent in the request header.
    pub token: String,
    /// Expiry instant reported by the token endpoint.
    pub expires_at: DateTime<Utc>,
}

impl XappToken {
    /// Whether the token can still be used at `now`.
    ///
    /// A token within the refresh margin of expiry counts as stale.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(TOKEN_REFRESH_MARGIN_SECS) < self.expires_at
    }
}

/// HTTP implementation of [`ArtistCatalog`].
pub struct ArtsyClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
    result_limit: usize,
    token: Mutex<Option<XappToken>>,
}

impl std::fmt::Debug for ArtsyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtsyClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("result_limit", &self.result_limit)
            .finish_non_exhaustive()
    }
}

impl ArtsyClient {
    /// Build a client against `base_url` (no trailing slash needed).
    pub fn new(
        base_url: impl Into<String>,
        credentials: Credentials,
        result_limit: usize,
    ) -> Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(concat!("artscout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            result_limit,
            token: Mutex::new(None),
        })
    }

    /// Number of results requested per search.
    pub fn result_limit(&self) -> usize {
        self.result_limit
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Current token, fetching a new one when missing or near expiry.
    ///
    /// The lock is held across the refresh so concurrent callers share
    /// one token request.
    async fn token(&self) -> Result<String, TransportError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Utc::now())) {
            return Ok(token.token.clone());
        }

        let fresh = self.request_token().await?;
        info!(expires_at = %fresh.expires_at, "application token refreshed");
        let value = fresh.token.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    async fn request_token(&self) -> Result<XappToken, TransportError> {
        let form = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(self.url("tokens/xapp_token"))
            .form(&form)
            .send()
            .await
            .map_err(|e| TransportError::Auth(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Auth(format!("token endpoint returned {status}")));
        }

        response
            .json::<XappToken>()
            .await
            .map_err(|e| TransportError::Auth(e.to_string()))
    }

    async fn get_body(&self, path: &str, query: &[(&str, &str)]) -> Result<String, TransportError> {
        let token = self.token().await?;
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .header(TOKEN_HEADER, token)
            .header("Accept", "application/json")
            .send()
            .await?;

        // A rejected token is forgotten so the next call fetches a new one.
        if response.status() == StatusCode::UNAUTHORIZED {
            info!(%url, "token rejected; discarding cached token");
            *self.token.lock().await = None;
            return Err(TransportError::Status(StatusCode::UNAUTHORIZED.as_u16()));
        }

        Ok(response.error_for_status()?.text().await?)
    }
}

#[async_trait]
impl ArtistCatalog for ArtsyClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>, TransportError> {
        let size = self.result_limit.to_string();
        let body = self
            .get_body(
                "search",
                &[("q", query.as_str()), ("size", size.as_str()), ("type", "artist")],
            )
            .await?;

        wire::decode_search(&body)
    }

    async fn artist(&self, id: &ArtistId) -> Result<ArtistDetail, TransportError> {
        let body = self.get_body(&format!("artists/{id}"), &[]).await?;
        wire::decode_artist(id, &body)
    }
}
