//! Signed fetch-and-decode against the CHPP endpoint.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{error, instrument};

use super::events::{FetchEvents, TracingEvents};
use super::http_client::create_http_client_with_timeout;
use super::oauth::{OAuthCredentials, OAuthSigner};
use crate::config::HattrickConfig;
use crate::error::AppError;

/// Decodes a fully buffered XML body into `T`.
pub fn decode_xml<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    Ok(quick_xml::de::from_reader(body)?)
}

/// Client for OAuth1-signed CHPP requests.
///
/// Holds no per-request state: every fetch is one signed GET with a fresh
/// nonce and timestamp, and the client can be shared between tasks.
#[derive(Clone)]
pub struct HattrickClient {
    http: Client,
    signer: OAuthSigner,
    base_resource_url: String,
    events: Arc<dyn FetchEvents>,
}

impl std::fmt::Debug for HattrickClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HattrickClient")
            .field("signer", &self.signer)
            .field("base_resource_url", &self.base_resource_url)
            .finish_non_exhaustive()
    }
}

impl HattrickClient {
    /// Creates a client with its own HTTP connection pool.
    pub fn new(config: &HattrickConfig, timeout_seconds: u64) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(timeout_seconds)?;
        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    pub fn with_http_client(config: &HattrickConfig, http: Client) -> Self {
        Self {
            http,
            signer: OAuthSigner::new(OAuthCredentials::from(config)),
            base_resource_url: config.base_resource_url.clone(),
            events: Arc::new(TracingEvents),
        }
    }

    /// Replaces the diagnostic event sink.
    pub fn with_events(mut self, events: Arc<dyn FetchEvents>) -> Self {
        self.events = events;
        self
    }

    pub fn base_resource_url(&self) -> &str {
        &self.base_resource_url
    }

    /// Full URL for a relative path: plain concatenation with the base URL.
    pub fn resource_url(&self, relative_path: &str) -> String {
        format!("{}{}", self.base_resource_url, relative_path)
    }

    /// Fetches `relative_path` and returns the complete response body.
    ///
    /// # Errors
    /// * [`AppError::InvalidUrl`] / [`AppError::Signing`] before anything is sent
    /// * [`AppError::Transport`] for network failures, returned as-is
    /// * [`AppError::ApiStatus`] for any status other than 200; the body is not read
    #[instrument(skip(self))]
    pub async fn fetch_raw(&self, relative_path: &str) -> Result<Vec<u8>, AppError> {
        let url = self.resource_url(relative_path);
        self.events.request_started(&url);

        let parsed = Url::parse(&url).map_err(|e| AppError::invalid_url(&url, e.to_string()))?;
        let authorization = self.signer.authorization_header("GET", &parsed)?;

        let response = self
            .http
            .get(parsed)
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| {
                error!("Request failed for URL {url}: {e}");
                AppError::Transport(e)
            })?;

        let status = response.status();
        self.events.response_status(&url, status.as_u16());
        if status != StatusCode::OK {
            error!("HTTP {} (URL: {url})", status.as_u16());
            return Err(AppError::api_status(status.as_u16(), url));
        }

        // The body is materialized first so it can be reported and then decoded.
        let body = response.bytes().await?;
        self.events.body_buffered(&url, &body);
        Ok(body.to_vec())
    }

    /// Fetches `relative_path` and decodes the XML body into `T`.
    ///
    /// # Errors
    /// Everything [`fetch_raw`](Self::fetch_raw) returns, plus
    /// [`AppError::XmlDecode`] for malformed XML or a shape mismatch.
    #[instrument(skip(self))]
    pub async fn fetch_xml<T: DeserializeOwned>(&self, relative_path: &str) -> Result<T, AppError> {
        let body = self.fetch_raw(relative_path).await?;
        decode_xml(&body).inspect_err(|e| {
            error!("Failed to decode XML from {}: {e}", self.resource_url(relative_path));
        })
    }

    /// Fetches into a caller-owned destination. `destination` is only
    /// written when the whole fetch succeeds.
    #[instrument(skip(self, destination))]
    pub async fn fetch_xml_into<T: DeserializeOwned>(
        &self,
        relative_path: &str,
        destination: &mut T,
    ) -> Result<(), AppError> {
        *destination = self.fetch_xml(relative_path).await?;
        Ok(())
    }
}
