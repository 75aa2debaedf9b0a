//! OAuth 1.0a one-legged request signing with HMAC-SHA1 (RFC 5849).

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;
use sha1::Sha1;

use crate::config::{HattrickConfig, mask_secret};
use crate::constants::oauth::{NONCE_LENGTH, SIGNATURE_METHOD, VERSION};
use crate::error::AppError;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay as-is, everything else is escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a value the way OAuth 1.0a requires.
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// Consumer and access-token credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &mask_secret(&self.consumer_secret))
            .field("token", &mask_secret(&self.token))
            .field("token_secret", &mask_secret(&self.token_secret))
            .finish()
    }
}

impl From<&HattrickConfig> for OAuthCredentials {
    fn from(config: &HattrickConfig) -> Self {
        Self {
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            token: config.access_token.clone(),
            token_secret: config.access_token_secret.clone(),
        }
    }
}

/// Random alphanumeric nonce.
pub fn generate_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Scheme, host, non-default port and path of `url`, without query or fragment.
fn base_uri(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_lowercase();
    match url.port() {
        Some(port) => format!("{}://{host}:{port}{}", url.scheme(), url.path()),
        None => format!("{}://{host}{}", url.scheme(), url.path()),
    }
}

/// Builds the signature base string from the request method, the URL (its
/// query pairs are signed too) and the `oauth_*` protocol parameters.
pub fn signature_base_string(method: &str, url: &Url, oauth_params: &[(&str, String)]) -> String {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .chain(
            oauth_params
                .iter()
                .map(|(k, v)| (percent_encode(k), percent_encode(v))),
        )
        .collect();
    params.sort();

    let normalized = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(&base_uri(url)),
        percent_encode(&normalized)
    )
}

/// Signs requests for one set of credentials.
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: OAuthCredentials,
}

impl OAuthSigner {
    pub fn new(credentials: OAuthCredentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &OAuthCredentials {
        &self.credentials
    }

    fn protocol_params(&self, nonce: &str, timestamp: i64) -> Vec<(&'static str, String)> {
        vec![
            ("oauth_consumer_key", self.credentials.consumer_key.clone()),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_signature_method", SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp", timestamp.to_string()),
            ("oauth_token", self.credentials.token.clone()),
            ("oauth_version", VERSION.to_string()),
        ]
    }

    /// Base64 HMAC-SHA1 signature over the signature base string.
    pub fn sign(
        &self,
        method: &str,
        url: &Url,
        oauth_params: &[(&str, String)],
    ) -> Result<String, AppError> {
        let key = format!(
            "{}&{}",
            percent_encode(&self.credentials.consumer_secret),
            percent_encode(&self.credentials.token_secret)
        );
        let base = signature_base_string(method, url, oauth_params);

        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| AppError::signing(url.as_str(), e.to_string()))?;
        mac.update(base.as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }

    /// `Authorization` header value for a request made now.
    pub fn authorization_header(&self, method: &str, url: &Url) -> Result<String, AppError> {
        self.authorization_header_with(method, url, &generate_nonce(), Utc::now().timestamp())
    }

    /// `Authorization` header value with a fixed nonce and timestamp.
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &Url,
        nonce: &str,
        timestamp: i64,
    ) -> Result<String, AppError> {
        let mut params = self.protocol_params(nonce, timestamp);
        let signature = self.sign(method, url, &params)?;
        params.push(("oauth_signature", signature));
        params.sort();

        let fields = params
            .iter()
            .map(|(k, v)| format!("{k}=\"{}\"", percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("OAuth {fields}"))
    }
}
