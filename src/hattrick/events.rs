//! Diagnostic side channel for API fetches.

use tracing::{debug, warn};

/// Receives diagnostic events while a fetch runs. Implementations must not
/// influence the outcome of the fetch.
pub trait FetchEvents: Send + Sync {
    /// Called with the full URL before the request is sent.
    fn request_started(&self, url: &str);

    /// Called once the response status line has been received.
    fn response_status(&self, url: &str, status: u16);

    /// Called with the complete buffered body of a 200 response.
    fn body_buffered(&self, url: &str, body: &[u8]);
}

/// Forwards fetch events to `tracing`: the URL at warn level so API usage
/// shows up with default filters, status and body at debug.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEvents;

impl FetchEvents for TracingEvents {
    fn request_started(&self, url: &str) {
        warn!("Using Hattrick API url: {url}");
    }

    fn response_status(&self, url: &str, status: u16) {
        debug!("HTTP Status Code: {status} for url: {url}");
    }

    fn body_buffered(&self, url: &str, body: &[u8]) {
        debug!(
            "Response Body ({} bytes) for url {url}: {}",
            body.len(),
            String::from_utf8_lossy(body)
        );
    }
}
