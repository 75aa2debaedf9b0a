pub mod client;
pub mod events;
pub mod http_client;
pub mod models;
pub mod oauth;
pub mod urls;

// Re-export client and decoding
pub use client::{HattrickClient, decode_xml};
// Re-export observability hooks
pub use events::{FetchEvents, TracingEvents};
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
pub use models::{Arena, AwayTeam, HattrickEnvelope, HomeTeam, MatchDetails, MatchDetailsData};
pub use oauth::{OAuthCredentials, OAuthSigner};
// Re-export path builders
pub use urls::*;
