//! Hattrick CHPP integration helpers
//!
//! Three independent pieces for an HTTP handler layer that talks to the
//! Hattrick API:
//!
//! - [`params`]: validation and coercion of query-string parameters
//! - [`schedule`]: last occurrence of a weekday at a UTC time, plus an offset
//! - [`hattrick`]: OAuth1-signed XML fetches decoded into typed documents
//!
//! # Examples
//!
//! ```rust,no_run
//! use hattrick_bridge::config::Config;
//! use hattrick_bridge::error::AppError;
//! use hattrick_bridge::hattrick::{HattrickClient, MatchDetailsData, build_match_details_path};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = HattrickClient::new(&config.hattrick, config.http_timeout_seconds)?;
//!
//!     let data: MatchDetailsData = client
//!         .fetch_xml(&build_match_details_path(700000001))
//!         .await?;
//!     println!("{}", data.match_details.score());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod hattrick;
pub mod params;
pub mod schedule;

// Re-export commonly used types for convenience
pub use config::{Config, HattrickConfig};
pub use error::AppError;
pub use hattrick::HattrickClient;
pub use params::{
    QueryParams, is_valid_stadium, is_valid_weeks, query_bool, query_int, query_int_list,
};
pub use schedule::{ScheduleWindow, last_weekday_and_offset};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
