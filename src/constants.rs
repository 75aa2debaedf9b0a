//! Application-wide constants and configuration values

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default CHPP endpoint; relative paths are appended verbatim
pub const DEFAULT_BASE_RESOURCE_URL: &str = "https://chpp.hattrick.org/chppxml.ashx";

/// Default weekly training update time (UTC)
pub const DEFAULT_TRAINING_START_UTC: &str = "07:00:00";

/// Week counts accepted by history endpoints
pub const VALID_WEEK_COUNTS: [i64; 5] = [3, 5, 10, 15, 20];

/// Stadium codes accepted by arena endpoints
pub const VALID_STADIUM_CODES: [i64; 2] = [1, 2];

/// Environment variable names read by the configuration layer
pub mod env_vars {
    pub const CONSUMER_KEY: &str = "CONSUMER_KEY";
    pub const CONSUMER_SECRET: &str = "CONSUMER_SECRET";
    pub const ACCESS_TOKEN: &str = "OAUTH1_TOKEN";
    pub const ACCESS_TOKEN_SECRET: &str = "OAUTH1_TOKEN_SECRET";
    pub const BASE_RESOURCE_URL: &str = "BASE_RESOURCE_URL";
    pub const TRAINING_START_UTC: &str = "START_TIME_TRAINING_UTC";
    pub const HTTP_TIMEOUT: &str = "HATTRICK_HTTP_TIMEOUT";
    pub const LOG_FILE: &str = "HATTRICK_LOG_FILE";
}

/// OAuth 1.0a protocol values
pub mod oauth {
    pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
    pub const VERSION: &str = "1.0";
    pub const NONCE_LENGTH: usize = 32;
}

/// CHPP file versions used by the path builders
pub mod chpp {
    pub const MATCH_DETAILS_VERSION: &str = "3.1";
    pub const ARENA_DETAILS_VERSION: &str = "1.7";
    pub const TRAINING_VERSION: &str = "2.2";
}
