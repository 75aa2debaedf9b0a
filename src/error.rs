use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Query parameter validation errors
    #[error("invalid {key} parameter: '{value}' is not a boolean")]
    InvalidBool { key: String, value: String },

    #[error("invalid value for {key} parameter: '{token}' is not an integer")]
    InvalidIntList { key: String, token: String },

    #[error("invalid {key} parameter: '{value}' is not an integer")]
    InvalidInt { key: String, value: String },

    #[error("invalid value for {key} parameter: {value}")]
    OutOfDomain { key: String, value: i64 },

    // Schedule time-of-day errors
    #[error("invalid time-of-day format '{value}': expected HH:MM:SS")]
    TimeFormat { value: String },

    #[error("invalid {field} in time-of-day '{value}'")]
    TimeField { field: &'static str, value: String },

    // Hattrick API errors
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Invalid request URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to sign request for {url}: {message}")]
    Signing { url: String, message: String },

    #[error("HTTP Status Code: {status} for url: {url}")]
    ApiStatus { status: u16, url: String },

    #[error(transparent)]
    XmlDecode(#[from] quick_xml::DeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time error: {0}")]
    DateTime(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a boolean validation error for a query parameter
    pub fn invalid_bool(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidBool {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an integer-list validation error naming the failing token
    pub fn invalid_int_list(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self::InvalidIntList {
            key: key.into(),
            token: token.into(),
        }
    }

    /// Create an integer parse error for a query parameter
    pub fn invalid_int(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInt {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a domain error for a parsed value the validator rejected
    pub fn out_of_domain(key: impl Into<String>, value: i64) -> Self {
        Self::OutOfDomain {
            key: key.into(),
            value,
        }
    }

    pub fn time_format(value: impl Into<String>) -> Self {
        Self::TimeFormat {
            value: value.into(),
        }
    }

    pub fn time_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::TimeField {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn signing(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Signing {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an upstream status error (anything other than 200)
    pub fn api_status(status: u16, url: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time error with context
    pub fn datetime_error(msg: impl Into<String>) -> Self {
        Self::DateTime(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// True for errors caused by the caller's input (query parameters or
    /// time-of-day strings). An HTTP layer maps these to 4xx and everything
    /// else to 5xx.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidBool { .. }
                | AppError::InvalidIntList { .. }
                | AppError::InvalidInt { .. }
                | AppError::OutOfDomain { .. }
                | AppError::TimeFormat { .. }
                | AppError::TimeField { .. }
        )
    }

    /// Name of the query parameter this error is about, if any
    pub fn parameter_key(&self) -> Option<&str> {
        match self {
            AppError::InvalidBool { key, .. }
            | AppError::InvalidIntList { key, .. }
            | AppError::InvalidInt { key, .. }
            | AppError::OutOfDomain { key, .. } => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bool_helper() {
        let error = AppError::invalid_bool("finished", "maybe");
        assert!(matches!(error, AppError::InvalidBool { .. }));
        assert_eq!(
            error.to_string(),
            "invalid finished parameter: 'maybe' is not a boolean"
        );
    }

    #[test]
    fn test_invalid_int_list_helper() {
        let error = AppError::invalid_int_list("ids", "x");
        assert_eq!(
            error.to_string(),
            "invalid value for ids parameter: 'x' is not an integer"
        );
        assert_eq!(error.parameter_key(), Some("ids"));
    }

    #[test]
    fn test_out_of_domain_helper() {
        let error = AppError::out_of_domain("weeks", 4);
        assert!(matches!(error, AppError::OutOfDomain { value: 4, .. }));
        assert_eq!(error.to_string(), "invalid value for weeks parameter: 4");
    }

    #[test]
    fn test_time_errors() {
        assert_eq!(
            AppError::time_format("10:30").to_string(),
            "invalid time-of-day format '10:30': expected HH:MM:SS"
        );
        assert_eq!(
            AppError::time_field("minute", "10:xx:00").to_string(),
            "invalid minute in time-of-day '10:xx:00'"
        );
    }

    #[test]
    fn test_api_status_helper() {
        let error = AppError::api_status(404, "https://chpp.example.com/chppxml.ashx?file=x");
        assert!(matches!(error, AppError::ApiStatus { status: 404, .. }));
        assert_eq!(
            error.to_string(),
            "HTTP Status Code: 404 for url: https://chpp.example.com/chppxml.ashx?file=x"
        );
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::invalid_bool("a", "b").is_client_error());
        assert!(AppError::invalid_int_list("a", "b").is_client_error());
        assert!(AppError::invalid_int("a", "b").is_client_error());
        assert!(AppError::out_of_domain("a", 1).is_client_error());
        assert!(AppError::time_format("1").is_client_error());
        assert!(AppError::time_field("hour", "x:0:0").is_client_error());

        assert!(!AppError::api_status(500, "url").is_client_error());
        assert!(!AppError::invalid_url("url", "bad").is_client_error());
        assert!(!AppError::config_error("missing").is_client_error());
    }

    #[test]
    fn test_parameter_key_absent_for_non_validation_errors() {
        assert_eq!(AppError::api_status(404, "url").parameter_key(), None);
        assert_eq!(AppError::time_format("x").parameter_key(), None);
    }

    #[test]
    fn test_error_from_quick_xml() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Doc {
            #[serde(rename = "Value")]
            value: u32,
        }

        let xml_error =
            quick_xml::de::from_str::<Doc>("<Doc><Value>abc</Value></Doc>").unwrap_err();
        let app_error: AppError = xml_error.into();
        assert!(matches!(app_error, AppError::XmlDecode(_)));
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::Transport(_)));
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let toml_error = toml::from_str::<toml::Table>("invalid = [toml").unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }
}
