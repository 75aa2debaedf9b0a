use super::Config;
use crate::error::AppError;
use crate::schedule::parse_time_of_day;

/// Validates the configuration settings
///
/// # Validation Rules
/// - None of the four OAuth credentials may be empty
/// - Base resource URL must start with `http://` or `https://`
/// - Training start time must parse as `HH:MM:SS`
/// - HTTP timeout must be greater than zero
/// - If log file path is provided, it cannot be empty
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let hattrick = &config.hattrick;
    let credentials = [
        ("consumer key", &hattrick.consumer_key),
        ("consumer secret", &hattrick.consumer_secret),
        ("access token", &hattrick.access_token),
        ("access token secret", &hattrick.access_token_secret),
    ];
    for (name, value) in credentials {
        if value.trim().is_empty() {
            return Err(AppError::config_error(format!("Hattrick {name} cannot be empty")));
        }
    }

    let base_url = &hattrick.base_resource_url;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "Base resource URL must start with http:// or https://, got '{base_url}'"
        )));
    }

    parse_time_of_day(&config.training_start_utc).map_err(|e| {
        AppError::config_error(format!("Invalid training start time: {e}"))
    })?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be greater than zero"));
    }

    if let Some(log_path) = &config.log_file_path
        && log_path.is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
