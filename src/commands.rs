use crate::cli::{Args, Command};
use chrono::{Duration, Weekday};
use hattrick_bridge::config::Config;
use hattrick_bridge::error::AppError;
use hattrick_bridge::hattrick::{
    HattrickClient, HattrickEnvelope, MatchDetailsData, build_match_details_path,
};
use hattrick_bridge::params::{
    is_valid_stadium, is_valid_weeks, query_bool, query_int, query_int_list,
};
use hattrick_bridge::schedule::last_weekday_and_offset;
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

/// Dispatches the parsed subcommand.
pub async fn run(args: &Args, config: &Config) -> Result<(), AppError> {
    match &args.command {
        Command::Fetch { path, raw } => handle_fetch(config, path, *raw, args.json).await,
        Command::Match { match_id } => handle_match(config, *match_id, args.json).await,
        Command::Window {
            weekday,
            offset_hours,
            time,
        } => handle_window(config, *weekday, *offset_hours, time.as_deref(), args.json),
        Command::CheckParams { pairs } => handle_check_params(pairs, args.json),
        Command::Config => {
            config.display();
            Ok(())
        }
    }
}

/// Builds a client; this is the only place credentials are required.
fn create_client(config: &Config) -> Result<HattrickClient, AppError> {
    config.validate()?;
    HattrickClient::new(&config.hattrick, config.http_timeout_seconds)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Handles `fetch`: prints the CHPP header of any file, or the raw body.
pub async fn handle_fetch(
    config: &Config,
    path: &str,
    raw: bool,
    json: bool,
) -> Result<(), AppError> {
    let client = create_client(config)?;

    if raw {
        let body = client.fetch_raw(path).await?;
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    }

    let envelope: HattrickEnvelope = client.fetch_xml(path).await?;
    if json {
        return print_json(&envelope);
    }

    println!("File:    {}", envelope.file_name);
    println!("Version: {}", envelope.version);
    println!("User:    {}", envelope.user_id);
    println!("Fetched: {}", envelope.fetched_date);
    Ok(())
}

/// Handles `match`: prints teams, score and arena of a match.
pub async fn handle_match(config: &Config, match_id: u64, json: bool) -> Result<(), AppError> {
    let client = create_client(config)?;
    let data: MatchDetailsData = client.fetch_xml(&build_match_details_path(match_id)).await?;

    if json {
        return print_json(&data);
    }

    let details = &data.match_details;
    println!("Match {} ({})", details.match_id, details.match_date);
    println!(
        "{} {} {}",
        details.home_team.team_name,
        details.score(),
        details.away_team.team_name
    );
    if let Some(arena) = &details.arena {
        match arena.sold_total {
            Some(sold) => println!("{} ({sold} spectators)", arena.arena_name),
            None => println!("{}", arena.arena_name),
        }
    }
    if !details.is_finished() {
        println!("(not finished)");
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct WindowOutput {
    anchor: String,
    derived: String,
}

/// Handles `window`: anchor and derived timestamps in local time.
pub fn handle_window(
    config: &Config,
    weekday: Weekday,
    offset_hours: i64,
    time: Option<&str>,
    json: bool,
) -> Result<(), AppError> {
    let time = time.unwrap_or(&config.training_start_utc);
    let offset = Duration::try_hours(offset_hours).ok_or_else(|| {
        AppError::datetime_error(format!("offset of {offset_hours} hours is out of range"))
    })?;

    let window = last_weekday_and_offset(weekday, offset, time)?;
    info!("Computed window for {weekday} at {time} UTC: {window:?}");

    let output = WindowOutput {
        anchor: window.anchor.to_rfc3339(),
        derived: window.derived.to_rfc3339(),
    };
    if json {
        return print_json(&output);
    }

    println!("Anchor:  {}", output.anchor);
    println!("Derived: {}", output.derived);
    Ok(())
}

/// Query parameters accepted by `check-params`, after coercion.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CheckedParams {
    pub weeks: i64,
    pub stadium: i64,
    pub ids: Vec<String>,
    pub finished: bool,
}

/// Runs every validator the way a handler would for a history request.
pub fn coerce_params(params: &HashMap<String, String>) -> Result<CheckedParams, AppError> {
    Ok(CheckedParams {
        weeks: query_int(params, "weeks", 5, Some(is_valid_weeks))?,
        stadium: query_int(params, "stadium", 1, Some(is_valid_stadium))?,
        ids: query_int_list(params, "ids", Vec::new())?,
        finished: query_bool(params, "finished", false)?,
    })
}

/// Handles `check-params`.
pub fn handle_check_params(pairs: &[(String, String)], json: bool) -> Result<(), AppError> {
    let params: HashMap<String, String> = pairs.iter().cloned().collect();
    let checked = coerce_params(&params)?;

    if json {
        return print_json(&checked);
    }

    println!("weeks:    {}", checked.weeks);
    println!("stadium:  {}", checked.stadium);
    println!("ids:      [{}]", checked.ids.join(", "));
    println!("finished: {}", checked.finished);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_coerce_params_defaults() {
        let checked = coerce_params(&params(&[])).unwrap();
        assert_eq!(
            checked,
            CheckedParams {
                weeks: 5,
                stadium: 1,
                ids: vec![],
                finished: false,
            }
        );
    }

    #[test]
    fn test_coerce_params_values() {
        let checked = coerce_params(&params(&[
            ("weeks", "20"),
            ("stadium", "2"),
            ("ids", "11,12"),
            ("finished", "T"),
        ]))
        .unwrap();
        assert_eq!(checked.weeks, 20);
        assert_eq!(checked.stadium, 2);
        assert_eq!(checked.ids, vec!["11", "12"]);
        assert!(checked.finished);
    }

    #[test]
    fn test_coerce_params_reports_first_failure() {
        let err = coerce_params(&params(&[("weeks", "4"), ("ids", "x")])).unwrap_err();
        assert_eq!(err.parameter_key(), Some("weeks"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_handle_window_rejects_bad_time() {
        let config = Config::default();
        let result = handle_window(&config, Weekday::Fri, 72, Some("7am"), false);
        assert!(matches!(result, Err(AppError::TimeFormat { .. })));
    }

    #[tokio::test]
    async fn test_fetch_requires_credentials() {
        let config = Config::default();
        let result = handle_fetch(&config, "?file=worlddetails", false, false).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
