//! Relative path builders for CHPP files.
//!
//! Every CHPP file is served from the same endpoint and selected through the
//! query string, so these helpers return the part appended to the configured
//! base resource URL.

use crate::constants::chpp;

/// Builds a relative path for any CHPP file.
///
/// # Example
/// ```
/// use hattrick_bridge::hattrick::build_file_path;
///
/// let path = build_file_path("worlddetails", "1.9", &[("leagueID", "100".to_string())]);
/// assert_eq!(path, "?file=worlddetails&version=1.9&leagueID=100");
/// ```
pub fn build_file_path(file: &str, version: &str, params: &[(&str, String)]) -> String {
    let mut path = format!("?file={file}&version={version}");
    for (key, value) in params {
        path.push('&');
        path.push_str(key);
        path.push('=');
        path.push_str(value);
    }
    path
}

/// Builds the match details path for a single match, without match events.
///
/// # Example
/// ```
/// use hattrick_bridge::hattrick::build_match_details_path;
///
/// let path = build_match_details_path(700000001);
/// assert_eq!(
///     path,
///     "?file=matchdetails&version=3.1&matchEvents=false&matchID=700000001&sourceSystem=hattrick"
/// );
/// ```
pub fn build_match_details_path(match_id: u64) -> String {
    build_file_path(
        "matchdetails",
        chpp::MATCH_DETAILS_VERSION,
        &[
            ("matchEvents", "false".to_string()),
            ("matchID", match_id.to_string()),
            ("sourceSystem", "hattrick".to_string()),
        ],
    )
}

/// Builds the arena details path.
///
/// # Example
/// ```
/// use hattrick_bridge::hattrick::build_arena_details_path;
///
/// assert_eq!(build_arena_details_path(4242), "?file=arenadetails&version=1.7&arenaID=4242");
/// ```
pub fn build_arena_details_path(arena_id: u64) -> String {
    build_file_path(
        "arenadetails",
        chpp::ARENA_DETAILS_VERSION,
        &[("arenaID", arena_id.to_string())],
    )
}

/// Builds the training overview path for a team.
///
/// # Example
/// ```
/// use hattrick_bridge::hattrick::build_training_path;
///
/// assert_eq!(
///     build_training_path(1337),
///     "?file=training&version=2.2&actionType=view&teamID=1337"
/// );
/// ```
pub fn build_training_path(team_id: u64) -> String {
    build_file_path(
        "training",
        chpp::TRAINING_VERSION,
        &[
            ("actionType", "view".to_string()),
            ("teamID", team_id.to_string()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_file_path_without_params() {
        assert_eq!(build_file_path("worlddetails", "1.9", &[]), "?file=worlddetails&version=1.9");
    }

    #[test]
    fn test_paths_append_to_base_url() {
        let base = "https://chpp.hattrick.org/chppxml.ashx";
        let url = format!("{base}{}", build_arena_details_path(7));
        let parsed = reqwest::Url::parse(&url).unwrap();

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("file".to_string(), "arenadetails".to_string()),
                ("version".to_string(), "1.7".to_string()),
                ("arenaID".to_string(), "7".to_string()),
            ]
        );
    }
}
