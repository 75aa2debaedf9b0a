use chrono::Weekday;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

fn parse_weekday(value: &str) -> Result<Weekday, String> {
    value
        .parse::<Weekday>()
        .map_err(|_| format!("unknown weekday '{value}', expected e.g. 'fri' or 'Friday'"))
}

fn parse_key_value(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{value}'"))
}

/// Diagnostic tool for the Hattrick CHPP integration.
///
/// Credentials are read from the config file and the CONSUMER_KEY,
/// CONSUMER_SECRET, OAUTH1_TOKEN, OAUTH1_TOKEN_SECRET and BASE_RESOURCE_URL
/// environment variables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Log at debug level, including to stderr.
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Write logs to this file instead of the default location.
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    pub log_file: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a CHPP path (e.g. "?file=worlddetails&version=1.9") and print its header.
    Fetch {
        /// Relative path appended to the base resource URL.
        path: String,

        /// Print the raw XML body instead of the decoded header.
        #[arg(long)]
        raw: bool,
    },

    /// Fetch match details for a match.
    Match {
        match_id: u64,
    },

    /// Print the last occurrence of a weekday at a UTC time and an offset from it.
    Window {
        /// Target weekday, e.g. "fri".
        #[arg(long, value_parser = parse_weekday)]
        weekday: Weekday,

        /// Hours added to the anchor.
        #[arg(long, default_value_t = 72, allow_negative_numbers = true)]
        offset_hours: i64,

        /// Time of day in UTC, HH:MM:SS. Defaults to the configured training start.
        #[arg(long)]
        time: Option<String>,
    },

    /// Run the query validators over key=value pairs (weeks, stadium, ids, finished).
    CheckParams {
        #[arg(value_parser = parse_key_value)]
        pairs: Vec<(String, String)>,
    },

    /// Show the effective configuration with secrets masked.
    Config,
}
