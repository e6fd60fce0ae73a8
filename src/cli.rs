use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::data_fetcher::processors::DayTab;
use crate::i18n::Language;

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

/// Day tab selectable from the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayArg {
    Yesterday,
    Today,
    Tomorrow,
}

impl From<DayArg> for DayTab {
    fn from(day: DayArg) -> Self {
        match day {
            DayArg::Yesterday => DayTab::Yesterday,
            DayArg::Today => DayTab::Today,
            DayArg::Tomorrow => DayTab::Tomorrow,
        }
    }
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (print and exit)
/// - a single fixture or the mirror is requested
/// - config operations are requested
/// - --version flag is set
/// - --debug mode is enabled (debug mode always runs once and exits)
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || args.fixture.is_some()
        || args.sync_matches
        || args.list_mirrored
        || args.new_api_key.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.version
        || args.debug
}

/// Football fixtures in a teletext-style terminal viewer, in Arabic or English.
///
/// Shows yesterday's, today's and tomorrow's fixtures grouped by league,
/// with lineups and match statistics for each fixture.
///
/// In interactive mode (default):
/// - Use ←/→ or 1/2/3 to switch between yesterday, today and tomorrow
/// - Use ↑/↓ to select a fixture and Enter to open its details
/// - Use Tab to switch between lineups and statistics, Esc to go back
/// - Press 'l' to switch language, 'r' to refetch, 'q' to quit
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print the fixture list once and exit. Useful for scripts.
    /// The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Day to show on start.
    #[arg(long = "day", value_enum, default_value_t = DayArg::Today, help_heading = "Display Options")]
    pub day: DayArg,

    /// Show fixtures for a specific date in YYYY-MM-DD format instead of a day tab.
    #[arg(long = "date", short = 'd', help_heading = "Display Options")]
    pub date: Option<String>,

    /// Print lineups and statistics of one fixture and exit.
    #[arg(long = "fixture", short = 'f', value_name = "ID", help_heading = "Display Options")]
    pub fixture: Option<u64>,

    /// Display language (ar or en).
    #[arg(long = "lang", default_value_t = Language::Ar, help_heading = "Display Options")]
    pub lang: Language,

    /// Insert the day's fixtures into the configured database mirror.
    #[arg(long = "sync-matches", help_heading = "Database Mirror")]
    pub sync_matches: bool,

    /// List every match stored in the database mirror.
    #[arg(long = "list-mirrored", help_heading = "Database Mirror")]
    pub list_mirrored: bool,

    /// Update API key in config. Will prompt for a new key if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_KEY",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Print once and also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_interactive() {
        let args = Args::parse_from(["koora_teletext"]);
        assert!(!is_noninteractive_mode(&args));
        assert_eq!(args.day, DayArg::Today);
        assert_eq!(args.lang, Language::Ar);
    }

    #[test]
    fn test_once_with_options() {
        let args = Args::parse_from([
            "koora_teletext",
            "--once",
            "--day",
            "tomorrow",
            "--lang",
            "en",
        ]);
        assert!(is_noninteractive_mode(&args));
        assert_eq!(DayTab::from(args.day), DayTab::Tomorrow);
        assert_eq!(args.lang, Language::En);
    }

    #[test]
    fn test_config_without_value() {
        let args = Args::parse_from(["koora_teletext", "--config"]);
        assert_eq!(args.new_api_key.as_deref(), Some(""));
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_fixture_and_mirror_flags_are_noninteractive() {
        let args = Args::parse_from(["koora_teletext", "--fixture", "1035037"]);
        assert_eq!(args.fixture, Some(1035037));
        assert!(is_noninteractive_mode(&args));

        let args = Args::parse_from(["koora_teletext", "--list-mirrored"]);
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_invalid_language_rejected() {
        assert!(Args::try_parse_from(["koora_teletext", "--lang", "fi"]).is_err());
    }
}
