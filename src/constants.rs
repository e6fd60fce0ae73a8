//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, endpoint defaults and environment
//! variable names so that the rest of the codebase can refer to them by name.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default base URL of the football data service
pub const DEFAULT_API_BASE_URL: &str = "https://v3.football.api-sports.io";

/// Default value for the `x-rapidapi-host` header
pub const DEFAULT_API_HOST: &str = "v3.football.api-sports.io";

/// Name of the hosted database collection fixtures are mirrored into
pub const MATCHES_TABLE: &str = "matches";

/// Log file name used when no custom path is configured
pub const LOG_FILE_NAME: &str = "koora_teletext.log";

/// League ids shown first, in this order.
/// La Liga, Premier League, Ligue 1, Botola Pro, Serie A.
pub const DEFAULT_PRIORITY_LEAGUE_IDS: [u32; 5] = [140, 39, 61, 200, 135];

/// Request header names used by the football data service
pub mod headers {
    pub const API_HOST: &str = "x-rapidapi-host";
    pub const API_KEY: &str = "x-rapidapi-key";
}

/// UI polling and layout values
pub mod ui {
    /// How long the interactive loop waits for a key event before checking fetch results
    pub const EVENT_POLL_MS: u64 = 100;

    /// Rendering width used when printing once (no terminal size available)
    pub const DEFAULT_RENDER_WIDTH: u16 = 80;

    /// Width of one team name column in the fixture list
    pub const TEAM_NAME_WIDTH: usize = 22;

    /// Width of the statistics bar in the detail view
    pub const STAT_BAR_WIDTH: usize = 30;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the API key
    pub const API_KEY: &str = "KOORA_API_KEY";

    /// Environment variable for the API base URL
    pub const API_BASE_URL: &str = "KOORA_API_BASE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "KOORA_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "KOORA_HTTP_TIMEOUT";

    /// Environment variable for the hosted database URL
    pub const DATABASE_URL: &str = "KOORA_DATABASE_URL";

    /// Environment variable for the hosted database key
    pub const DATABASE_KEY: &str = "KOORA_DATABASE_KEY";
}
