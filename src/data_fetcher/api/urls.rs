//! URL building utilities for API endpoints

/// Builds the URL listing every fixture played on one calendar day.
///
/// # Example
/// ```
/// use koora_teletext::data_fetcher::api::build_fixtures_url;
///
/// let url = build_fixtures_url("https://api.example.com", "2024-01-15");
/// assert_eq!(url, "https://api.example.com/fixtures?date=2024-01-15");
/// ```
pub fn build_fixtures_url(base_url: &str, date: &str) -> String {
    format!("{}/fixtures?date={date}", trim_base(base_url))
}

/// Builds the URL for a single fixture looked up by id.
pub fn build_fixture_url(base_url: &str, fixture_id: u64) -> String {
    format!("{}/fixtures?id={fixture_id}", trim_base(base_url))
}

/// Builds the URL for both teams' lineups of one fixture.
///
/// # Example
/// ```
/// use koora_teletext::data_fetcher::api::build_lineups_url;
///
/// let url = build_lineups_url("https://api.example.com", 1035037);
/// assert_eq!(url, "https://api.example.com/fixtures/lineups?fixture=1035037");
/// ```
pub fn build_lineups_url(base_url: &str, fixture_id: u64) -> String {
    format!("{}/fixtures/lineups?fixture={fixture_id}", trim_base(base_url))
}

/// Builds the URL for both teams' match statistics of one fixture.
///
/// # Example
/// ```
/// use koora_teletext::data_fetcher::api::build_statistics_url;
///
/// let url = build_statistics_url("https://api.example.com/", 1035037);
/// assert_eq!(url, "https://api.example.com/fixtures/statistics?fixture=1035037");
/// ```
pub fn build_statistics_url(base_url: &str, fixture_id: u64) -> String {
    format!(
        "{}/fixtures/statistics?fixture={fixture_id}",
        trim_base(base_url)
    )
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}
