//! Mirror of fixtures into a hosted Postgres database through its REST gateway.
//!
//! Failures never propagate: reads fall back to an empty list and inserts
//! to `None`, with the cause logged.

use futures::future::join_all;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info, instrument, warn};

use crate::config::Config;
use crate::constants::MATCHES_TABLE;
use crate::data_fetcher::api::create_http_client_with_headers;
use crate::data_fetcher::models::FixtureResponse;
use crate::error::AppError;

/// One row of the `matches` table.
///
/// Columns this crate does not know about are kept in `extra` so reads
/// round-trip whatever the table holds. Only `fixture_id` is required;
/// rows written by other clients may leave the rest empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub fixture_id: u64,
    #[serde(default)]
    pub league_id: u32,
    #[serde(default)]
    pub league_name: String,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    /// Kickoff as an ISO-8601 string.
    #[serde(default)]
    pub kickoff: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub home_goals: Option<u32>,
    #[serde(default)]
    pub away_goals: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<&FixtureResponse> for MatchRecord {
    fn from(f: &FixtureResponse) -> Self {
        Self {
            fixture_id: f.fixture.id,
            league_id: f.league.id,
            league_name: f.league.name.clone(),
            home_team: f.teams.home.name.clone(),
            away_team: f.teams.away.name.clone(),
            kickoff: f.fixture.date.clone(),
            status: f.fixture.status.short.clone(),
            home_goals: f.goals.home,
            away_goals: f.goals.away,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchStore {
    client: Client,
    table_url: String,
}

impl MatchStore {
    /// Returns `Ok(None)` when no database is configured.
    pub fn from_config(config: &Config) -> Result<Option<Self>, AppError> {
        match (&config.database_url, &config.database_key) {
            (Some(url), Some(key)) => {
                Self::new(url, key, config.http_timeout_seconds).map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn new(base_url: &str, key: &str, timeout_seconds: u64) -> Result<Self, AppError> {
        let client = create_http_client_with_headers(timeout_seconds, auth_headers(key)?)?;
        Ok(Self {
            client,
            table_url: format!(
                "{}/rest/v1/{}",
                base_url.trim_end_matches('/'),
                MATCHES_TABLE
            ),
        })
    }

    /// All rows of the `matches` table; empty on any failure.
    #[instrument(skip(self))]
    pub async fn get_matches(&self) -> Vec<MatchRecord> {
        match self.try_get_matches().await {
            Ok(records) => {
                info!("Fetched {} mirrored matches", records.len());
                records
            }
            Err(e) => {
                error!("Error fetching mirrored matches: {e}");
                Vec::new()
            }
        }
    }

    /// Inserts one row and returns what the database stored; `None` on failure.
    #[instrument(skip(self, record), fields(fixture_id = record.fixture_id))]
    pub async fn add_match(&self, record: &MatchRecord) -> Option<Vec<MatchRecord>> {
        match self.try_add_match(record).await {
            Ok(stored) => {
                info!("Mirrored fixture {}", record.fixture_id);
                Some(stored)
            }
            Err(e) => {
                error!("Error adding match {}: {e}", record.fixture_id);
                None
            }
        }
    }

    /// Inserts every fixture concurrently and returns how many were stored.
    pub async fn sync_fixtures(&self, fixtures: &[FixtureResponse]) -> usize {
        let records: Vec<MatchRecord> = fixtures.iter().map(MatchRecord::from).collect();
        let results = join_all(records.iter().map(|record| self.add_match(record))).await;
        let stored = results.iter().filter(|r| r.is_some()).count();
        if stored < records.len() {
            warn!("Mirrored {} of {} fixtures", stored, records.len());
        }
        stored
    }

    async fn try_get_matches(&self) -> Result<Vec<MatchRecord>, AppError> {
        let response = self
            .client
            .get(&self.table_url)
            .query(&[("select", "*")])
            .send()
            .await?;
        let response = check_status(response, &self.table_url)?;
        let rows = response.json::<Vec<Value>>().await?;
        Ok(decode_rows(rows))
    }

    async fn try_add_match(&self, record: &MatchRecord) -> Result<Vec<MatchRecord>, AppError> {
        let response = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;
        let response = check_status(response, &self.table_url)?;
        Ok(response.json::<Vec<MatchRecord>>().await?)
    }
}

/// Decodes rows one by one, skipping the ones that are not matches.
fn decode_rows(rows: Vec<Value>) -> Vec<MatchRecord> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<MatchRecord>(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping mirrored row that is not a match: {e}");
                None
            }
        })
        .collect()
}

fn auth_headers(key: &str) -> Result<HeaderMap, AppError> {
    let invalid = |e: reqwest::header::InvalidHeaderValue| {
        AppError::config_error(format!("Database key is not a valid header value: {e}"))
    };
    let mut apikey = HeaderValue::from_str(key.trim()).map_err(invalid)?;
    apikey.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", key.trim())).map_err(invalid)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("apikey", apikey);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

fn check_status(response: reqwest::Response, url: &str) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    Err(match code {
        404 => AppError::api_not_found(url),
        400..=499 => AppError::api_client_error(code, reason, url),
        _ => AppError::api_server_error(code, reason, url),
    })
}
