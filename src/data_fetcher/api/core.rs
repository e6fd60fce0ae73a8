use crate::config::Config;
use crate::data_fetcher::models::{FixtureResponse, Lineup, StatisticSet};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_api_client;
use super::urls::{build_fixture_url, build_fixtures_url, build_lineups_url, build_statistics_url};

/// Read-only client for the football data service.
///
/// Cheap to clone: the inner `reqwest::Client` is reference counted, so a
/// clone can be moved into a spawned task.
#[derive(Debug, Clone)]
pub struct FootballApi {
    client: Client,
    base_url: String,
}

impl FootballApi {
    /// Builds a client carrying the configured host/key headers and timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            client: create_api_client(config)?,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All fixtures scheduled on `date` (`YYYY-MM-DD`), in upstream order.
    #[instrument(skip(self))]
    pub async fn get_fixtures_by_date(&self, date: &str) -> Result<Vec<FixtureResponse>, AppError> {
        let url = build_fixtures_url(&self.base_url, date);
        let fixtures: Vec<FixtureResponse> = fetch(&self.client, &url).await?;
        info!("Fetched {} fixtures for {}", fixtures.len(), date);
        Ok(fixtures)
    }

    /// One fixture by id. An empty result is reported as `ApiNoData`.
    #[instrument(skip(self))]
    pub async fn get_fixture(&self, fixture_id: u64) -> Result<FixtureResponse, AppError> {
        let url = build_fixture_url(&self.base_url, fixture_id);
        let fixtures: Vec<FixtureResponse> = fetch(&self.client, &url).await?;
        fixtures
            .into_iter()
            .next()
            .ok_or_else(|| AppError::api_no_data(format!("Fixture {fixture_id} not found"), url))
    }

    /// Lineups of both teams; index 0 is expected to be the home side.
    #[instrument(skip(self))]
    pub async fn get_lineups(&self, fixture_id: u64) -> Result<Vec<Lineup>, AppError> {
        let url = build_lineups_url(&self.base_url, fixture_id);
        let lineups: Vec<Lineup> = fetch(&self.client, &url).await?;
        info!("Fetched {} lineups for fixture {}", lineups.len(), fixture_id);
        Ok(lineups)
    }

    /// Match statistics of both teams; index 0 is expected to be the home side.
    #[instrument(skip(self))]
    pub async fn get_statistics(&self, fixture_id: u64) -> Result<Vec<StatisticSet>, AppError> {
        let url = build_statistics_url(&self.base_url, fixture_id);
        let statistics: Vec<StatisticSet> = fetch(&self.client, &url).await?;
        info!(
            "Fetched {} statistic sets for fixture {}",
            statistics.len(),
            fixture_id
        );
        Ok(statistics)
    }

    /// Fetches lineups and statistics concurrently and waits for both.
    ///
    /// If either request fails the whole call fails with that error; there
    /// is no partial result.
    #[instrument(skip(self))]
    pub async fn get_match_details(
        &self,
        fixture_id: u64,
    ) -> Result<(Vec<Lineup>, Vec<StatisticSet>), AppError> {
        tokio::try_join!(self.get_lineups(fixture_id), self.get_statistics(fixture_id))
    }
}
