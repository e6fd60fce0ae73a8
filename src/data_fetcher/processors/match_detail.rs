//! Reshapes lineups and statistics of one fixture for the detail view.
//!
//! The two branches fail independently: missing lineups never hide the
//! statistics and vice versa.

use thiserror::Error;
use tracing::{debug, warn};

use crate::data_fetcher::models::{Lineup, StatTeam, StatValue, StatisticSet, Teams};

/// A detail section that cannot be shown for this fixture.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DetailUnavailable {
    #[error("lineups are not available")]
    Lineups,
    #[error("statistics are not available")]
    Statistics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineupPair {
    pub home: Lineup,
    pub away: Lineup,
}

/// One row of the statistics table, aligned by stat type.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedStat {
    pub stat_type: String,
    pub home: StatValue,
    pub away: StatValue,
}

impl CombinedStat {
    pub fn shares(&self) -> (f64, f64) {
        chart_shares(&self.home, &self.away)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsTable {
    pub home_team: StatTeam,
    pub away_team: StatTeam,
    pub rows: Vec<CombinedStat>,
}

/// Both detail sections of a fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDetail {
    pub lineups: Result<LineupPair, DetailUnavailable>,
    pub statistics: Result<StatisticsTable, DetailUnavailable>,
}

impl MatchDetail {
    /// Builds both sections from raw API payloads.
    pub fn build(lineups: Vec<Lineup>, statistics: Vec<StatisticSet>, teams: Option<&Teams>) -> Self {
        Self {
            lineups: resolve_lineups(lineups, teams),
            statistics: resolve_statistics(statistics),
        }
    }
}

/// Picks the home and away lineup.
///
/// Index 0 is home and index 1 is away. When `teams` is given, the team ids
/// must match the fixture's sides or the section is unavailable.
pub fn resolve_lineups(
    lineups: Vec<Lineup>,
    teams: Option<&Teams>,
) -> Result<LineupPair, DetailUnavailable> {
    let mut iter = lineups.into_iter();
    let (Some(home), Some(away)) = (iter.next(), iter.next()) else {
        debug!("Fewer than two lineups returned");
        return Err(DetailUnavailable::Lineups);
    };

    if let Some(teams) = teams
        && (home.team.id != teams.home.id || away.team.id != teams.away.id)
    {
        warn!(
            "Lineup teams ({}, {}) do not match fixture teams ({}, {})",
            home.team.id, away.team.id, teams.home.id, teams.away.id
        );
        return Err(DetailUnavailable::Lineups);
    }

    Ok(LineupPair { home, away })
}

/// Aligns home and away statistics by exact type.
///
/// Home order drives the result. Types only the away side reports are
/// dropped, a type the away side lacks gets 0, and nulls become 0.
pub fn combine_statistics(home: &StatisticSet, away: &StatisticSet) -> Vec<CombinedStat> {
    home.statistics
        .iter()
        .map(|stat| {
            let away_value = away
                .statistics
                .iter()
                .find(|candidate| candidate.stat_type == stat.stat_type)
                .map(|candidate| candidate.value.or_zero())
                .unwrap_or(StatValue::Number(0.0));

            CombinedStat {
                stat_type: stat.stat_type.clone(),
                home: stat.value.or_zero(),
                away: away_value,
            }
        })
        .collect()
}

/// Percentage widths of the home and away bars.
///
/// Both sides at zero split evenly.
///
/// ```
/// use koora_teletext::data_fetcher::models::StatValue;
/// use koora_teletext::data_fetcher::processors::chart_shares;
///
/// assert_eq!(chart_shares(&StatValue::from(3.0), &StatValue::from(1.0)), (75.0, 25.0));
/// assert_eq!(chart_shares(&StatValue::Null, &StatValue::from("0%")), (50.0, 50.0));
/// ```
pub fn chart_shares(home: &StatValue, away: &StatValue) -> (f64, f64) {
    let h = home.magnitude();
    let a = away.magnitude();
    let total = h + a;
    if total > 0.0 {
        (h / total * 100.0, a / total * 100.0)
    } else {
        (50.0, 50.0)
    }
}

/// Builds the statistics table; needs a home and an away set.
pub fn resolve_statistics(
    statistics: Vec<StatisticSet>,
) -> Result<StatisticsTable, DetailUnavailable> {
    let [home, away, ..] = statistics.as_slice() else {
        debug!("Fewer than two statistic sets returned");
        return Err(DetailUnavailable::Statistics);
    };

    Ok(StatisticsTable {
        rows: combine_statistics(home, away),
        home_team: home.team.clone(),
        away_team: away.team.clone(),
    })
}
