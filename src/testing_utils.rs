use chrono::DateTime;

use crate::data_fetcher::models::{
    Coach, Fixture, FixtureResponse, FixtureStatus, League, Lineup, Periods, Player, PlayerEntry,
    Score, ScorePair, StatDetail, StatTeam, StatValue, StatisticSet, Team, Teams, Venue,
};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a not-started fixture.
    ///
    /// Team ids are derived from the fixture id: home is `id * 10 + 1`,
    /// away is `id * 10 + 2`.
    pub fn fixture(id: u64, league_id: u32, league_name: &str, timestamp: i64) -> FixtureResponse {
        let date = DateTime::from_timestamp(timestamp, 0)
            .map(|d| d.to_rfc3339())
            .unwrap_or_default();

        FixtureResponse {
            fixture: Fixture {
                id,
                referee: None,
                timezone: "UTC".to_string(),
                date,
                timestamp,
                periods: Periods::default(),
                venue: Venue::default(),
                status: FixtureStatus {
                    long: "Not Started".to_string(),
                    short: "NS".to_string(),
                    elapsed: None,
                },
            },
            league: League {
                id: league_id,
                name: league_name.to_string(),
                country: "World".to_string(),
                logo: String::new(),
                flag: None,
                season: 2024,
                round: "Regular Season - 1".to_string(),
            },
            teams: Teams {
                home: Self::team(id * 10 + 1, &format!("Home {id}")),
                away: Self::team(id * 10 + 2, &format!("Away {id}")),
            },
            goals: ScorePair::default(),
            score: Score::default(),
        }
    }

    /// Creates a finished fixture with the given final score.
    pub fn finished_fixture(
        id: u64,
        league_id: u32,
        league_name: &str,
        home_goals: u32,
        away_goals: u32,
    ) -> FixtureResponse {
        let mut fixture = Self::fixture(id, league_id, league_name, 1_705_348_800);
        fixture.fixture.status = FixtureStatus {
            long: "Match Finished".to_string(),
            short: "FT".to_string(),
            elapsed: Some(90),
        };
        fixture.goals = ScorePair {
            home: Some(home_goals),
            away: Some(away_goals),
        };
        fixture.score.fulltime = fixture.goals;
        fixture
    }

    /// Creates a fixture in play at the given minute.
    pub fn live_fixture(id: u64, league_id: u32, league_name: &str, minute: u32) -> FixtureResponse {
        let mut fixture = Self::fixture(id, league_id, league_name, 1_705_348_800);
        fixture.fixture.status = FixtureStatus {
            long: "First Half".to_string(),
            short: "1H".to_string(),
            elapsed: Some(minute),
        };
        fixture.goals = ScorePair {
            home: Some(0),
            away: Some(0),
        };
        fixture
    }

    pub fn team(id: u64, name: &str) -> Team {
        Team {
            id,
            name: name.to_string(),
            logo: String::new(),
            winner: None,
        }
    }

    /// Creates a lineup with two starters and one substitute.
    pub fn lineup(team_id: u64, formation: &str) -> Lineup {
        Lineup {
            team: Self::team(team_id, &format!("Team {team_id}")),
            formation: Some(formation.to_string()),
            start_xi: vec![
                Self::player(1, "Keeper", "G"),
                Self::player(9, "Striker", "F"),
            ],
            substitutes: vec![Self::player(12, "Bench", "D")],
            coach: Coach {
                id: Some(team_id),
                name: Some(format!("Coach {team_id}")),
                photo: None,
            },
        }
    }

    pub fn player(number: u32, name: &str, pos: &str) -> PlayerEntry {
        PlayerEntry {
            player: Player {
                id: Some(u64::from(number) + 1000),
                name: name.to_string(),
                number: Some(number),
                pos: Some(pos.to_string()),
                grid: None,
            },
        }
    }

    /// Creates one team's statistics from `(type, value)` pairs.
    pub fn stat_set(team_id: u64, stats: &[(&str, StatValue)]) -> StatisticSet {
        StatisticSet {
            team: StatTeam {
                id: team_id,
                name: format!("Team {team_id}"),
                logo: String::new(),
            },
            statistics: stats
                .iter()
                .map(|(stat_type, value)| StatDetail {
                    stat_type: (*stat_type).to_string(),
                    value: value.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::DisplayState;

    #[test]
    fn test_builders_produce_expected_states() {
        assert_eq!(
            TestDataBuilder::fixture(1, 39, "Premier League", 0).display_state(),
            DisplayState::Scheduled
        );
        assert_eq!(
            TestDataBuilder::finished_fixture(2, 39, "Premier League", 2, 1).display_state(),
            DisplayState::Finished
        );
        assert_eq!(
            TestDataBuilder::live_fixture(3, 39, "Premier League", 55).display_state(),
            DisplayState::Live { elapsed: Some(55) }
        );
    }

    #[test]
    fn test_fixture_date_matches_timestamp() {
        let fixture = TestDataBuilder::fixture(1, 39, "Premier League", 1_705_348_800);
        assert!(fixture.fixture.date.starts_with("2024-01-15T20:00:00"));
        assert_eq!(fixture.teams.home.id, 11);
        assert_eq!(fixture.teams.away.id, 12);
    }
}
