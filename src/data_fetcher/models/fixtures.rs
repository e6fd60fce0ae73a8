use serde::{Deserialize, Serialize};

/// One entry of the `fixtures?date=` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureResponse {
    pub fixture: Fixture,
    pub league: League,
    pub teams: Teams,
    pub goals: ScorePair,
    #[serde(default)]
    pub score: Score,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    pub id: u64,
    pub referee: Option<String>,
    #[serde(default)]
    pub timezone: String,
    /// Kickoff as an ISO-8601 string, e.g. `2024-01-15T20:00:00+00:00`.
    pub date: String,
    /// Kickoff as a Unix timestamp in seconds.
    pub timestamp: i64,
    #[serde(default)]
    pub periods: Periods,
    #[serde(default)]
    pub venue: Venue,
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Periods {
    pub first: Option<i64>,
    pub second: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureStatus {
    pub long: String,
    pub short: String,
    pub elapsed: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub logo: String,
    pub flag: Option<String>,
    pub season: i32,
    #[serde(default)]
    pub round: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    /// `None` while the match is scheduled or in progress.
    #[serde(default)]
    pub winner: Option<bool>,
}

/// Home/away goal pair. Both sides are `None` before kickoff.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScorePair {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Score {
    #[serde(default)]
    pub halftime: ScorePair,
    #[serde(default)]
    pub fulltime: ScorePair,
    #[serde(default)]
    pub extratime: ScorePair,
    #[serde(default)]
    pub penalty: ScorePair,
}

/// How a fixture should be presented in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Final score is known.
    Finished,
    /// In play or at half time; `elapsed` is the minute counter when reported.
    Live { elapsed: Option<u32> },
    /// Not started; show the kickoff time.
    Scheduled,
}

/// Status codes that mean the final whistle has gone.
const FINISHED_CODES: [&str; 3] = ["FT", "AET", "PEN"];

impl FixtureResponse {
    pub fn display_state(&self) -> DisplayState {
        let status = &self.fixture.status;
        if FINISHED_CODES.contains(&status.short.as_str()) {
            DisplayState::Finished
        } else if status.short == "HT" || status.elapsed.is_some_and(|m| m > 0) {
            DisplayState::Live {
                elapsed: status.elapsed,
            }
        } else {
            DisplayState::Scheduled
        }
    }

    /// Current goals as `home - away`, with blanks for unknown sides.
    pub fn score_line(&self) -> String {
        let side = |g: Option<u32>| g.map(|g| g.to_string()).unwrap_or_default();
        format!("{} - {}", side(self.goals.home), side(self.goals.away))
    }
}
