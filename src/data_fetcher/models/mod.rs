pub mod envelope;
pub mod fixtures;
pub mod lineups;
pub mod statistics;

pub use envelope::ApiEnvelope;
pub use fixtures::{
    DisplayState, Fixture, FixtureResponse, FixtureStatus, League, Periods, Score, ScorePair,
    Team, Teams, Venue,
};
pub use lineups::{Coach, Lineup, Player, PlayerEntry};
pub use statistics::{StatDetail, StatTeam, StatValue, StatisticSet};
