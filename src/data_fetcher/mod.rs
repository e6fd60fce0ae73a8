pub mod api;
pub mod models;
pub mod processors;

pub use api::FootballApi;
pub use models::{FixtureResponse, Lineup, StatisticSet};
pub use processors::{LeagueGroup, MatchDetail, group_fixtures};
