pub mod grouping;
pub mod match_detail;
pub mod time_formatting;

pub use grouping::{LeagueGroup, group_fixtures};
pub use match_detail::{
    CombinedStat, DetailUnavailable, LineupPair, MatchDetail, StatisticsTable, chart_shares,
    combine_statistics, resolve_lineups, resolve_statistics,
};
pub use time_formatting::{
    DayTab, INVALID_TIME, date_for_tab, format_date, local_time, local_time_in, local_today,
    parse_date, to_arabic_indic_digits,
};
