//! Football fixtures in a teletext-style terminal viewer, in Arabic or English.
//!
//! This library fetches fixtures, lineups and match statistics from
//! API-Football v3, groups fixtures by league, and renders them as
//! teletext pages laid out left-to-right or right-to-left.
//!
//! # Examples
//!
//! ```rust,no_run
//! use koora_teletext::config::Config;
//! use koora_teletext::data_fetcher::{FootballApi, group_fixtures};
//! use koora_teletext::error::AppError;
//! use koora_teletext::i18n::Language;
//! use koora_teletext::ui::views::{ListPageParams, LoadState, build_list_page};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let api = FootballApi::from_config(&config)?;
//!
//!     // Fetch and group one day of fixtures
//!     let fixtures = api.get_fixtures_by_date("2024-01-15").await?;
//!     let groups = LoadState::Ready(group_fixtures(fixtures, &config.priority_league_ids));
//!
//!     // Create a teletext page and render it to stdout
//!     let page = build_list_page(ListPageParams {
//!         date: "2024-01-15",
//!         tab: None,
//!         groups: &groups,
//!         selected: None,
//!         language: Language::En,
//!         interactive: false,
//!         loading_indicator: None,
//!     });
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod persistence;
pub mod testing_utils;
pub mod ui;
pub mod version;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{FixtureResponse, Lineup, StatisticSet};
pub use data_fetcher::processors::{LeagueGroup, MatchDetail, group_fixtures};
pub use data_fetcher::FootballApi;
pub use error::AppError;
pub use i18n::Language;
pub use persistence::{MatchRecord, MatchStore};
pub use ui::TeletextPage;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
