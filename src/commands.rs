use crate::cli::Args;
use crate::config::{Config, user_prompts::prompt_for_api_key};
use crate::data_fetcher::FootballApi;
use crate::data_fetcher::models::FixtureResponse;
use crate::data_fetcher::processors::{
    DayTab, LeagueGroup, MatchDetail, date_for_tab, group_fixtures, local_today, parse_date,
};
use crate::error::AppError;
use crate::i18n::Language;
use crate::persistence::{MatchRecord, MatchStore};
use crate::ui::teletext::{RowStyle, TeletextPage};
use crate::ui::views::{
    DetailPageParams, DetailTab, ListPageParams, LoadState, build_detail_page, build_list_page,
};
use crate::version;
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use tracing::{info, warn};

const TERMINAL_TITLE: &str = "KOORA TELETEXT";

/// Date to show plus the day tab it came from; no tab for an explicit `--date`.
///
/// An explicit date is validated before anything is fetched.
pub fn resolve_start_date(args: &Args) -> Result<(String, Option<DayTab>), AppError> {
    match &args.date {
        Some(date) => {
            parse_date(date)?;
            Ok((date.clone(), None))
        }
        None => {
            let tab = DayTab::from(args.day);
            Ok((date_for_tab(tab, local_today()), Some(tab)))
        }
    }
}

/// Handles the --version command.
pub async fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();
    println!();
    version::print_version_status_box(version::version_status_lines());

    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();
    Config::display().await?;

    Ok(())
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Starts from the existing file when there is one, so updating one field
/// never requires the others to be valid.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_existing().await?.unwrap_or_default();

    if let Some(new_key) = &args.new_api_key {
        let key = if new_key.trim().is_empty() {
            prompt_for_api_key().await?
        } else {
            new_key.trim().to_string()
        };
        if key.is_empty() {
            return Err(AppError::config_error("API key cannot be empty"));
        }
        config.api_key = key;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Groups a fetch result for display; any failure becomes `Failed`.
pub fn list_state(
    result: &Result<Vec<FixtureResponse>, AppError>,
    priority_league_ids: &[u32],
) -> LoadState<Vec<LeagueGroup>> {
    match result {
        Ok(fixtures) => LoadState::Ready(group_fixtures(fixtures.clone(), priority_league_ids)),
        Err(e) => {
            warn!("Fixture fetch failed: {e}");
            LoadState::Failed
        }
    }
}

/// Handles the --once command (quick view mode).
///
/// Prints the fixture list for the requested day and exits. With
/// --sync-matches the fetched fixtures are also mirrored to the database.
pub async fn handle_once_command(
    args: &Args,
    config: &Config,
    api: &FootballApi,
) -> Result<(), AppError> {
    let (date, tab) = resolve_start_date(args)?;
    let result = api.get_fixtures_by_date(&date).await;
    let groups = list_state(&result, &config.priority_league_ids);

    let page = build_list_page(ListPageParams {
        date: &date,
        tab,
        groups: &groups,
        selected: None,
        language: args.lang,
        interactive: false,
        loading_indicator: None,
    });

    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    page.render_buffered(&mut stdout())?;
    println!();

    if args.sync_matches
        && let Ok(fixtures) = &result
    {
        sync_matches(config, fixtures).await?;
    }

    Ok(())
}

async fn sync_matches(config: &Config, fixtures: &[FixtureResponse]) -> Result<(), AppError> {
    let Some(store) = MatchStore::from_config(config)? else {
        println!("No database configured. Set database_url and database_key in the config file.");
        return Ok(());
    };
    let stored = store.sync_fixtures(fixtures).await;
    info!("Mirrored {} of {} fixtures", stored, fixtures.len());
    println!("Mirrored {stored} of {} fixtures.", fixtures.len());
    Ok(())
}

/// Pages for one fixture: lineups then statistics.
///
/// A failed fixture lookup yields a single page with the localized error.
pub async fn fixture_pages(
    fixture_id: u64,
    language: Language,
    api: &FootballApi,
) -> Vec<TeletextPage> {
    let fixture = match api.get_fixture(fixture_id).await {
        Ok(fixture) => fixture,
        Err(e) => {
            warn!("Fixture lookup for {fixture_id} failed: {e}");
            let t = language.translations();
            let mut page = TeletextPage::new(t.title, &format!("#{fixture_id}"), language, false);
            page.add_line(t.error, RowStyle::Error);
            return vec![page];
        }
    };
    let detail = match api.get_match_details(fixture_id).await {
        Ok((lineups, statistics)) => {
            LoadState::Ready(MatchDetail::build(lineups, statistics, Some(&fixture.teams)))
        }
        Err(e) => {
            warn!("Detail fetch for fixture {fixture_id} failed: {e}");
            LoadState::Failed
        }
    };

    let tabs: &[DetailTab] = match detail {
        LoadState::Ready(_) => &[DetailTab::Lineups, DetailTab::Statistics],
        _ => &[DetailTab::Lineups],
    };
    tabs.iter()
        .map(|tab| {
            build_detail_page(DetailPageParams {
                fixture: &fixture,
                detail: &detail,
                tab: *tab,
                language,
                interactive: false,
                loading_indicator: None,
            })
        })
        .collect()
}

/// Handles the --fixture command.
pub async fn handle_fixture_command(
    fixture_id: u64,
    language: Language,
    api: &FootballApi,
) -> Result<(), AppError> {
    let pages = fixture_pages(fixture_id, language, api).await;

    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    for page in pages {
        page.render_buffered(&mut stdout())?;
        println!();
    }

    Ok(())
}

/// One printable line per mirrored match.
pub fn format_mirrored_match(record: &MatchRecord) -> String {
    let score = match (record.home_goals, record.away_goals) {
        (Some(home), Some(away)) => format!("{home}-{away}"),
        _ => "-".to_string(),
    };
    format!(
        "{:>10}  {}  {} {} {}  [{}] {}",
        record.fixture_id,
        record.kickoff,
        record.home_team,
        score,
        record.away_team,
        record.status,
        record.league_name
    )
}

/// Handles the --list-mirrored command.
pub async fn handle_list_mirrored_command(config: &Config) -> Result<(), AppError> {
    let Some(store) = MatchStore::from_config(config)? else {
        println!("No database configured. Set database_url and database_key in the config file.");
        return Ok(());
    };

    let records = store.get_matches().await;
    if records.is_empty() {
        println!("No mirrored matches.");
    }
    for record in &records {
        println!("{}", format_mirrored_match(record));
    }

    Ok(())
}
