use koora_teletext::{
    config::Config,
    data_fetcher::models::StatValue,
    data_fetcher::processors::{
        DayTab, LeagueGroup, MatchDetail, chart_shares, combine_statistics, date_for_tab, group_fixtures,
    },
    i18n::Language,
    testing_utils::TestDataBuilder,
    ui::views::{
        DetailPageParams, DetailTab, ListPageParams, LoadState, build_detail_page, build_list_page,
    },
};
use chrono::{Local, TimeZone};
use tempfile::tempdir;

const PRIORITY: [u32; 5] = [140, 39, 61, 200, 135];

/// Priority leagues come first in table order, the rest alphabetically.
#[test]
fn test_grouping_orders_leagues_and_fixtures() {
    let fixtures = vec![
        TestDataBuilder::fixture(1, 2, "UEFA Champions League", 300),
        TestDataBuilder::fixture(2, 39, "Premier League", 200),
        TestDataBuilder::fixture(3, 140, "La Liga", 500),
        TestDataBuilder::fixture(4, 39, "Premier League", 100),
        TestDataBuilder::fixture(5, 307, "Saudi Pro League", 50),
        TestDataBuilder::fixture(6, 140, "La Liga", 400),
    ];

    let groups = group_fixtures(fixtures, &PRIORITY);
    let league_ids: Vec<u32> = groups.iter().map(|g| g.league.id).collect();
    assert_eq!(league_ids, vec![140, 39, 307, 2]);

    // Every fixture lands in exactly one group, sorted by kickoff
    let total: usize = groups.iter().map(|g| g.fixtures.len()).sum();
    assert_eq!(total, 6);
    for group in &groups {
        assert!(
            group
                .fixtures
                .windows(2)
                .all(|w| w[0].fixture.timestamp <= w[1].fixture.timestamp)
        );
        assert!(group.fixtures.iter().all(|f| f.league.id == group.league.id));
    }
    let la_liga: Vec<u64> = groups[0].fixtures.iter().map(|f| f.fixture.id).collect();
    assert_eq!(la_liga, vec![6, 3]);
}

#[test]
fn test_grouping_empty_input() {
    assert!(group_fixtures(Vec::new(), &PRIORITY).is_empty());
}

#[test]
fn test_day_tabs_resolve_to_consecutive_dates() {
    let now = Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().unwrap();
    let dates: Vec<String> = DayTab::ALL
        .iter()
        .map(|tab| date_for_tab(*tab, now))
        .collect();
    assert_eq!(dates.len(), 3);
    assert!(dates[0] < dates[1] && dates[1] < dates[2]);
}

#[test]
fn test_statistics_aggregation_fills_missing_away_values() {
    let home = TestDataBuilder::stat_set(
        1,
        &[
            ("Shots on Goal", StatValue::Number(6.0)),
            ("Ball Possession", "55%".into()),
            ("Red Cards", StatValue::Null),
        ],
    );
    let away = TestDataBuilder::stat_set(2, &[("Shots on Goal", StatValue::Number(2.0))]);

    let rows = combine_statistics(&home, &away);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].stat_type, "Shots on Goal");
    assert_eq!(rows[0].away, StatValue::Number(2.0));
    assert_eq!(rows[1].away, StatValue::Number(0.0));
    assert_eq!(rows[2].home, StatValue::Number(0.0));

    assert_eq!(chart_shares(&rows[0].home, &rows[0].away), (75.0, 25.0));
    assert_eq!(chart_shares(&rows[2].home, &rows[2].away), (50.0, 50.0));
}

#[test]
fn test_list_page_in_both_languages() {
    let groups = LoadState::Ready(group_fixtures(
        vec![
            TestDataBuilder::finished_fixture(1, 39, "Premier League", 3, 1),
            TestDataBuilder::live_fixture(2, 140, "La Liga", 67),
        ],
        &PRIORITY,
    ));

    for language in [Language::En, Language::Ar] {
        let page = build_list_page(ListPageParams {
            date: "2024-01-15",
            tab: Some(DayTab::Today),
            groups: &groups,
            selected: Some(1),
            language,
            interactive: false,
            loading_indicator: None,
        });
        let lines = page.plain_lines();
        assert!(lines.iter().any(|l| l.contains("La Liga")));
        assert!(lines.iter().any(|l| l.contains("3 - 1") || l.contains("3-1")));
        assert!(lines.iter().any(|l| l.contains("67'")));

        let rendered = page.render_to_string();
        assert!(rendered.contains("Premier League"));
    }
}

#[test]
fn test_list_page_error_and_empty_messages() {
    let render = |groups: &LoadState<Vec<LeagueGroup>>| {
        build_list_page(ListPageParams {
            date: "2024-01-15",
            tab: None,
            groups,
            selected: None,
            language: Language::En,
            interactive: false,
            loading_indicator: None,
        })
        .plain_lines()
        .join("\n")
    };

    assert!(render(&LoadState::Failed).contains("An error occurred while fetching data."));
    assert!(render(&LoadState::Ready(Vec::new())).contains("No matches found for this day."));
}

#[test]
fn test_detail_page_sections() {
    let fixture = TestDataBuilder::finished_fixture(7, 39, "Premier League", 2, 0);
    let detail = LoadState::Ready(MatchDetail::build(
        vec![
            TestDataBuilder::lineup(71, "4-3-3"),
            TestDataBuilder::lineup(72, "3-5-2"),
        ],
        Vec::new(),
        Some(&fixture.teams),
    ));

    let page = |tab| {
        build_detail_page(DetailPageParams {
            fixture: &fixture,
            detail: &detail,
            tab,
            language: Language::En,
            interactive: false,
            loading_indicator: None,
        })
        .plain_lines()
        .join("\n")
    };

    let lineups = page(DetailTab::Lineups);
    assert!(lineups.contains("Team 71 (4-3-3)"));
    assert!(lineups.contains("Starting XI"));
    assert!(lineups.contains("Coach: Coach 72"));

    let stats = page(DetailTab::Statistics);
    assert!(stats.contains("Statistics are not available."));
}

#[tokio::test]
async fn test_config_roundtrip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let path = path.to_str().unwrap();

    let config = Config {
        api_key: "secret-key".to_string(),
        log_file_path: Some("/tmp/koora.log".to_string()),
        database_url: Some("https://db.example.com".to_string()),
        database_key: Some("db-key".to_string()),
        priority_league_ids: vec![200, 39],
        ..Config::default()
    };
    config.save_to_path(path).await.unwrap();

    let loaded = Config::load_from_path(path).await.unwrap();
    assert_eq!(loaded.api_key, "secret-key");
    assert_eq!(loaded.priority_league_ids, vec![200, 39]);
    assert!(loaded.has_database());
    assert!(loaded.api_base_url.starts_with("https://"));
}
