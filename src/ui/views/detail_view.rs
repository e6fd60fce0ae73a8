use crate::constants::ui::TEAM_NAME_WIDTH;
use crate::data_fetcher::models::{DisplayState, FixtureResponse, Lineup, PlayerEntry};
use crate::data_fetcher::processors::{LineupPair, MatchDetail, StatisticsTable, local_time};
use crate::i18n::{Language, TextDirection, Translations};
use crate::ui::teletext::{LoadingIndicator, RowStyle, TeletextPage};

use super::{LoadState, mirrored, pad_to};

/// Sub-tab of the match detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Lineups,
    Statistics,
}

impl DetailTab {
    pub fn toggle(self) -> Self {
        match self {
            DetailTab::Lineups => DetailTab::Statistics,
            DetailTab::Statistics => DetailTab::Lineups,
        }
    }
}

/// Parameters for building the match detail page
pub struct DetailPageParams<'a> {
    pub fixture: &'a FixtureResponse,
    pub detail: &'a LoadState<MatchDetail>,
    pub tab: DetailTab,
    pub language: Language,
    pub interactive: bool,
    pub loading_indicator: Option<&'a LoadingIndicator>,
}

fn summary_line(fixture: &FixtureResponse, lang: Language) -> String {
    let ltr = lang.direction() == TextDirection::Ltr;
    let middle = match fixture.display_state() {
        DisplayState::Scheduled => local_time(&fixture.fixture.date, lang),
        DisplayState::Finished | DisplayState::Live { .. } => fixture.score_line(),
    };
    mirrored(
        lang,
        pad_to(&fixture.teams.home.name, TEAM_NAME_WIDTH, ltr),
        format!("{middle:^9}"),
        pad_to(&fixture.teams.away.name, TEAM_NAME_WIDTH, !ltr),
    )
}

fn tab_line(active: DetailTab, t: &Translations) -> String {
    let mark = |tab: DetailTab, label: &str| {
        if tab == active {
            format!("[{label}]")
        } else {
            format!(" {label} ")
        }
    };
    format!(
        "{}  {}",
        mark(DetailTab::Lineups, t.lineups),
        mark(DetailTab::Statistics, t.stats)
    )
}

fn player_line(entry: &PlayerEntry) -> String {
    let number = entry
        .player
        .number
        .map(|n| n.to_string())
        .unwrap_or_default();
    let pos = entry.player.pos.as_deref().unwrap_or("");
    format!("{number:>3} {} {pos}", pad_to(&entry.player.name, 28, false))
        .trim_end()
        .to_string()
}

fn add_team_lineup(page: &mut TeletextPage, lineup: &Lineup, t: &Translations) {
    page.add_line(
        format!("{} ({})", lineup.team.name, lineup.formation_label()),
        RowStyle::League,
    );
    page.add_line(t.starting_xi, RowStyle::Heading);
    for entry in &lineup.start_xi {
        page.add_line(player_line(entry), RowStyle::Text);
    }
    page.add_line(t.substitutes, RowStyle::Heading);
    for entry in &lineup.substitutes {
        page.add_line(player_line(entry), RowStyle::Text);
    }
    page.add_line(
        format!("{}: {}", t.coach, lineup.coach_name()),
        RowStyle::Muted,
    );
}

fn add_lineups(page: &mut TeletextPage, lineups: &LineupPair, t: &Translations) {
    add_team_lineup(page, &lineups.home, t);
    page.add_blank();
    add_team_lineup(page, &lineups.away, t);
}

fn add_statistics(page: &mut TeletextPage, table: &StatisticsTable, lang: Language) {
    page.add_line(
        mirrored(
            lang,
            table.home_team.name.clone(),
            "-".to_string(),
            table.away_team.name.clone(),
        ),
        RowStyle::League,
    );
    for row in &table.rows {
        let (home_share, away_share) = row.shares();
        page.add_line(
            mirrored(
                lang,
                pad_to(&row.home.to_string(), 6, false),
                pad_to(&row.stat_type, 22, false),
                pad_to(&row.away.to_string(), 6, true),
            ),
            RowStyle::Text,
        );
        page.add_bar(home_share, away_share);
    }
}

pub fn build_detail_page(params: DetailPageParams<'_>) -> TeletextPage {
    let lang = params.language;
    let t = lang.translations();
    let fixture = params.fixture;

    let mut page = TeletextPage::new(
        t.title,
        &format!("{} · {}", fixture.league.name, fixture.league.round),
        lang,
        params.interactive,
    );
    page.set_date_label(&format!("#{}", fixture.fixture.id));
    if params.interactive {
        page.set_footer(t.detail_hints);
    }

    page.add_line(summary_line(fixture, lang), RowStyle::Result);
    page.add_blank();

    match params.detail {
        LoadState::Loading => {
            let text = match params.loading_indicator {
                Some(indicator) => indicator.label(t.loading),
                None => t.loading.to_string(),
            };
            page.add_line(text, RowStyle::Muted);
        }
        LoadState::Failed => page.add_line(t.error, RowStyle::Error),
        LoadState::Ready(detail) => {
            page.add_line(tab_line(params.tab, t), RowStyle::Heading);
            page.add_blank();
            match params.tab {
                DetailTab::Lineups => match &detail.lineups {
                    Ok(lineups) => add_lineups(&mut page, lineups, t),
                    Err(_) => page.add_line(t.no_lineups, RowStyle::Muted),
                },
                DetailTab::Statistics => match &detail.statistics {
                    Ok(table) => add_statistics(&mut page, table, lang),
                    Err(_) => page.add_line(t.no_stats, RowStyle::Muted),
                },
            }
        }
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::processors::MatchDetail;
    use crate::testing_utils::TestDataBuilder;
    use crate::ui::teletext::TeletextRow;

    fn detail() -> MatchDetail {
        MatchDetail::build(
            vec![
                TestDataBuilder::lineup(11, "4-4-2"),
                TestDataBuilder::lineup(12, "4-3-3"),
            ],
            vec![
                TestDataBuilder::stat_set(11, &[("Ball Possession", "60%".into())]),
                TestDataBuilder::stat_set(12, &[("Ball Possession", "40%".into())]),
            ],
            None,
        )
    }

    fn render(state: &LoadState<MatchDetail>, tab: DetailTab, lang: Language) -> TeletextPage {
        let fixture = TestDataBuilder::finished_fixture(1, 39, "Premier League", 1, 1);
        build_detail_page(DetailPageParams {
            fixture: &fixture,
            detail: state,
            tab,
            language: lang,
            interactive: false,
            loading_indicator: None,
        })
    }

    #[test]
    fn test_lineups_tab() {
        let page = render(&LoadState::Ready(detail()), DetailTab::Lineups, Language::En);
        let text = page.plain_lines().join("\n");
        assert!(text.contains("[Lineups]"));
        assert!(text.contains("Team 11 (4-4-2)"));
        assert!(text.contains("Team 12 (4-3-3)"));
        assert!(text.contains("Starting XI"));
        assert!(text.contains("Coach: Coach 11"));
        assert!(text.contains("Keeper"));
    }

    #[test]
    fn test_statistics_tab_has_bar_per_row() {
        let page = render(&LoadState::Ready(detail()), DetailTab::Statistics, Language::En);
        let bars: Vec<_> = page
            .rows()
            .iter()
            .filter_map(|row| match row {
                TeletextRow::Bar {
                    home_share,
                    away_share,
                } => Some((*home_share, *away_share)),
                _ => None,
            })
            .collect();
        assert_eq!(bars, vec![(60.0, 40.0)]);
        assert!(page.plain_lines().join("\n").contains("Ball Possession"));
    }

    #[test]
    fn test_unavailable_sections_use_localized_messages() {
        let detail = MatchDetail::build(Vec::new(), Vec::new(), None);
        let state = LoadState::Ready(detail);
        let ar = Language::Ar.translations();

        let text = render(&state, DetailTab::Lineups, Language::Ar).plain_lines().join("\n");
        assert!(text.contains(ar.no_lineups));
        let text = render(&state, DetailTab::Statistics, Language::Ar).plain_lines().join("\n");
        assert!(text.contains(ar.no_stats));
    }

    #[test]
    fn test_failed_fetch_shows_generic_error() {
        let text = render(&LoadState::Failed, DetailTab::Lineups, Language::En)
            .plain_lines()
            .join("\n");
        assert!(text.contains(Language::En.translations().error));
        assert!(!text.contains("[Lineups]"));
    }

    #[test]
    fn test_detail_tab_toggle() {
        assert_eq!(DetailTab::default().toggle(), DetailTab::Statistics);
        assert_eq!(DetailTab::Statistics.toggle(), DetailTab::Lineups);
    }
}
