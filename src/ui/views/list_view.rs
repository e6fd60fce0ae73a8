use crate::constants::ui::TEAM_NAME_WIDTH;
use crate::data_fetcher::models::{DisplayState, FixtureResponse};
use crate::data_fetcher::processors::{DayTab, LeagueGroup, local_time};
use crate::i18n::{Language, TextDirection};
use crate::ui::teletext::{LoadingIndicator, RowStyle, TeletextPage};

use super::{LoadState, mirrored, pad_to};

/// Width of the centre column holding the score or kickoff time.
const MIDDLE_WIDTH: usize = 9;

/// Parameters for building the fixture list page
pub struct ListPageParams<'a> {
    pub date: &'a str,
    /// Active day tab; `None` when an explicit date was requested.
    pub tab: Option<DayTab>,
    pub groups: &'a LoadState<Vec<LeagueGroup>>,
    /// Index into the flattened fixture list.
    pub selected: Option<usize>,
    pub language: Language,
    pub interactive: bool,
    pub loading_indicator: Option<&'a LoadingIndicator>,
}

fn tab_bar(active: Option<DayTab>, lang: Language, date: &str) -> String {
    let Some(active) = active else {
        return date.to_string();
    };
    let labels: Vec<String> = DayTab::ALL
        .iter()
        .map(|tab| {
            let label = tab.label(lang);
            if *tab == active {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect();
    match lang.direction() {
        TextDirection::Ltr => labels.join(" "),
        TextDirection::Rtl => labels.into_iter().rev().collect::<Vec<_>>().join(" "),
    }
}

/// One list row for a fixture and the style it is drawn in.
pub fn format_fixture_line(fixture: &FixtureResponse, lang: Language) -> (String, RowStyle) {
    let ltr = lang.direction() == TextDirection::Ltr;
    let home = pad_to(&fixture.teams.home.name, TEAM_NAME_WIDTH, ltr);
    let away = pad_to(&fixture.teams.away.name, TEAM_NAME_WIDTH, !ltr);

    let (middle, suffix, style) = match fixture.display_state() {
        DisplayState::Finished => (fixture.score_line(), String::new(), RowStyle::Result),
        DisplayState::Live { elapsed } => {
            let minute = match elapsed {
                Some(m) => format!("{m}'"),
                None => fixture.fixture.status.short.clone(),
            };
            (fixture.score_line(), minute, RowStyle::Live)
        }
        DisplayState::Scheduled => (
            local_time(&fixture.fixture.date, lang),
            String::new(),
            RowStyle::Text,
        ),
    };

    let middle = format!("{middle:^MIDDLE_WIDTH$}");
    let line = mirrored(lang, home, middle, away);
    let line = match (suffix.is_empty(), ltr) {
        (true, _) => line,
        (false, true) => format!("{line} {suffix}"),
        (false, false) => format!("{suffix} {line}"),
    };
    (line, style)
}

/// Number of fixtures across all groups.
pub fn fixture_count(groups: &[LeagueGroup]) -> usize {
    groups.iter().map(|g| g.fixtures.len()).sum()
}

/// Fixture at `index` of the flattened list.
pub fn fixture_at(groups: &[LeagueGroup], index: usize) -> Option<&FixtureResponse> {
    groups.iter().flat_map(|g| g.fixtures.iter()).nth(index)
}

pub fn build_list_page(params: ListPageParams<'_>) -> TeletextPage {
    let t = params.language.translations();
    let mut page = TeletextPage::new(
        t.title,
        &tab_bar(params.tab, params.language, params.date),
        params.language,
        params.interactive,
    );
    page.set_date_label(params.date);
    if params.interactive {
        page.set_footer(t.key_hints);
    }

    match params.groups {
        LoadState::Loading => {
            let text = match params.loading_indicator {
                Some(indicator) => indicator.label(t.loading),
                None => t.loading.to_string(),
            };
            page.add_line(text, RowStyle::Muted);
        }
        LoadState::Failed => page.add_line(t.error, RowStyle::Error),
        LoadState::Ready(groups) if groups.is_empty() => {
            page.add_line(t.no_matches, RowStyle::Muted);
        }
        LoadState::Ready(groups) => {
            let mut index = 0;
            for group in groups {
                page.add_line(
                    format!("{} - {}", group.league.name, group.league.country),
                    RowStyle::League,
                );
                for fixture in &group.fixtures {
                    let (line, style) = format_fixture_line(fixture, params.language);
                    page.add_selectable_line(line, style, params.selected == Some(index));
                    index += 1;
                }
                page.add_blank();
            }
        }
    }

    page
}
