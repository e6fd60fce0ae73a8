//! State management for interactive UI
//!
//! Holds what the screen shows and applies fetch results, dropping the ones
//! a newer request has superseded.

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use super::sequencer::{RequestSequencer, RequestSlot, Ticket};
use crate::data_fetcher::models::{FixtureResponse, Lineup, StatisticSet};
use crate::data_fetcher::processors::{
    DayTab, LeagueGroup, MatchDetail, date_for_tab, group_fixtures,
};
use crate::error::AppError;
use crate::i18n::Language;
use crate::ui::teletext::{LoadingIndicator, TeletextPage};
use crate::ui::views::detail_view::DetailPageParams;
use crate::ui::views::list_view::{ListPageParams, fixture_at, fixture_count};
use crate::ui::views::{DetailTab, LoadState, build_detail_page, build_list_page};

/// Match detail screen state.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub fixture: FixtureResponse,
    pub detail: LoadState<MatchDetail>,
    pub tab: DetailTab,
}

#[derive(Debug, Clone)]
pub enum View {
    List,
    Detail(Box<DetailState>),
}

/// A fetch the event loop should start.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    Fixtures { ticket: Ticket, date: String },
    Detail { ticket: Ticket, fixture_id: u64 },
}

#[derive(Debug)]
pub struct InteractiveState {
    pub language: Language,
    /// Active day tab; `None` while showing an explicitly requested date.
    pub tab: Option<DayTab>,
    pub date: String,
    pub list: LoadState<Vec<LeagueGroup>>,
    pub selected: usize,
    pub view: View,
    pub loading_indicator: LoadingIndicator,
    priority: Vec<u32>,
    sequencer: RequestSequencer,
    needs_render: bool,
}

impl InteractiveState {
    pub fn new(language: Language, tab: Option<DayTab>, date: String, priority: Vec<u32>) -> Self {
        Self {
            language,
            tab,
            date,
            list: LoadState::Loading,
            selected: 0,
            view: View::List,
            loading_indicator: LoadingIndicator::new(),
            priority,
            sequencer: RequestSequencer::new(),
            needs_render: true,
        }
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    pub fn mark_rendered(&mut self) {
        self.needs_render = false;
    }

    /// True while any visible section is waiting on the network.
    pub fn is_loading(&self) -> bool {
        match &self.view {
            View::List => self.list.is_loading(),
            View::Detail(detail) => detail.detail.is_loading(),
        }
    }

    /// Starts loading the fixture list for the current date.
    pub fn reload_list(&mut self) -> FetchRequest {
        self.list = LoadState::Loading;
        self.selected = 0;
        self.needs_render = true;
        FetchRequest::Fixtures {
            ticket: self.sequencer.issue(RequestSlot::List),
            date: self.date.clone(),
        }
    }

    /// Switches to `tab`; returns a fetch when the date changed.
    pub fn select_tab(&mut self, tab: DayTab, now: DateTime<Local>) -> Option<FetchRequest> {
        if self.tab == Some(tab) {
            return None;
        }
        self.tab = Some(tab);
        self.date = date_for_tab(tab, now);
        Some(self.reload_list())
    }

    pub fn next_tab(&mut self, now: DateTime<Local>) -> Option<FetchRequest> {
        let tab = self.tab.map(DayTab::next).unwrap_or_default();
        self.select_tab(tab, now)
    }

    pub fn previous_tab(&mut self, now: DateTime<Local>) -> Option<FetchRequest> {
        let tab = self.tab.map(DayTab::previous).unwrap_or_default();
        self.select_tab(tab, now)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let count = self.list.ready().map(|g| fixture_count(g)).unwrap_or(0);
        if count == 0 {
            return;
        }
        let next = self.selected.saturating_add_signed(delta).min(count - 1);
        if next != self.selected {
            self.selected = next;
            self.needs_render = true;
        }
    }

    pub fn selected_fixture(&self) -> Option<&FixtureResponse> {
        self.list
            .ready()
            .and_then(|groups| fixture_at(groups, self.selected))
    }

    /// Opens the detail view of the selected fixture.
    pub fn open_selected(&mut self) -> Option<FetchRequest> {
        let fixture = self.selected_fixture()?.clone();
        let fixture_id = fixture.fixture.id;
        self.view = View::Detail(Box::new(DetailState {
            fixture,
            detail: LoadState::Loading,
            tab: DetailTab::default(),
        }));
        self.needs_render = true;
        Some(FetchRequest::Detail {
            ticket: self.sequencer.issue(RequestSlot::Detail),
            fixture_id,
        })
    }

    /// Refetches whatever the current view shows.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        if let View::Detail(detail) = &mut self.view {
            detail.detail = LoadState::Loading;
            let fixture_id = detail.fixture.fixture.id;
            self.needs_render = true;
            return Some(FetchRequest::Detail {
                ticket: self.sequencer.issue(RequestSlot::Detail),
                fixture_id,
            });
        }
        Some(self.reload_list())
    }

    pub fn close_detail(&mut self) {
        if matches!(self.view, View::Detail(_)) {
            self.sequencer.invalidate(RequestSlot::Detail);
            self.view = View::List;
            self.needs_render = true;
        }
    }

    pub fn switch_detail_tab(&mut self) {
        if let View::Detail(detail) = &mut self.view {
            detail.tab = detail.tab.toggle();
            self.needs_render = true;
        }
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        self.needs_render = true;
    }

    pub fn tick(&mut self) {
        if self.is_loading() {
            self.loading_indicator.next_frame();
            self.needs_render = true;
        }
    }

    /// Applies a fixture list result. Returns false when it was stale.
    pub fn apply_fixtures(
        &mut self,
        ticket: Ticket,
        date: &str,
        result: Result<Vec<FixtureResponse>, AppError>,
    ) -> bool {
        if !self.sequencer.is_current(ticket) {
            debug!("Discarding stale fixtures response for {date}");
            return false;
        }
        self.list = match result {
            Ok(fixtures) => LoadState::Ready(group_fixtures(fixtures, &self.priority)),
            Err(e) => {
                warn!("Failed to load fixtures for {date}: {e}");
                LoadState::Failed
            }
        };
        self.selected = 0;
        self.needs_render = true;
        true
    }

    /// Applies a lineups/statistics result. Returns false when it was stale.
    pub fn apply_detail(
        &mut self,
        ticket: Ticket,
        fixture_id: u64,
        result: Result<(Vec<Lineup>, Vec<StatisticSet>), AppError>,
    ) -> bool {
        if !self.sequencer.is_current(ticket) {
            debug!("Discarding stale detail response for fixture {fixture_id}");
            return false;
        }
        let View::Detail(detail) = &mut self.view else {
            return false;
        };
        detail.detail = match result {
            Ok((lineups, statistics)) => LoadState::Ready(MatchDetail::build(
                lineups,
                statistics,
                Some(&detail.fixture.teams),
            )),
            Err(e) => {
                warn!("Failed to load details for fixture {fixture_id}: {e}");
                LoadState::Failed
            }
        };
        self.needs_render = true;
        true
    }

    /// Builds the page for the current view.
    pub fn build_page(&self, interactive: bool) -> TeletextPage {
        match &self.view {
            View::List => build_list_page(ListPageParams {
                date: &self.date,
                tab: self.tab,
                groups: &self.list,
                selected: Some(self.selected),
                language: self.language,
                interactive,
                loading_indicator: Some(&self.loading_indicator),
            }),
            View::Detail(detail) => build_detail_page(DetailPageParams {
                fixture: &detail.fixture,
                detail: &detail.detail,
                tab: detail.tab,
                language: self.language,
                interactive,
                loading_indicator: Some(&self.loading_indicator),
            }),
        }
    }
}
