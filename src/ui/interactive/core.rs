//! Main interactive UI loop.
//!
//! Fetches run on spawned tasks and report back over a channel, so the
//! loop keeps handling keys while requests are in flight.

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use super::input_handler::{Action, action_for_key};
use super::sequencer::Ticket;
use super::state_manager::{FetchRequest, InteractiveState, View};
use super::terminal_manager::TerminalManager;
use crate::constants::ui::EVENT_POLL_MS;
use crate::data_fetcher::api::FootballApi;
use crate::data_fetcher::models::{FixtureResponse, Lineup, StatisticSet};
use crate::data_fetcher::processors::{DayTab, local_today};
use crate::error::AppError;
use crate::i18n::Language;

/// Settings for one interactive session.
#[derive(Debug, Clone)]
pub struct InteractiveOptions {
    pub language: Language,
    pub tab: Option<DayTab>,
    pub date: String,
    pub priority_league_ids: Vec<u32>,
}

/// Completed fetch reported back to the loop.
#[derive(Debug)]
enum FetchOutcome {
    Fixtures {
        ticket: Ticket,
        date: String,
        result: Result<Vec<FixtureResponse>, AppError>,
    },
    Detail {
        ticket: Ticket,
        fixture_id: u64,
        result: Result<(Vec<Lineup>, Vec<StatisticSet>), AppError>,
    },
}

fn spawn_fetch(api: &FootballApi, request: FetchRequest, tx: &UnboundedSender<FetchOutcome>) {
    let api = api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = match request {
            FetchRequest::Fixtures { ticket, date } => {
                let result = api.get_fixtures_by_date(&date).await;
                FetchOutcome::Fixtures {
                    ticket,
                    date,
                    result,
                }
            }
            FetchRequest::Detail { ticket, fixture_id } => FetchOutcome::Detail {
                ticket,
                fixture_id,
                result: api.get_match_details(fixture_id).await,
            },
        };
        if tx.send(outcome).is_err() {
            debug!("UI loop ended before fetch completed");
        }
    });
}

fn drain_outcomes(state: &mut InteractiveState, rx: &mut UnboundedReceiver<FetchOutcome>) {
    while let Ok(outcome) = rx.try_recv() {
        match outcome {
            FetchOutcome::Fixtures {
                ticket,
                date,
                result,
            } => {
                state.apply_fixtures(ticket, &date, result);
            }
            FetchOutcome::Detail {
                ticket,
                fixture_id,
                result,
            } => {
                state.apply_detail(ticket, fixture_id, result);
            }
        }
    }
}

/// Applies `action`; returns a fetch to start, if any.
fn apply_action(state: &mut InteractiveState, action: Action) -> Option<FetchRequest> {
    match action {
        Action::PreviousDay => state.previous_tab(local_today()),
        Action::NextDay => state.next_tab(local_today()),
        Action::SelectDay(tab) => state.select_tab(tab, local_today()),
        Action::MoveUp => {
            state.move_selection(-1);
            None
        }
        Action::MoveDown => {
            state.move_selection(1);
            None
        }
        Action::Open => state.open_selected(),
        Action::SwitchDetailTab => {
            state.switch_detail_tab();
            None
        }
        Action::Back => {
            state.close_detail();
            None
        }
        Action::ToggleLanguage => {
            state.toggle_language();
            None
        }
        Action::Refresh => state.refresh(),
        Action::Quit | Action::Ignore => None,
    }
}

async fn event_loop(
    api: &FootballApi,
    state: &mut InteractiveState,
    stdout: &mut Stdout,
) -> Result<(), AppError> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_fetch(api, state.reload_list(), &tx);

    loop {
        drain_outcomes(state, &mut rx);

        if state.needs_render() {
            state.build_page(true).render_buffered(stdout)?;
            state.mark_rendered();
        }

        if !event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            state.tick();
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => {
                let in_detail = matches!(state.view, View::Detail(_));
                let action = action_for_key(&key_event, state.language, in_detail);
                if action == Action::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
                if let Some(request) = apply_action(state, action) {
                    spawn_fetch(api, request, &tx);
                }
            }
            Event::Resize(_, _) => state.request_render(),
            _ => {}
        }
    }
}

/// Runs the full-screen viewer until the user quits.
pub async fn run_interactive_ui(api: FootballApi, options: InteractiveOptions) -> Result<(), AppError> {
    let manager = TerminalManager::new();
    let mut stdout = manager.setup_terminal()?;

    let mut state = InteractiveState::new(
        options.language,
        options.tab,
        options.date,
        options.priority_league_ids,
    );
    let result = event_loop(&api, &mut state, &mut stdout).await;

    manager.cleanup_terminal(stdout)?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn state() -> InteractiveState {
        InteractiveState::new(Language::En, Some(DayTab::Today), "2024-03-10".into(), vec![39])
    }

    #[test]
    fn test_apply_action_day_switch_requests_fetch() {
        let mut state = state();
        let request = apply_action(&mut state, Action::SelectDay(DayTab::Tomorrow));
        assert!(matches!(request, Some(FetchRequest::Fixtures { .. })));
        assert!(apply_action(&mut state, Action::SelectDay(DayTab::Tomorrow)).is_none());
    }

    #[test]
    fn test_apply_action_open_and_back() {
        let mut state = state();
        let Some(FetchRequest::Fixtures { ticket, date }) = apply_action(&mut state, Action::Refresh)
        else {
            panic!("expected fixtures request");
        };
        state.apply_fixtures(
            ticket,
            &date,
            Ok(vec![TestDataBuilder::fixture(4, 39, "Premier League", 0)]),
        );

        let request = apply_action(&mut state, Action::Open);
        assert!(matches!(request, Some(FetchRequest::Detail { fixture_id: 4, .. })));
        assert!(apply_action(&mut state, Action::Back).is_none());
        assert!(matches!(state.view, View::List));
    }

    #[tokio::test]
    async fn test_drain_outcomes_applies_results() {
        let mut state = state();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let FetchRequest::Fixtures { ticket, date } = state.reload_list() else {
            panic!("expected fixtures request");
        };
        tx.send(FetchOutcome::Fixtures {
            ticket,
            date,
            result: Ok(Vec::new()),
        })
        .unwrap();

        drain_outcomes(&mut state, &mut rx);
        assert!(!state.is_loading());
    }
}
