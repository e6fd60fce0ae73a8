//! Keyboard input mapping for the interactive UI.
//!
//! Keys map to an [`Action`]; the event loop applies it to the state.

use crate::data_fetcher::processors::DayTab;
use crate::i18n::{Language, TextDirection};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PreviousDay,
    NextDay,
    SelectDay(DayTab),
    MoveUp,
    MoveDown,
    Open,
    SwitchDetailTab,
    Back,
    ToggleLanguage,
    Refresh,
    Ignore,
}

/// Maps a key press to an action.
///
/// Left and right follow the reading direction: in right-to-left mode the
/// day tabs are drawn mirrored, so `Left` moves towards tomorrow.
pub fn action_for_key(key_event: &KeyEvent, language: Language, in_detail: bool) -> Action {
    if key_event.kind == KeyEventKind::Release {
        return Action::Ignore;
    }
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Action::Quit;
    }

    let rtl = language.direction() == TextDirection::Rtl;
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        KeyCode::Char('l') | KeyCode::Char('L') => Action::ToggleLanguage,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Refresh,
        KeyCode::Esc | KeyCode::Backspace if in_detail => Action::Back,
        KeyCode::Tab | KeyCode::BackTab if in_detail => Action::SwitchDetailTab,
        _ if in_detail => Action::Ignore,
        KeyCode::Left => {
            if rtl {
                Action::NextDay
            } else {
                Action::PreviousDay
            }
        }
        KeyCode::Right => {
            if rtl {
                Action::PreviousDay
            } else {
                Action::NextDay
            }
        }
        KeyCode::Char('1') => Action::SelectDay(DayTab::Yesterday),
        KeyCode::Char('2') => Action::SelectDay(DayTab::Today),
        KeyCode::Char('3') => Action::SelectDay(DayTab::Tomorrow),
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Enter => Action::Open,
        _ => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_follow_direction() {
        assert_eq!(
            action_for_key(&key(KeyCode::Left), Language::En, false),
            Action::PreviousDay
        );
        assert_eq!(
            action_for_key(&key(KeyCode::Left), Language::Ar, false),
            Action::NextDay
        );
        assert_eq!(
            action_for_key(&key(KeyCode::Right), Language::Ar, false),
            Action::PreviousDay
        );
    }

    #[test]
    fn test_detail_keys() {
        assert_eq!(action_for_key(&key(KeyCode::Esc), Language::En, true), Action::Back);
        assert_eq!(
            action_for_key(&key(KeyCode::Backspace), Language::En, true),
            Action::Back
        );
        assert_eq!(
            action_for_key(&key(KeyCode::Tab), Language::En, true),
            Action::SwitchDetailTab
        );
        assert_eq!(action_for_key(&key(KeyCode::Left), Language::En, true), Action::Ignore);
        assert_eq!(action_for_key(&key(KeyCode::Esc), Language::En, false), Action::Ignore);
    }

    #[test]
    fn test_global_keys() {
        for in_detail in [false, true] {
            assert_eq!(
                action_for_key(&key(KeyCode::Char('q')), Language::Ar, in_detail),
                Action::Quit
            );
            assert_eq!(
                action_for_key(&key(KeyCode::Char('l')), Language::Ar, in_detail),
                Action::ToggleLanguage
            );
        }
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&ctrl_c, Language::En, false), Action::Quit);
    }

    #[test]
    fn test_number_keys_select_day() {
        assert_eq!(
            action_for_key(&key(KeyCode::Char('1')), Language::En, false),
            Action::SelectDay(DayTab::Yesterday)
        );
        assert_eq!(
            action_for_key(&key(KeyCode::Char('3')), Language::En, false),
            Action::SelectDay(DayTab::Tomorrow)
        );
    }
}
