//! Builds teletext pages from fixture data.

pub mod detail_view;
pub mod list_view;

pub use detail_view::{DetailPageParams, DetailTab, build_detail_page};
pub use list_view::{ListPageParams, build_list_page, format_fixture_line};

use crate::i18n::{Language, TextDirection};
use unicode_width::UnicodeWidthStr;

use super::teletext::fit_to_width;

/// Outcome of a fetch as the views see it.
///
/// `Failed` carries no detail: every fetch failure renders the same
/// localized message.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Failed,
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Pads or truncates `text` to exactly `width` display columns.
pub(crate) fn pad_to(text: &str, width: usize, align_right: bool) -> String {
    let fitted = fit_to_width(text, width);
    let pad = " ".repeat(width.saturating_sub(fitted.width()));
    if align_right {
        format!("{pad}{fitted}")
    } else {
        format!("{fitted}{pad}")
    }
}

/// Joins a left/centre/right triple, mirroring it for right-to-left text.
pub(crate) fn mirrored(lang: Language, home: String, middle: String, away: String) -> String {
    match lang.direction() {
        TextDirection::Ltr => format!("{home} {middle} {away}"),
        TextDirection::Rtl => format!("{away} {middle} {home}"),
    }
}
