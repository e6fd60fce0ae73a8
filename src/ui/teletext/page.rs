// src/ui/teletext/page.rs - teletext style page buffer with RTL aware alignment

use crate::constants::ui::{DEFAULT_RENDER_WIDTH, STAT_BAR_WIDTH};
use crate::error::AppError;
use crate::i18n::{Language, TextDirection};
use crossterm::execute;
use std::io::{Stdout, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::colors::*;

/// Rows taken by the header, subheader and their spacer line.
const HEADER_ROWS: usize = 3;
/// Rows kept free for the footer.
const FOOTER_ROWS: usize = 2;
/// Width of the left header segment holding the date.
const HEADER_DATE_WIDTH: usize = 20;

const HOME_BAR_CELL: char = '█';
const AWAY_BAR_CELL: char = '▒';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Text,
    Heading,
    League,
    Result,
    Live,
    Muted,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TeletextRow {
    Line {
        text: String,
        style: RowStyle,
        selected: bool,
    },
    /// Two-colour share bar, values in percent.
    Bar { home_share: f64, away_share: f64 },
    Blank,
}

#[derive(Debug)]
pub struct TeletextPage {
    title: String,
    subheader: String,
    date_label: String,
    language: Language,
    width: usize,
    screen_height: usize,
    interactive: bool,
    rows: Vec<TeletextRow>,
    footer: String,
}

impl TeletextPage {
    /// Creates a page sized to the terminal in interactive mode, or to the
    /// default width with no height limit otherwise.
    pub fn new(title: &str, subheader: &str, language: Language, interactive: bool) -> Self {
        let (width, height) = if interactive {
            crossterm::terminal::size().unwrap_or((DEFAULT_RENDER_WIDTH, 24))
        } else {
            (DEFAULT_RENDER_WIDTH, u16::MAX)
        };
        Self::with_size(title, subheader, language, width as usize, height as usize, interactive)
    }

    pub fn with_size(
        title: &str,
        subheader: &str,
        language: Language,
        width: usize,
        screen_height: usize,
        interactive: bool,
    ) -> Self {
        Self {
            title: title.to_string(),
            subheader: subheader.to_string(),
            date_label: String::new(),
            language,
            width: width.max(HEADER_DATE_WIDTH + 10),
            screen_height,
            interactive,
            rows: Vec::new(),
            footer: String::new(),
        }
    }

    pub fn set_date_label(&mut self, date: &str) {
        self.date_label = date.to_string();
    }

    pub fn set_footer(&mut self, footer: &str) {
        self.footer = footer.to_string();
    }

    pub fn add_line(&mut self, text: impl Into<String>, style: RowStyle) {
        self.rows.push(TeletextRow::Line {
            text: text.into(),
            style,
            selected: false,
        });
    }

    pub fn add_selectable_line(&mut self, text: impl Into<String>, style: RowStyle, selected: bool) {
        self.rows.push(TeletextRow::Line {
            text: text.into(),
            style,
            selected,
        });
    }

    pub fn add_bar(&mut self, home_share: f64, away_share: f64) {
        self.rows.push(TeletextRow::Bar {
            home_share,
            away_share,
        });
    }

    pub fn add_blank(&mut self) {
        self.rows.push(TeletextRow::Blank);
    }

    pub fn rows(&self) -> &[TeletextRow] {
        &self.rows
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Content rows without colour codes, aligned as they would be drawn.
    pub fn plain_lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| self.plain_row(row)).collect()
    }

    fn content_height(&self) -> usize {
        if self.interactive {
            self.screen_height.saturating_sub(HEADER_ROWS + FOOTER_ROWS).max(1)
        } else {
            usize::MAX
        }
    }

    /// Window of rows to draw, keeping the selected row in view.
    fn visible_range(&self) -> std::ops::Range<usize> {
        let height = self.content_height();
        if self.rows.len() <= height {
            return 0..self.rows.len();
        }
        let selected = self
            .rows
            .iter()
            .position(|row| matches!(row, TeletextRow::Line { selected: true, .. }))
            .unwrap_or(0);
        let max_start = self.rows.len() - height;
        let start = selected.saturating_sub(height / 2).min(max_start);
        start..start + height
    }

    /// Pads `text` to the page width on the side opposite the reading direction.
    fn align(&self, text: &str) -> String {
        let fitted = fit_to_width(text, self.width);
        let pad = self.width.saturating_sub(fitted.width());
        match self.language.direction() {
            TextDirection::Rtl => format!("{}{}", " ".repeat(pad), fitted),
            TextDirection::Ltr => format!("{}{}", fitted, " ".repeat(pad)),
        }
    }

    fn bar_cells(&self, home_share: f64, away_share: f64) -> String {
        let bar_width = STAT_BAR_WIDTH.min(self.width);
        let total = (home_share + away_share).max(f64::EPSILON);
        let home_cells = ((home_share / total) * bar_width as f64).round() as usize;
        let home_cells = home_cells.min(bar_width);
        let away_cells = bar_width - home_cells;
        let home: String = std::iter::repeat_n(HOME_BAR_CELL, home_cells).collect();
        let away: String = std::iter::repeat_n(AWAY_BAR_CELL, away_cells).collect();
        match self.language.direction() {
            TextDirection::Ltr => format!("{home}{away}"),
            TextDirection::Rtl => format!("{away}{home}"),
        }
    }

    fn plain_row(&self, row: &TeletextRow) -> String {
        match row {
            TeletextRow::Line { text, .. } => self.align(text),
            TeletextRow::Bar {
                home_share,
                away_share,
            } => self.align(&self.bar_cells(*home_share, *away_share)),
            TeletextRow::Blank => " ".repeat(self.width),
        }
    }

    fn styled_row(&self, row: &TeletextRow) -> String {
        match row {
            TeletextRow::Line {
                text,
                style,
                selected,
            } => {
                let fg = get_ansi_code(style_color(*style), 231);
                let aligned = self.align(text);
                if *selected {
                    format!(
                        "\x1b[48;5;{}m\x1b[38;5;{}m{}\x1b[0m",
                        get_ansi_code(selected_bg(), 21),
                        get_ansi_code(text_fg(), 231),
                        aligned
                    )
                } else {
                    format!("\x1b[38;5;{fg}m{aligned}\x1b[0m")
                }
            }
            TeletextRow::Bar {
                home_share,
                away_share,
            } => {
                let home_code = get_ansi_code(home_bar_fg(), 118);
                let away_code = get_ansi_code(away_bar_fg(), 51);
                self.align(&self.bar_cells(*home_share, *away_share))
                    .chars()
                    .map(|c| match c {
                        HOME_BAR_CELL => format!("\x1b[38;5;{home_code}m{c}"),
                        AWAY_BAR_CELL => format!("\x1b[38;5;{away_code}m{c}"),
                        other => other.to_string(),
                    })
                    .chain(std::iter::once("\x1b[0m".to_string()))
                    .collect()
            }
            TeletextRow::Blank => String::new(),
        }
    }

    fn header_line(&self) -> String {
        let title_width = self.width.saturating_sub(HEADER_DATE_WIDTH);
        let title = fit_to_width(&self.title, title_width);
        let title_pad = title_width.saturating_sub(title.width());
        format!(
            "\x1b[48;5;{}m\x1b[38;5;{}m{:<date_width$}\x1b[48;5;{}m\x1b[38;5;231m{}{}\x1b[0m",
            get_ansi_code(title_bg(), 46),
            get_ansi_code(header_bg(), 21),
            fit_to_width(&self.date_label, HEADER_DATE_WIDTH),
            get_ansi_code(header_bg(), 21),
            " ".repeat(title_pad),
            title,
            date_width = HEADER_DATE_WIDTH,
        )
    }

    /// Builds the full screen in one string.
    pub fn render_to_string(&self) -> String {
        let mut buffer = String::with_capacity(self.width * (self.rows.len() + 6) * 4);
        let subheader = format!(
            "\x1b[38;5;{}m{}\x1b[0m",
            get_ansi_code(subheader_fg(), 46),
            self.align(&self.subheader)
        );
        let footer = format!(
            "\x1b[38;5;{}m{}\x1b[0m",
            get_ansi_code(muted_fg(), 250),
            self.align(&self.footer)
        );

        if self.interactive {
            buffer.push_str("\x1b[H"); // Move to home position
            buffer.push_str("\x1b[0J"); // Clear from cursor down
            buffer.push_str(&format!("\x1b[1;1H{}", self.header_line()));
            buffer.push_str(&format!("\x1b[2;1H{subheader}"));
            for (offset, row) in self.rows[self.visible_range()].iter().enumerate() {
                buffer.push_str(&format!(
                    "\x1b[{};1H{}",
                    offset + HEADER_ROWS + 1,
                    self.styled_row(row)
                ));
            }
            if !self.footer.is_empty() {
                buffer.push_str(&format!("\x1b[{};1H{footer}", self.screen_height.max(1)));
            }
        } else {
            buffer.push_str(&self.header_line());
            buffer.push('\n');
            buffer.push_str(&subheader);
            buffer.push_str("\n\n");
            for row in &self.rows {
                buffer.push_str(&self.styled_row(row));
                buffer.push('\n');
            }
            if !self.footer.is_empty() {
                buffer.push('\n');
                buffer.push_str(&footer);
                buffer.push('\n');
            }
        }
        buffer
    }

    /// Renders the page to stdout in a single write.
    pub fn render_buffered(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        if self.interactive {
            // Hide cursor to prevent visual artifacts during rendering
            execute!(stdout, crossterm::cursor::Hide)?;
        }
        stdout.write_all(self.render_to_string().as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

fn style_color(style: RowStyle) -> crossterm::style::Color {
    match style {
        RowStyle::Text => text_fg(),
        RowStyle::Heading => subheader_fg(),
        RowStyle::League => league_fg(),
        RowStyle::Result => result_fg(),
        RowStyle::Live => live_fg(),
        RowStyle::Muted => muted_fg(),
        RowStyle::Error => error_fg(),
    }
}

/// Truncates `text` so its display width does not exceed `width`.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}
