use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

const BOX_TEXT: Color = Color::AnsiValue(231);
const LOGO: Color = Color::AnsiValue(51);

/// Lines of the version status box; the first line is the box title.
pub fn version_status_lines() -> Vec<(String, Option<Color>)> {
    vec![
        ("Koora Teletext Status".to_string(), None),
        (String::new(), None),
        (format!("Version: {CURRENT_VERSION}"), Some(LOGO)),
        ("Data: API-Football v3".to_string(), None),
    ]
}

/// Draws the boxed frame around `lines`. Returns the frame as plain rows.
pub fn version_box_rows(lines: &[(String, Option<Color>)]) -> Vec<String> {
    let max_content_width = lines
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let inner = max_content_width + 2;
    let mut rows = vec![format!("╔{:═<inner$}╗", "")];
    for (i, (line, _)) in lines.iter().enumerate() {
        rows.push(format!("║ {line:<max_content_width$} ║"));
        if i == 0 && lines.len() > 2 {
            rows.push(format!("╠{:═<inner$}╣", ""));
        }
    }
    rows.push(format!("╚{:═<inner$}╝", ""));
    rows
}

/// Prints a dynamic-width status box, colouring lines that ask for it.
pub fn print_version_status_box(lines: Vec<(String, Option<Color>)>) {
    let rows = version_box_rows(&lines);
    // Frame rows interleave with content rows; map each back to its colour.
    let mut colors = vec![None];
    for (i, (_, color)) in lines.iter().enumerate() {
        colors.push(*color);
        if i == 0 && lines.len() > 2 {
            colors.push(None);
        }
    }
    colors.push(None);

    for (row, color) in rows.iter().zip(colors) {
        execute!(
            stdout(),
            SetForegroundColor(color.unwrap_or(BOX_TEXT)),
            Print(format!("{row}\n"))
        )
        .ok();
    }
    execute!(stdout(), ResetColor).ok();
}

pub fn print_logo() {
    execute!(
        stdout(),
        SetForegroundColor(LOGO),
        Print(format!(
            "\n{}",
            r#"
██╗  ██╗ ██████╗  ██████╗ ██████╗  █████╗
██║ ██╔╝██╔═══██╗██╔═══██╗██╔══██╗██╔══██╗
█████╔╝ ██║   ██║██║   ██║██████╔╝███████║
██╔═██╗ ██║   ██║██║   ██║██╔══██╗██╔══██║
██║  ██╗╚██████╔╝╚██████╔╝██║  ██║██║  ██║
╚═╝  ╚═╝ ╚═════╝  ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝
"#
        )),
        ResetColor
    )
    .ok();
}
