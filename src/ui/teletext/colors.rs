use crossterm::style::Color;

// Teletext palette
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn result_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn league_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn live_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn muted_fg() -> Color {
    Color::AnsiValue(250)
} // Light gray
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn selected_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn home_bar_fg() -> Color {
    Color::AnsiValue(118)
} // Lime
pub fn away_bar_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan

/// ANSI 256 index of `color`, or `fallback` for non-indexed colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}
