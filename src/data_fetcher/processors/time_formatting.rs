use crate::error::AppError;
use crate::i18n::Language;
use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};

/// Shown in place of a kickoff time the upstream sent in an unreadable form.
pub const INVALID_TIME: &str = "Invalid Date";

/// The three day tabs of the fixture list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DayTab {
    Yesterday,
    #[default]
    Today,
    Tomorrow,
}

impl DayTab {
    pub const ALL: [DayTab; 3] = [DayTab::Yesterday, DayTab::Today, DayTab::Tomorrow];

    pub fn next(self) -> Self {
        match self {
            DayTab::Yesterday => DayTab::Today,
            DayTab::Today | DayTab::Tomorrow => DayTab::Tomorrow,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DayTab::Tomorrow => DayTab::Today,
            DayTab::Today | DayTab::Yesterday => DayTab::Yesterday,
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        let t = lang.translations();
        match self {
            DayTab::Yesterday => t.yesterday,
            DayTab::Today => t.today,
            DayTab::Tomorrow => t.tomorrow,
        }
    }
}

/// The current instant in the local timezone.
pub fn local_today() -> DateTime<Local> {
    Utc::now().with_timezone(&Local)
}

/// Formats an instant as `YYYY-MM-DD`.
///
/// The calendar date is taken from the instant's UTC representation, so
/// shortly after local midnight east of UTC (or before it west of UTC) this
/// yields the adjacent day. Upstream fixture dates are keyed the same way.
pub fn format_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&Utc).format("%Y-%m-%d").to_string()
}

/// Date string requested by a day tab, relative to `now`.
pub fn date_for_tab(tab: DayTab, now: DateTime<Local>) -> String {
    let shifted = match tab {
        DayTab::Yesterday => now.checked_sub_days(Days::new(1)),
        DayTab::Today => Some(now),
        DayTab::Tomorrow => now.checked_add_days(Days::new(1)),
    };
    format_date(&shifted.unwrap_or(now))
}

/// Validates a user supplied `YYYY-MM-DD` date.
pub fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!("'{date}' is not a YYYY-MM-DD date: {e}"))
    })
}

/// Renders an ISO kickoff instant as a 12-hour `hh:mm` time in local time.
///
/// Malformed input yields [`INVALID_TIME`] rather than an error.
pub fn local_time(iso: &str, lang: Language) -> String {
    local_time_in(iso, lang, &Local)
}

/// Same as [`local_time`] with an explicit target timezone.
pub fn local_time_in<Tz: TimeZone>(iso: &str, lang: Language, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Ok(parsed) = DateTime::parse_from_rfc3339(iso.trim()) else {
        return INVALID_TIME.to_string();
    };
    let local = parsed.with_timezone(tz);
    let clock = local.format("%I:%M").to_string();
    let is_pm = local.format("%p").to_string() == "PM";

    match lang {
        Language::En => format!("{clock} {}", if is_pm { "PM" } else { "AM" }),
        Language::Ar => format!(
            "{} {}",
            to_arabic_indic_digits(&clock),
            if is_pm { "م" } else { "ص" }
        ),
    }
}

/// Maps ASCII digits to Arabic-Indic digits, leaving other characters alone.
pub fn to_arabic_indic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
