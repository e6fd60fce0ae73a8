//! Arabic/English string tables and text direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

/// Every user-visible label, in one language.
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub today: &'static str,
    pub yesterday: &'static str,
    pub tomorrow: &'static str,
    pub loading: &'static str,
    pub no_matches: &'static str,
    pub error: &'static str,
    pub back: &'static str,
    pub lineups: &'static str,
    pub stats: &'static str,
    pub no_lineups: &'static str,
    pub no_stats: &'static str,
    pub starting_xi: &'static str,
    pub substitutes: &'static str,
    pub coach: &'static str,
    pub key_hints: &'static str,
    pub detail_hints: &'static str,
}

const AR: Translations = Translations {
    title: "مواعيد المباريات مباشرة",
    today: "مباريات اليوم",
    yesterday: "مباريات الأمس",
    tomorrow: "مباريات الغد",
    loading: "جاري التحميل...",
    no_matches: "لا توجد مباريات في هذا اليوم.",
    error: "حدث خطأ أثناء جلب البيانات.",
    back: "العودة",
    lineups: "التشكيلة",
    stats: "الإحصائيات",
    no_lineups: "التشكيلة غير متوفرة.",
    no_stats: "الإحصائيات غير متوفرة.",
    starting_xi: "التشكيلة الأساسية",
    substitutes: "البدلاء",
    coach: "المدرب",
    key_hints: "←/→ اليوم  ↑/↓ اختيار  Enter تفاصيل  l اللغة  q خروج",
    detail_hints: "Tab تبديل  Esc العودة  l اللغة  q خروج",
};

const EN: Translations = Translations {
    title: "Live Football Fixtures",
    today: "Today's Matches",
    yesterday: "Yesterday",
    tomorrow: "Tomorrow",
    loading: "Loading...",
    no_matches: "No matches found for this day.",
    error: "An error occurred while fetching data.",
    back: "Back",
    lineups: "Lineups",
    stats: "Stats",
    no_lineups: "Lineups are not available.",
    no_stats: "Statistics are not available.",
    starting_xi: "Starting XI",
    substitutes: "Substitutes",
    coach: "Coach",
    key_hints: "←/→ day  ↑/↓ select  Enter details  l language  q quit",
    detail_hints: "Tab switch  Esc back  l language  q quit",
};

impl Language {
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::Ar => &AR,
            Language::En => &EN,
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }

    /// BCP-47 tag of the locale used for time formatting.
    pub fn locale(self) -> &'static str {
        match self {
            Language::Ar => "ar-EG",
            Language::En => "en-US",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Ar => "ar",
            Language::En => "en",
        })
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Language::Ar),
            "en" | "english" => Ok(Language::En),
            other => Err(format!("unsupported language '{other}' (expected ar or en)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_direction() {
        assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Language::Ar.toggle(), Language::En);
        assert_eq!(Language::Ar.toggle().direction(), TextDirection::Ltr);
        assert_eq!(Language::En.toggle(), Language::Ar);
    }

    #[test]
    fn test_default_is_arabic() {
        assert_eq!(Language::default(), Language::Ar);
        assert_eq!(Language::default().locale(), "ar-EG");
    }

    #[test]
    fn test_parse() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("AR".parse::<Language>(), Ok(Language::Ar));
        assert!("fi".parse::<Language>().is_err());
    }

    #[test]
    fn test_tables_are_distinct() {
        assert_eq!(Language::En.translations().lineups, "Lineups");
        assert_eq!(Language::Ar.translations().lineups, "التشكيلة");
        assert_ne!(
            Language::Ar.translations().no_matches,
            Language::En.translations().no_matches
        );
    }
}
