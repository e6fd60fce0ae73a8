use serde::{Deserialize, Serialize};
use std::fmt;

/// One team's entry in the `fixtures/statistics` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatisticSet {
    pub team: StatTeam,
    #[serde(default)]
    pub statistics: Vec<StatDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatTeam {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatDetail {
    #[serde(rename = "type")]
    pub stat_type: String,
    #[serde(default)]
    pub value: StatValue,
}

/// A statistic value: a count, a formatted string such as `"55%"`, or absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl StatValue {
    /// Null collapses to numeric zero; everything else is kept as reported.
    pub fn or_zero(&self) -> StatValue {
        match self {
            StatValue::Null => StatValue::Number(0.0),
            other => other.clone(),
        }
    }

    /// Numeric magnitude used for chart widths.
    ///
    /// A trailing `%` is stripped. Values that do not parse, are not finite,
    /// or are negative count as zero.
    pub fn magnitude(&self) -> f64 {
        let parsed = match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Text(text) => text.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
            StatValue::Null => None,
        };
        parsed.filter(|n| n.is_finite() && *n >= 0.0).unwrap_or(0.0)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            StatValue::Number(n) => write!(f, "{n}"),
            StatValue::Text(text) => f.write_str(text),
            StatValue::Null => f.write_str("0"),
        }
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Number(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_values() {
        let json = r#"{
            "team": {"id": 33, "name": "Manchester United", "logo": "mu.png"},
            "statistics": [
                {"type": "Shots on Goal", "value": 3},
                {"type": "Ball Possession", "value": "61%"},
                {"type": "Red Cards", "value": null},
                {"type": "expected_goals", "value": "1.27"}
            ]
        }"#;

        let set: StatisticSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.statistics.len(), 4);
        assert_eq!(set.statistics[0].value, StatValue::Number(3.0));
        assert_eq!(set.statistics[1].value, StatValue::Text("61%".to_string()));
        assert_eq!(set.statistics[2].value, StatValue::Null);
        assert_eq!(set.statistics[0].stat_type, "Shots on Goal");
    }

    #[test]
    fn test_magnitude_parsing() {
        assert_eq!(StatValue::from("60%").magnitude(), 60.0);
        assert_eq!(StatValue::from(" 45 % ").magnitude(), 45.0);
        assert_eq!(StatValue::from("1.27").magnitude(), 1.27);
        assert_eq!(StatValue::from(10.0).magnitude(), 10.0);
        assert_eq!(StatValue::from("n/a").magnitude(), 0.0);
        assert_eq!(StatValue::from(-3.0).magnitude(), 0.0);
        assert_eq!(StatValue::Null.magnitude(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(StatValue::from(10.0).to_string(), "10");
        assert_eq!(StatValue::from(0.5).to_string(), "0.5");
        assert_eq!(StatValue::from("61%").to_string(), "61%");
        assert_eq!(StatValue::Null.to_string(), "0");
        assert_eq!(StatValue::Null.or_zero(), StatValue::Number(0.0));
    }
}
