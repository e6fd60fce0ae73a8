use std::cmp::Ordering;
use std::collections::HashMap;

use crate::data_fetcher::models::{FixtureResponse, League};

/// Fixtures of one league on one day, in kickoff order.
///
/// `fixtures` is never empty: a group only exists because a fixture created it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueGroup {
    pub league: League,
    pub fixtures: Vec<FixtureResponse>,
}

/// Groups a day's fixtures by league and orders them for display.
///
/// Groups come out in `priority` table order first; leagues missing from the
/// table follow, sorted by name ignoring case and accents; names equal under
/// that folding put lowercase before uppercase.
/// Fixtures within a group are sorted by kickoff timestamp, keeping upstream
/// order among equal timestamps.
///
/// # Example
///
/// ```
/// use koora_teletext::data_fetcher::processors::group_fixtures;
///
/// let groups = group_fixtures(Vec::new(), &[140, 39]);
/// assert!(groups.is_empty());
/// ```
pub fn group_fixtures(fixtures: Vec<FixtureResponse>, priority: &[u32]) -> Vec<LeagueGroup> {
    let mut index_by_league: HashMap<u32, usize> = HashMap::new();
    let mut groups: Vec<LeagueGroup> = Vec::new();

    for fixture in fixtures {
        match index_by_league.get(&fixture.league.id) {
            Some(&idx) => groups[idx].fixtures.push(fixture),
            None => {
                index_by_league.insert(fixture.league.id, groups.len());
                groups.push(LeagueGroup {
                    league: fixture.league.clone(),
                    fixtures: vec![fixture],
                });
            }
        }
    }

    groups.sort_by(|a, b| compare_leagues(&a.league, &b.league, priority));
    for group in &mut groups {
        group.fixtures.sort_by_key(|f| f.fixture.timestamp);
    }

    groups
}

fn priority_rank(league_id: u32, priority: &[u32]) -> Option<usize> {
    priority.iter().position(|&id| id == league_id)
}

fn compare_leagues(a: &League, b: &League, priority: &[u32]) -> Ordering {
    match (priority_rank(a.id, priority), priority_rank(b.id, priority)) {
        (Some(ra), Some(rb)) => ra.cmp(&rb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => fold_name(&a.name)
            .cmp(&fold_name(&b.name))
            .then_with(|| case_tiebreak(&a.name, &b.name)),
    }
}

/// Lowercased name with Latin diacritics stripped, so "Úrvalsdeild" sorts with "U".
fn fold_name(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => 'i',
        'ł' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' | 'ș' => 's',
        'ť' | 'ţ' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Lowercase sorts before uppercase at the first position where case differs.
fn case_tiebreak(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        })
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PRIORITY_LEAGUE_IDS;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_empty_input() {
        assert!(group_fixtures(Vec::new(), &DEFAULT_PRIORITY_LEAGUE_IDS).is_empty());
    }

    #[test]
    fn test_one_group_per_league() {
        let fixtures = vec![
            TestDataBuilder::fixture(1, 39, "Premier League", 300),
            TestDataBuilder::fixture(2, 140, "La Liga", 100),
            TestDataBuilder::fixture(3, 39, "Premier League", 200),
            TestDataBuilder::fixture(4, 999, "Zambia Super League", 50),
        ];

        let groups = group_fixtures(fixtures, &DEFAULT_PRIORITY_LEAGUE_IDS);
        assert_eq!(groups.len(), 3);
        let total: usize = groups.iter().map(|g| g.fixtures.len()).sum();
        assert_eq!(total, 4);
        for group in &groups {
            assert!(!group.fixtures.is_empty());
            assert!(group.fixtures.iter().all(|f| f.league.id == group.league.id));
        }
    }

    #[test]
    fn test_priority_then_alphabetical() {
        let fixtures = vec![
            TestDataBuilder::fixture(1, 500, "serie B", 0),
            TestDataBuilder::fixture(2, 135, "Serie A", 0),
            TestDataBuilder::fixture(3, 501, "Eredivisie", 0),
            TestDataBuilder::fixture(4, 39, "Premier League", 0),
            TestDataBuilder::fixture(5, 140, "La Liga", 0),
            TestDataBuilder::fixture(6, 502, "allsvenskan", 0),
        ];

        let ids: Vec<u32> = group_fixtures(fixtures, &DEFAULT_PRIORITY_LEAGUE_IDS)
            .iter()
            .map(|g| g.league.id)
            .collect();
        assert_eq!(ids, vec![140, 39, 135, 502, 501, 500]);
    }

    #[test]
    fn test_case_tie_puts_lowercase_first() {
        let fixtures = vec![
            TestDataBuilder::fixture(1, 802, "Cup", 0),
            TestDataBuilder::fixture(2, 801, "cup", 0),
        ];
        let names: Vec<String> = group_fixtures(fixtures, &[])
            .into_iter()
            .map(|g| g.league.name)
            .collect();
        assert_eq!(names, vec!["cup", "Cup"]);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let fixtures = vec![
            TestDataBuilder::fixture(1, 901, "Zambia Super League", 0),
            TestDataBuilder::fixture(2, 902, "Úrvalsdeild", 0),
            TestDataBuilder::fixture(3, 903, "Süper Lig", 0),
            TestDataBuilder::fixture(4, 904, "Serie A", 0),
            TestDataBuilder::fixture(5, 905, "Ekstraklasa", 0),
        ];
        let names: Vec<String> = group_fixtures(fixtures, &[])
            .into_iter()
            .map(|g| g.league.name)
            .collect();
        assert_eq!(
            names,
            vec!["Ekstraklasa", "Serie A", "Süper Lig", "Úrvalsdeild", "Zambia Super League"]
        );
    }

    #[test]
    fn test_fixtures_sorted_by_timestamp_stably() {
        let fixtures = vec![
            TestDataBuilder::fixture(1, 39, "Premier League", 300),
            TestDataBuilder::fixture(2, 39, "Premier League", 100),
            TestDataBuilder::fixture(3, 39, "Premier League", 300),
            TestDataBuilder::fixture(4, 39, "Premier League", 200),
        ];

        let groups = group_fixtures(fixtures, &DEFAULT_PRIORITY_LEAGUE_IDS);
        let ids: Vec<u64> = groups[0].fixtures.iter().map(|f| f.fixture.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_group_uses_first_league_snapshot() {
        let first = TestDataBuilder::fixture(1, 39, "Premier League", 10);
        let mut second = TestDataBuilder::fixture(2, 39, "Premier League", 5);
        second.league.round = "Regular Season - 99".to_string();
        let round = first.league.round.clone();

        let groups = group_fixtures(vec![first, second], &[]);
        assert_eq!(groups[0].league.round, round);
    }

    #[test]
    fn test_custom_priority_table() {
        let fixtures = vec![
            TestDataBuilder::fixture(1, 140, "La Liga", 0),
            TestDataBuilder::fixture(2, 307, "Saudi Pro League", 0),
        ];
        let ids: Vec<u32> = group_fixtures(fixtures, &[307])
            .iter()
            .map(|g| g.league.id)
            .collect();
        assert_eq!(ids, vec![307, 140]);
    }
}
