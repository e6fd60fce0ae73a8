use super::fixtures::Team;
use serde::{Deserialize, Serialize};

/// One team's entry in the `fixtures/lineups` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lineup {
    pub team: Team,
    #[serde(default)]
    pub formation: Option<String>,
    #[serde(rename = "startXI", default)]
    pub start_xi: Vec<PlayerEntry>,
    #[serde(default)]
    pub substitutes: Vec<PlayerEntry>,
    #[serde(default)]
    pub coach: Coach,
}

/// The upstream wraps each player in a `{ "player": { .. } }` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerEntry {
    pub player: Player,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: Option<u64>,
    pub name: String,
    pub number: Option<u32>,
    pub pos: Option<String>,
    /// Pitch grid such as `"2:3"`; not used for display.
    #[serde(default)]
    pub grid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Coach {
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl Lineup {
    pub fn formation_label(&self) -> &str {
        self.formation.as_deref().unwrap_or("-")
    }

    pub fn coach_name(&self) -> &str {
        self.coach.name.as_deref().unwrap_or("-")
    }
}
