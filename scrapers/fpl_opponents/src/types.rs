use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub short_name: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Team {
    pub fn new(id: u32, short_name: &str) -> Self {
        Self {
            id,
            short_name: short_name.to_string(),
            name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub id: Option<u32>,
    /// Gameweek number; `None` until the fixture is scheduled.
    #[serde(default)]
    pub event: Option<u32>,
    pub team_h: u32,
    pub team_a: u32,
    #[serde(default)]
    pub kickoff_time: Option<String>,
}

impl Fixture {
    pub fn new(event: Option<u32>, team_h: u32, team_a: u32) -> Self {
        Self {
            id: None,
            event,
            team_h,
            team_a,
            kickoff_time: None,
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.team_h == team_id || self.team_a == team_id
    }
}

/// The subset of `bootstrap-static` this crate reads.
#[derive(Debug, Deserialize)]
pub struct BootstrapResponse {
    pub teams: Vec<Team>,
}
