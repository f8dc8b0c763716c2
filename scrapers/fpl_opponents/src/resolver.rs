use std::collections::HashSet;
use tracing::{debug, warn};

use crate::{
    error::{FplError, Result},
    types::Team,
};

/// Teams loaded from `bootstrap-static`, kept in API order.
///
/// Lookups are linear and return the first match. Duplicate codes or ids are
/// logged when the table is built.
#[derive(Debug, Clone)]
pub struct TeamTable {
    teams: Vec<Team>,
}

impl TeamTable {
    pub fn new(teams: Vec<Team>) -> Self {
        let mut seen_codes = HashSet::new();
        let mut seen_ids = HashSet::new();
        for team in &teams {
            debug!("Team {} {} ({})", team.id, team.short_name, team.name.as_deref().unwrap_or("-"));
            if !seen_codes.insert(team.short_name.as_str()) {
                warn!("Duplicate team short code '{}'; lookups use the first entry", team.short_name);
            }
            if !seen_ids.insert(team.id) {
                warn!("Duplicate team id {}; lookups use the first entry", team.id);
            }
        }
        Self { teams }
    }

    pub fn team_id(&self, short_name: &str) -> Result<u32> {
        self.teams
            .iter()
            .find(|t| t.short_name == short_name)
            .map(|t| t.id)
            .ok_or_else(|| FplError::TeamCodeNotFound(short_name.to_string()))
    }

    pub fn team_short_name(&self, id: u32) -> Result<&str> {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.short_name.as_str())
            .ok_or(FplError::TeamIdNotFound(id))
    }
}
