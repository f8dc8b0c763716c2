use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://fantasy.premierleague.com/api";
pub const DEFAULT_OUTPUT_PATH: &str = "selected_teams_opponents.xlsx";
pub const DEFAULT_TEAMS: [&str; 4] = ["BHA", "AVL", "CHE", "NEW"];
pub const DEFAULT_ROUNDS: [u32; 3] = [12, 13, 14];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn bootstrap_url(&self) -> String {
        format!("{}/bootstrap-static/", self.base_url.trim_end_matches('/'))
    }

    pub fn fixtures_url(&self) -> String {
        format!("{}/fixtures/", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrapingConfig {
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; FplOpponents/0.1)".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Which teams and rounds go into the report, and where it is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    pub teams: Vec<String>,
    pub rounds: Vec<u32>,
    pub output_path: String,
    /// Optional CSV copy of the report.
    pub csv_path: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            teams: DEFAULT_TEAMS.iter().map(|t| t.to_string()).collect(),
            rounds: DEFAULT_ROUNDS.to_vec(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            csv_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FplConfig {
    pub api: ApiConfig,
    pub scraping: ScrapingConfig,
    pub report: ReportConfig,
}

impl FplConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("FPL_API_BASE_URL") {
            config.api.base_url = base_url;
        }
        if let Ok(user_agent) = env::var("FPL_USER_AGENT") {
            config.scraping.user_agent = user_agent;
        }
        if let Ok(Some(timeout)) = env::var("FPL_TIMEOUT_SECS").map_or(Ok(None), |t| t.parse::<u64>().map(Some)) {
            config.scraping.request_timeout_secs = timeout;
        }
        if let Ok(output_path) = env::var("FPL_OUTPUT_PATH") {
            config.report.output_path = output_path;
        }

        config
    }
}
