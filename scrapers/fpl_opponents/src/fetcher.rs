use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use crate::{
    config::{ApiConfig, ScrapingConfig},
    error::{FplError, Result},
    types::{BootstrapResponse, Fixture, Team},
};

#[allow(async_fn_in_trait)]
pub trait JsonFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

pub struct WebJsonFetcher {
    client: reqwest::Client,
}

impl WebJsonFetcher {
    pub fn new(config: &ScrapingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

impl JsonFetcher for WebJsonFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Reads the two FPL endpoints the report needs. Every call hits the network.
pub struct FplClient<F: JsonFetcher> {
    fetcher: F,
    api: ApiConfig,
}

impl<F: JsonFetcher> FplClient<F> {
    pub fn new(fetcher: F, api: ApiConfig) -> Self {
        Self { fetcher, api }
    }

    pub async fn fetch_teams(&self) -> Result<Vec<Team>> {
        let url = self.api.bootstrap_url();
        let bootstrap: BootstrapResponse = self.fetch_json(&url).await?;
        info!("Loaded {} teams from {}", bootstrap.teams.len(), url);
        Ok(bootstrap.teams)
    }

    pub async fn fetch_fixtures(&self) -> Result<Vec<Fixture>> {
        let url = self.api.fixtures_url();
        let fixtures: Vec<Fixture> = self.fetch_json(&url).await?;
        info!("Loaded {} fixtures from {}", fixtures.len(), url);
        Ok(fixtures)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let body = self.fetcher.fetch_text(url).await?;
        decode(url, &body)
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| FplError::Schema {
        endpoint: endpoint.to_string(),
        source,
    })
}
