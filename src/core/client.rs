//! HTTP access to the NWS active alerts endpoint.

use std::future::Future;

use reqwest::header::{ACCEPT, USER_AGENT};
use url::Url;

use super::alert::AlertCollection;
use super::config::Config;
use crate::error::{Result, WxaError};

/// Anything that can return the active alerts for an area
pub trait AlertSource: Send + Sync + 'static {
    fn fetch(&self, area: &str) -> impl Future<Output = Result<AlertCollection>> + Send;
}

/// `reqwest` client for `api.weather.gov`
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: reqwest::Client,
    api_url: Url,
    user_agent: String,
}

impl NwsClient {
    pub fn new(api_url: &str, user_agent: &str) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| WxaError::invalid_url(format!("{}: {}", api_url, e)))?;

        Ok(Self {
            http: reqwest::Client::new(),
            api_url,
            user_agent: user_agent.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, &config.user_agent)
    }

    /// Endpoint URL for `area`, with the parameter percent-encoded
    pub fn alerts_url(&self, area: &str) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut().append_pair("area", area);
        url
    }
}

impl AlertSource for NwsClient {
    async fn fetch(&self, area: &str) -> Result<AlertCollection> {
        let url = self.alerts_url(area);
        log::info!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/geo+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::info!("alerts request for {} failed with {}", area, status);
            return Err(WxaError::request(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let body = response.text().await?;
        let collection: AlertCollection =
            serde_json::from_str(&body).map_err(|e| WxaError::parse(e.to_string()))?;

        log::debug!("{} alerts received for {}", collection.len(), area);
        Ok(collection)
    }
}
