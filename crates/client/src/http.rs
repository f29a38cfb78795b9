use anyhow::Context;
use gridwatch_protocol::AgentFeed;

use crate::source::AgentSource;

/// Queries the agent listing from an HTTP backend as JSON.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

impl AgentSource for HttpSource {
    async fn fetch(&self) -> anyhow::Result<AgentFeed> {
        let url = format!("{}/api/agents", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("query agent feed: {url}"))?;
        let feed = response
            .error_for_status()
            .with_context(|| format!("agent feed returned an error status: {url}"))?
            .json()
            .await
            .context("decode agent feed body")?;
        Ok(feed)
    }
}
