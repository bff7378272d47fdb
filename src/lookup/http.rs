use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;

use super::ProfileLookup;

pub const DEFAULT_ENDPOINT: &str = "https://api.mojang.com";

const PROFILE_PATH: &str = "/users/profiles/minecraft";

pub struct HttpLookup {
    http: Client,
    endpoint: String,
}

impl HttpLookup {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let http = Client::builder()
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// The name goes into the path as is.
    pub fn profile_url(&self, name: &str) -> String {
        format!("{}{}/{}", self.endpoint, PROFILE_PATH, name)
    }
}

#[async_trait]
impl ProfileLookup for HttpLookup {
    async fn lookup(&self, name: &str) -> anyhow::Result<u16> {
        let url = self.profile_url(name);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        log::debug!("GET {} -> {}", url, status);
        Ok(status.as_u16())
    }
}
