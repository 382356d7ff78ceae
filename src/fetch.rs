//! reqwestによるFetcher実装

use async_trait::async_trait;
use tracing::debug;

use crate::error::ScraperError;
use crate::traits::Fetcher;

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// User-Agentを設定したクライアントを作成
    pub fn new(user_agent: &str) -> Result<Self, ScraperError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ScraperError::ClientInit(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScraperError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScraperError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Fetch(format!("HTTP {}: {}", status, url)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScraperError::Fetch(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
