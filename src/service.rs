use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::Service;
use tracing::info;

use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::ranking::{DinosaurRecord, RankingScraper};
use crate::traits::Scraper;

/// スクレイピングリクエスト
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub url: String,
    pub output_dir: PathBuf,
}

impl Default for ScrapeRequest {
    fn default() -> Self {
        let config = ScraperConfig::default();
        Self {
            url: config.url,
            output_dir: config.output_dir,
        }
    }
}

impl ScrapeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

impl From<ScrapeRequest> for ScraperConfig {
    fn from(req: ScrapeRequest) -> Self {
        ScraperConfig {
            url: req.url,
            output_dir: req.output_dir,
            ..Default::default()
        }
    }
}

/// スクレイピング結果
#[derive(Debug)]
pub struct ScrapeResult {
    pub records: Vec<DinosaurRecord>,
    pub json_path: PathBuf,
}

/// tower::Serviceを実装したスクレイパーサービス
#[derive(Debug, Clone, Default)]
pub struct ScraperService {
    // 将来的な拡張用（レートリミット、キャッシュなど）
}

impl ScraperService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<ScrapeRequest> for ScraperService {
    type Response = ScrapeResult;
    type Error = ScraperError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ScrapeRequest) -> Self::Future {
        info!("スクレイピングリクエスト受信: url={}", req.url);

        Box::pin(async move {
            let config: ScraperConfig = req.into();
            let mut scraper = RankingScraper::new(config)?;

            // スクレイピング実行
            let records = scraper.scrape().await?;
            let json_path = scraper.save(&records).await?;

            info!(
                "スクレイピング完了: {}件, path={}",
                records.len(),
                json_path.display()
            );

            Ok(ScrapeResult { records, json_path })
        })
    }
}
