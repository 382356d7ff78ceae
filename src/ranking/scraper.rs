//! ランキングスクレイパー実装
//!
//! ページを1回取得し、エントリ抽出・画像ダウンロード・JSON保存を
//! 順番に実行する。再試行は行わない。

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::fetch::HttpFetcher;
use crate::traits::{Fetcher, Scraper};

use super::parser;
use super::types::{DinosaurRecord, RankingData};

pub struct RankingScraper {
    config: ScraperConfig,
    fetcher: Box<dyn Fetcher>,
}

impl RankingScraper {
    /// HTTPクライアント付きでスクレイパーを作成
    pub fn new(config: ScraperConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpFetcher::new(&config.user_agent)?;
        Ok(Self::with_fetcher(config, Box::new(fetcher)))
    }

    /// Fetcherを差し替えて作成（テスト用）
    pub fn with_fetcher(config: ScraperConfig, fetcher: Box<dyn Fetcher>) -> Self {
        Self { config, fetcher }
    }

    /// 画像を取得してimagesディレクトリに保存し、ファイル名を返す
    async fn download_image(
        &self,
        url: &str,
        rank: u32,
        name: &str,
    ) -> Result<String, ScraperError> {
        let bytes = self.fetcher.fetch_bytes(url).await?;

        let filename = image_filename(rank, name, url);
        let path = self.config.images_dir().join(&filename);
        std::fs::write(&path, &bytes)?;
        Ok(filename)
    }
}

/// 保存用ファイル名を導出する。拡張子はURL末尾のドット以降をそのまま使う
fn image_filename(rank: u32, name: &str, url: &str) -> String {
    let extension = url.rsplit('.').next().unwrap_or(url);
    format!("{:02}_{}.{}", rank, name, extension)
}

#[async_trait]
impl Scraper for RankingScraper {
    async fn scrape(&mut self) -> Result<Vec<DinosaurRecord>, ScraperError> {
        info!("ランキングページを取得中: {}", self.config.url);
        let body = self.fetcher.fetch_text(&self.config.url).await?;

        let (mut records, candidates) = parser::parse_page(&body, &self.config.site_origin);
        info!("{}件のエントリを検出", records.len());

        std::fs::create_dir_all(self.config.images_dir())?;

        for candidate in candidates {
            let idx = match parser::find_matching_entry(&candidate.html, &records) {
                Some(idx) => idx,
                None => continue,
            };

            // 対象サーバーへの負荷を抑えるため間隔を空ける
            sleep(self.config.politeness_delay).await;

            let rank = records[idx].rank;
            let name = records[idx].name.clone();
            match self.download_image(&candidate.url, rank, &name).await {
                Ok(filename) => {
                    info!("画像をダウンロード: {}", name);
                    records[idx].image_url = Some(candidate.url);
                    records[idx].image_filename = Some(filename);
                }
                Err(e) => {
                    warn!("画像のダウンロードに失敗しました: {} - {}", name, e);
                }
            }
        }

        Ok(records)
    }

    async fn save(&self, records: &[DinosaurRecord]) -> Result<PathBuf, ScraperError> {
        let data = RankingData {
            dinosaurs: records.to_vec(),
        };
        let json = serde_json::to_string_pretty(&data)?;

        std::fs::create_dir_all(&self.config.output_dir)?;
        let path = self.config.data_file();
        std::fs::write(&path, json)?;

        info!("ランキングデータを保存: {}", path.display());
        Ok(path)
    }
}
