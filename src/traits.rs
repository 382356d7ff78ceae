use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::ScraperError;
use crate::ranking::DinosaurRecord;

/// ページ・画像取得の抽象。テストではモック実装に差し替える
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// URLからバイト列を取得（非2xxはエラー）
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScraperError>;

    /// URLからテキストを取得（UTF-8として解釈）
    async fn fetch_text(&self, url: &str) -> Result<String, ScraperError> {
        let bytes = self.fetch_bytes(url).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait]
pub trait Scraper: Send + Sync {
    /// ページを取得してエントリ抽出と画像ダウンロードを実行
    async fn scrape(&mut self) -> Result<Vec<DinosaurRecord>, ScraperError>;

    /// レコード一式をJSONファイルに保存
    async fn save(&self, records: &[DinosaurRecord]) -> Result<PathBuf, ScraperError>;

    /// 一括実行（scrape → save）
    async fn execute(&mut self) -> Result<Vec<DinosaurRecord>, ScraperError> {
        let records = self.scrape().await?;
        self.save(&records).await?;
        Ok(records)
    }
}
