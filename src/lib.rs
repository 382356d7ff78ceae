//! 恐竜人気ランキング スクレイパーライブラリ
//!
//! - ランキングページから「<数字>位 <名前>」形式のエントリを抽出
//! - エントリに対応する恐竜画像をダウンロードしてimagesに保存
//! - 結果をJSONファイル（data.json）として保存
//! - 保存済みJSONへの読み取り専用アクセサを提供
//!
//! # スクレイパー使用例
//!
//! ```rust,ignore
//! use dino_ranking_scraper::{ScraperService, ScrapeRequest};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut service = ScraperService::new();
//!
//!     let request = ScrapeRequest::new().with_output_dir("./docs");
//!
//!     let result = service.call(request).await.unwrap();
//!     println!("Records: {}", result.records.len());
//! }
//! ```
//!
//! # リーダー使用例
//!
//! ```rust,ignore
//! use dino_ranking_scraper::DinosaurData;
//!
//! fn main() {
//!     let data = DinosaurData::new("docs");
//!     if let Some(dino) = data.get_by_rank(1) {
//!         println!("1位: {}", dino.name);
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod ranking;
pub mod reader;
pub mod service;
pub mod traits;

// 主要な型をリエクスポート
pub use config::ScraperConfig;
pub use error::ScraperError;
pub use fetch::HttpFetcher;
pub use ranking::{DinosaurRecord, RankingData, RankingScraper};
pub use reader::DinosaurData;
pub use service::{ScrapeRequest, ScrapeResult, ScraperService};
pub use traits::{Fetcher, Scraper};
