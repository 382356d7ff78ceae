//! 恐竜人気ランキング スクレイパーモジュール
//!
//! ランキングページからエントリと画像を抽出してJSONに保存する

pub mod parser;
mod scraper;
mod types;

pub use scraper::RankingScraper;
pub use types::{DinosaurRecord, RankingData};
