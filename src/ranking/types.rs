//! ランキング関連の型定義

use serde::{Deserialize, Serialize};

/// 恐竜レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DinosaurRecord {
    /// ランキング順位
    pub rank: u32,
    /// 恐竜名
    pub name: String,
    /// 画像の取得元URL（ダウンロード成功時のみ）
    #[serde(default)]
    pub image_url: Option<String>,
    /// ローカル保存時のファイル名（ダウンロード成功時のみ）
    #[serde(default)]
    pub image_filename: Option<String>,
}

impl DinosaurRecord {
    /// 画像未設定のレコードを作成
    pub fn new(rank: u32, name: impl Into<String>) -> Self {
        Self {
            rank,
            name: name.into(),
            image_url: None,
            image_filename: None,
        }
    }
}

/// data.jsonのトップレベル構造
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingData {
    #[serde(default)]
    pub dinosaurs: Vec<DinosaurRecord>,
}
