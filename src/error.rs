use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTPクライアント初期化エラー: {0}")]
    ClientInit(String),

    #[error("ページ取得エラー: {0}")]
    Fetch(String),

    #[error("ファイル操作エラー: {0}")]
    FileIO(#[from] std::io::Error),

    #[error("JSON変換エラー: {0}")]
    Json(#[from] serde_json::Error),
}
