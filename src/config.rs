use std::path::PathBuf;
use std::time::Duration;

/// 人気ランキングページのURL
pub const RANKING_URL: &str = "https://kyouryu.info/popularity_ranking2018.php";

/// 相対URLの解決に使うサイトオリジン
pub const SITE_ORIGIN: &str = "https://kyouryu.info";

/// ブロック回避のためのブラウザ風User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub url: String,
    pub site_origin: String,
    pub user_agent: String,
    pub output_dir: PathBuf,
    pub politeness_delay: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            url: RANKING_URL.to_string(),
            site_origin: SITE_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from("docs"),
            politeness_delay: Duration::from_secs(1),
        }
    }
}

impl ScraperConfig {
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

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_politeness_delay(mut self, delay: Duration) -> Self {
        self.politeness_delay = delay;
        self
    }

    /// JSONファイルのパス
    pub fn data_file(&self) -> PathBuf {
        self.output_dir.join("data.json")
    }

    /// 画像保存ディレクトリのパス
    pub fn images_dir(&self) -> PathBuf {
        self.output_dir.join("images")
    }
}
