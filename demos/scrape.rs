use dino_ranking_scraper::{RankingScraper, Scraper, ScraperConfig};

#[tokio::main]
async fn main() {
    // ログ設定
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ScraperConfig::default();

    println!("=== 恐竜人気ランキング スクレイパー ===");

    let mut scraper = match RankingScraper::new(config) {
        Ok(scraper) => scraper,
        Err(e) => {
            eprintln!("エラーが発生しました: {}", e);
            return;
        }
    };

    match scraper.execute().await {
        Ok(records) => {
            println!("スクレイピングが完了しました。{}件", records.len());
        }
        Err(e) => {
            eprintln!("エラーが発生しました: {}", e);
        }
    }
}
