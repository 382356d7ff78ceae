use dino_ranking_scraper::DinosaurData;

fn main() {
    // 使用例
    let data = DinosaurData::default();

    // 全ての恐竜を取得
    let all = data.all();
    println!("登録されている恐竜の総数: {}", all.len());

    // ランク順に全ての恐竜を表示
    println!("\n===== 全ての恐竜 =====");
    for dino in data.top_n(all.len()) {
        println!("{}位: {}", dino.rank, dino.name);
        if let Some(path) = data.image_path(&dino) {
            println!("画像: {}", path.display());
        }
        println!("---");
    }
}
