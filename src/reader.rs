//! 保存済みランキングデータの読み取り専用ビュー
//!
//! 構築時にdata.jsonを一度だけ読み込み、以後は更新しない。
//! 読み込みに失敗した場合は警告を出して空のコレクションにフォールバックする。

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::ranking::{DinosaurRecord, RankingData};

#[derive(Debug)]
pub struct DinosaurData {
    data_file: PathBuf,
    images_dir: PathBuf,
    data: RankingData,
}

impl DinosaurData {
    /// ベースディレクトリからdata.jsonとimagesのパスを導出して読み込む
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let base = base_dir.as_ref();
        let data_file = base.join("data.json");
        let images_dir = base.join("images");
        let data = Self::load(&data_file);

        Self {
            data_file,
            images_dir,
            data,
        }
    }

    fn load(path: &Path) -> RankingData {
        let result = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()));

        match result {
            Ok(data) => data,
            Err(e) => {
                warn!("データの読み込みに失敗しました: {}", e);
                RankingData::default()
            }
        }
    }

    /// JSONファイルのパス
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// 画像ディレクトリのパス
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// 全ての恐竜レコード（ページ出現順）
    pub fn all(&self) -> &[DinosaurRecord] {
        &self.data.dinosaurs
    }

    /// ランクが一致する最初のレコードを返す
    pub fn get_by_rank(&self, rank: u32) -> Option<&DinosaurRecord> {
        self.data.dinosaurs.iter().find(|d| d.rank == rank)
    }

    /// 名前が完全一致する最初のレコードを返す（大文字小文字を区別）
    pub fn get_by_name(&self, name: &str) -> Option<&DinosaurRecord> {
        self.data.dinosaurs.iter().find(|d| d.name == name)
    }

    /// レコードの画像パスを返す。ファイルの実在は確認しない
    pub fn image_path(&self, record: &DinosaurRecord) -> Option<PathBuf> {
        record
            .image_filename
            .as_deref()
            .filter(|filename| !filename.is_empty())
            .map(|filename| self.images_dir.join(filename))
    }

    /// ランク昇順で上位n件を返す
    pub fn top_n(&self, n: usize) -> Vec<DinosaurRecord> {
        let mut sorted = self.data.dinosaurs.clone();
        sorted.sort_by_key(|d| d.rank);
        sorted.truncate(n);
        sorted
    }
}

impl Default for DinosaurData {
    fn default() -> Self {
        Self::new("docs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(dir: &Path, json: &str) {
        std::fs::write(dir.join("data.json"), json).unwrap();
    }

    const FIXTURE_JSON: &str = r#"{
  "dinosaurs": [
    {"rank": 7, "name": "アンキロサウルス", "image_url": null, "image_filename": null},
    {"rank": 1, "name": "ティラノサウルス", "image_url": null, "image_filename": ""},
    {"rank": 4, "name": "ステゴサウルス", "image_url": null, "image_filename": null},
    {"rank": 2, "name": "トリケラトプス", "image_url": null, "image_filename": null},
    {"rank": 5, "name": "Triceratops", "image_url": "https://kyouryu.info/images/tri.jpg", "image_filename": "05_Triceratops.jpg"}
  ]
}"#;

    #[test]
    fn test_get_by_rank_and_name() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), FIXTURE_JSON);
        let data = DinosaurData::new(dir.path());

        let by_rank = data.get_by_rank(5).unwrap();
        assert_eq!(by_rank.name, "Triceratops");

        let by_name = data.get_by_name("Triceratops").unwrap();
        assert_eq!(by_name.rank, 5);

        let path = data.image_path(by_name).unwrap();
        assert_eq!(path, dir.path().join("images").join("05_Triceratops.jpg"));
    }

    #[test]
    fn test_missing_rank_and_name_return_none() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), FIXTURE_JSON);
        let data = DinosaurData::new(dir.path());

        assert!(data.get_by_rank(99).is_none());
        assert!(data.get_by_name("イグアノドン").is_none());
        // 名前は大文字小文字を区別する
        assert!(data.get_by_name("triceratops").is_none());
    }

    #[test]
    fn test_top_n_sorts_by_rank() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), FIXTURE_JSON);
        let data = DinosaurData::new(dir.path());

        let top = data.top_n(3);
        let ranks: Vec<u32> = top.iter().map(|d| d.rank).collect();
        assert_eq!(ranks, vec![1, 2, 4]);

        // コレクションより大きいnは全件をソートして返す
        let all = data.top_n(100);
        let ranks: Vec<u32> = all.iter().map(|d| d.rank).collect();
        assert_eq!(ranks, vec![1, 2, 4, 5, 7]);
    }

    #[test]
    fn test_image_path_requires_filename() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), FIXTURE_JSON);
        let data = DinosaurData::new(dir.path());

        // image_filenameがnullのレコード
        let no_image = data.get_by_rank(2).unwrap();
        assert!(data.image_path(no_image).is_none());

        // 空文字列も未設定扱い
        let empty = data.get_by_rank(1).unwrap();
        assert!(data.image_path(empty).is_none());
    }

    #[test]
    fn test_missing_file_yields_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let data = DinosaurData::new(dir.path());

        assert!(data.all().is_empty());
        assert!(data.get_by_rank(1).is_none());
        assert!(data.get_by_name("ティラノサウルス").is_none());
        assert!(data.top_n(10).is_empty());
    }

    #[test]
    fn test_malformed_json_yields_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "{ this is not json");
        let data = DinosaurData::new(dir.path());

        assert!(data.all().is_empty());
        assert!(data.top_n(10).is_empty());
    }

    #[test]
    fn test_tolerates_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(
            dir.path(),
            r#"{"dinosaurs": [{"rank": 3, "name": "プテラノドン"}]}"#,
        );
        let data = DinosaurData::new(dir.path());

        let dino = data.get_by_rank(3).unwrap();
        assert_eq!(dino.name, "プテラノドン");
        assert!(dino.image_url.is_none());
        assert!(data.image_path(dino).is_none());
    }
}
