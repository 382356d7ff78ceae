//! ランキングページの解析ロジック
//!
//! ネットワークやファイルI/Oに依存しない純粋な関数として分離し、
//! ヒューリスティックを単体でテストできるようにしている。

use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use super::types::DinosaurRecord;

/// 恐竜写真を示すマーカー（altテキストに含まれる）
const IMAGE_MARKER: &str = "の画像";

static RANK_RE: OnceLock<Regex> = OnceLock::new();

/// 「<数字>位 <名前>」のランクマーカー
fn rank_re() -> &'static Regex {
    RANK_RE.get_or_init(|| Regex::new(r"(\d+)位\s+(.+)").unwrap())
}

/// 画像候補。img要素のシリアライズ表現と正規化済みURL
#[derive(Debug, Clone)]
pub struct ImageCandidate {
    pub url: String,
    pub html: String,
}

/// ページ本文からランキングエントリと画像候補を抽出する
pub fn parse_page(body: &str, site_origin: &str) -> (Vec<DinosaurRecord>, Vec<ImageCandidate>) {
    let document = Html::parse_document(body);
    let text: String = document.root_element().text().collect();

    let records = extract_entries(&text);
    let candidates = extract_image_candidates(&document, site_origin);
    (records, candidates)
}

/// 可視テキストの各行にランクマーカーを適用してエントリを抽出する
///
/// 重複ランクや欠番の検証は行わない。ページ構造が変わった場合は
/// 空または不完全な結果になる。
pub fn extract_entries(text: &str) -> Vec<DinosaurRecord> {
    let re = rank_re();
    let mut records = Vec::new();

    for line in text.lines() {
        if let Some(caps) = re.captures(line) {
            if let Ok(rank) = caps[1].parse::<u32>() {
                let name = caps[2].trim().to_string();
                debug!("エントリ検出: {}位 {}", rank, name);
                records.push(DinosaurRecord::new(rank, name));
            }
        }
    }

    records
}

/// マーカー付きのimg要素を集め、相対URLをサイトオリジンで絶対化する
fn extract_image_candidates(document: &Html, site_origin: &str) -> Vec<ImageCandidate> {
    let img_selector = Selector::parse("img").unwrap();
    let mut candidates = Vec::new();

    for element in document.select(&img_selector) {
        let serialized = element.html();
        if !serialized.contains(IMAGE_MARKER) {
            continue;
        }
        let src = match element.value().attr("src") {
            Some(src) => src,
            None => continue,
        };
        let url = if src.starts_with("http") {
            src.to_string()
        } else {
            format!("{}/{}", site_origin, src)
        };
        candidates.push(ImageCandidate {
            url,
            html: serialized,
        });
    }

    candidates
}

/// img要素のテキストに名前が含まれる最初のレコードを探す
///
/// 部分一致の先勝ちであり、曖昧な一致は区別しない。
pub fn find_matching_entry(img_html: &str, records: &[DinosaurRecord]) -> Option<usize> {
    records
        .iter()
        .position(|record| img_html.contains(record.name.as_str()))
}
