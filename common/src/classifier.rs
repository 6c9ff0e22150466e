//! 辞書ベース分類モジュール
//!
//! テキストを小文字化し、各カテゴリのキーワード（小文字化）が
//! 部分文字列として含まれるかで判定する。
//!
//! ## 出力
//! - `Tags` 列: 一致カテゴリ名を `", "` で連結（一致なしは空文字列）
//! - カテゴリ名の列: 一致したか（真偽値）

use crate::dataset::{CellValue, Dataset};
use crate::dictionary::{DictionarySet, TAGS_COLUMN};
use crate::error::{Error, Result};

/// タグの区切り文字
pub const TAG_SEPARATOR: &str = ", ";

/// 分類器
///
/// 辞書のスナップショットを借用し、小文字化したキーワードを事前計算する。
#[derive(Debug)]
pub struct Classifier<'a> {
    categories: Vec<(&'a str, Vec<String>)>,
}

impl<'a> Classifier<'a> {
    pub fn new(dictionaries: &'a DictionarySet) -> Self {
        let categories = dictionaries
            .categories()
            .iter()
            .map(|c| {
                let keywords = c
                    .keywords
                    .iter()
                    .filter(|k| !k.is_empty())
                    .map(|k| k.to_lowercase())
                    .collect();
                (c.name.as_str(), keywords)
            })
            .collect();

        Self { categories }
    }

    /// 一致したカテゴリ名（辞書の定義順）
    pub fn matched_categories(&self, value: &CellValue) -> Vec<&'a str> {
        self.matched_categories_str(&value.to_text())
    }

    pub fn matched_categories_str(&self, text: &str) -> Vec<&'a str> {
        let lower = text.to_lowercase();
        self.categories
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k.as_str())))
            .map(|(name, _)| *name)
            .collect()
    }

    /// 一致カテゴリを連結したタグ文字列
    pub fn tags(&self, value: &CellValue) -> String {
        self.matched_categories(value).join(TAG_SEPARATOR)
    }
}

/// 1件のテキストを分類する
pub fn matched_categories<'a>(dictionaries: &'a DictionarySet, text: &str) -> Vec<&'a str> {
    Classifier::new(dictionaries).matched_categories_str(text)
}

/// 分類結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    /// 処理したレコード数
    pub total_records: usize,
    /// どのカテゴリにも一致しなかったレコード数
    pub untagged_records: usize,
    /// カテゴリごとの一致件数（辞書の定義順）
    pub category_counts: Vec<(String, usize)>,
}

impl ClassificationSummary {
    pub fn tagged_records(&self) -> usize {
        self.total_records - self.untagged_records
    }
}

/// データセットを分類し、`Tags` 列とカテゴリ列を付与する
pub fn classify(
    dataset: &mut Dataset,
    dictionaries: &DictionarySet,
    text_column: &str,
) -> Result<ClassificationSummary> {
    classify_with_progress(dataset, dictionaries, text_column, |_, _| {})
}

/// 進捗コールバック付きの分類
///
/// `progress(done, total)` は1レコードごとに呼ばれる。
/// テキスト列が存在しない場合はレコードを処理する前にエラーを返す。
pub fn classify_with_progress<F>(
    dataset: &mut Dataset,
    dictionaries: &DictionarySet,
    text_column: &str,
    mut progress: F,
) -> Result<ClassificationSummary>
where
    F: FnMut(usize, usize),
{
    let text_idx = dataset.column_index(text_column).ok_or_else(|| Error::Schema {
        column: text_column.to_string(),
        available: dataset.columns().to_vec(),
    })?;

    let classifier = Classifier::new(dictionaries);
    let total = dataset.len();

    // 列を書き込む前に全レコードの判定を済ませる
    let matches: Vec<Vec<&str>> = dataset
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let matched = row
                .get(text_idx)
                .map(|value| classifier.matched_categories(value))
                .unwrap_or_default();
            progress(i + 1, total);
            matched
        })
        .collect();

    let tags = matches
        .iter()
        .map(|m| CellValue::Text(m.join(TAG_SEPARATOR)))
        .collect();
    dataset.set_column(TAGS_COLUMN, tags);

    let mut category_counts = Vec::with_capacity(dictionaries.len());
    for name in dictionaries.category_names() {
        let flags: Vec<CellValue> = matches
            .iter()
            .map(|m| CellValue::Bool(m.contains(&name)))
            .collect();
        let count = flags.iter().filter(|f| f.as_bool() == Some(true)).count();
        dataset.set_column(name, flags);
        category_counts.push((name.to_string(), count));
    }

    let summary = ClassificationSummary {
        total_records: total,
        untagged_records: matches.iter().filter(|m| m.is_empty()).count(),
        category_counts,
    };
    tracing::debug!(
        total = summary.total_records,
        untagged = summary.untagged_records,
        "classification finished"
    );

    Ok(summary)
}
