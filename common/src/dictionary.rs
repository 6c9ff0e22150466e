//! キーワード辞書モジュール
//!
//! カテゴリ名 → キーワード集合の対応を保持する。
//! 辞書はJSONテキストで編集し、読み込み時に検証する。
//! 検証に失敗した場合、保持中の辞書は変更しない。

use crate::error::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::collections::BTreeSet;

/// タグ列の列名（カテゴリ名として使用不可）
pub const TAGS_COLUMN: &str = "Tags";

/// カテゴリ（名前付きキーワード集合）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub keywords: BTreeSet<String>,
}

/// 辞書セット
///
/// カテゴリの並びは定義順を保持する（分類結果・出力列の順序になる）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionarySet {
    categories: Vec<Category>,
}

impl DictionarySet {
    /// 組み込みのデフォルト辞書
    pub fn builtin() -> Self {
        let mut set = Self::default();
        set.insert(
            "urgency_marketing",
            [
                "limited",
                "limited time",
                "limited run",
                "limited edition",
                "order now",
                "last chance",
                "hurry",
                "while supplies last",
                "before they're gone",
                "selling out",
                "selling fast",
                "act now",
                "don't wait",
                "today only",
                "expires soon",
                "final hours",
                "almost gone",
            ],
        );
        set.insert(
            "exclusive_marketing",
            [
                "exclusive",
                "exclusively",
                "exclusive offer",
                "exclusive deal",
                "members only",
                "vip",
                "special access",
                "invitation only",
                "premium",
                "privileged",
                "limited access",
                "select customers",
                "insider",
                "private sale",
                "early access",
            ],
        );
        set
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::Configuration(format!("failed to parse JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// パース済みのJSON値から構築
    ///
    /// トップレベルはオブジェクト、各値は文字列の配列であること。
    /// 空文字列のキーワード、空のカテゴリ名、`Tags` は不可。
    pub fn from_value(value: Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::Configuration(format!(
                    "top level must be a JSON object, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut set = Self::default();
        for (name, keywords) in map {
            validate_category_name(&name)?;

            let items = match keywords {
                Value::Array(items) => items,
                other => {
                    return Err(Error::Configuration(format!(
                        "category '{}' must be a list of strings, found {}",
                        name,
                        json_kind(&other)
                    )))
                }
            };

            let mut keyword_set = BTreeSet::new();
            for (i, item) in items.into_iter().enumerate() {
                match item {
                    Value::String(s) if s.is_empty() => {
                        return Err(Error::Configuration(format!(
                            "category '{}' has an empty keyword at index {}",
                            name, i
                        )))
                    }
                    Value::String(s) => {
                        keyword_set.insert(s);
                    }
                    other => {
                        return Err(Error::Configuration(format!(
                            "category '{}' keyword at index {} must be a string, found {}",
                            name,
                            i,
                            json_kind(&other)
                        )))
                    }
                }
            }

            set.categories.push(Category {
                name,
                keywords: keyword_set,
            });
        }

        tracing::debug!(categories = set.len(), "dictionary parsed");
        Ok(set)
    }

    /// カテゴリを追加（同名があれば置き換え、位置は維持）
    fn insert<I, S>(&mut self, name: &str, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: BTreeSet<String> = keywords.into_iter().map(Into::into).collect();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.keywords = keywords,
            None => self.categories.push(Category {
                name: name.to_string(),
                keywords,
            }),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// カテゴリ名の一覧（定義順）
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// 編集用のJSON文字列（インデント4）
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| Error::Configuration(e.to_string()))
    }
}

impl Serialize for DictionarySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.keywords)?;
        }
        map.end()
    }
}

fn validate_category_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Configuration("category name must not be empty".into()));
    }
    if name == TAGS_COLUMN {
        return Err(Error::Configuration(format!(
            "category name '{}' is reserved for the tag column",
            TAGS_COLUMN
        )));
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// 辞書ストア
///
/// 編集セッション中の辞書を1つだけ保持する。
/// 分類時は `current()` のスナップショットを明示的に渡す。
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    current: DictionarySet,
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self {
            current: DictionarySet::builtin(),
        }
    }
}

impl DictionaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 辞書を丸ごと置き換える（失敗時は変更なし）
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        self.current = DictionarySet::from_json(json)?;
        Ok(())
    }

    pub fn load_value(&mut self, value: Value) -> Result<()> {
        self.current = DictionarySet::from_value(value)?;
        Ok(())
    }

    pub fn load_file(&mut self, path: &std::path::Path) -> Result<()> {
        self.current = DictionarySet::from_file(path)?;
        Ok(())
    }

    /// デフォルト辞書に戻す
    pub fn reset(&mut self) {
        self.current = DictionarySet::builtin();
    }

    pub fn current(&self) -> &DictionarySet {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_has_two_categories_in_order() {
        let set = DictionarySet::builtin();
        let names: Vec<&str> = set.category_names().collect();
        assert_eq!(names, vec!["urgency_marketing", "exclusive_marketing"]);
        assert_eq!(set.get("urgency_marketing").unwrap().keywords.len(), 17);
        assert_eq!(set.get("exclusive_marketing").unwrap().keywords.len(), 15);
    }

    #[test]
    fn test_from_json_preserves_category_order() {
        let set = DictionarySet::from_json(r#"{"zeta": ["z"], "alpha": ["a"], "mid": []}"#).unwrap();
        let names: Vec<&str> = set.category_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(set.get("mid").unwrap().keywords.is_empty());
    }

    #[test]
    fn test_from_json_removes_duplicates() {
        let set = DictionarySet::from_json(r#"{"a": ["x", "y", "x"]}"#).unwrap();
        assert_eq!(set.get("a").unwrap().keywords.len(), 2);
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = DictionarySet::from_value(json!(["a", "b"])).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn test_from_value_rejects_non_list_value() {
        let err = DictionarySet::from_value(json!({"a": "hurry"})).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_from_value_rejects_non_string_keyword() {
        let err = DictionarySet::from_value(json!({"a": ["ok", 3]})).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_from_value_rejects_empty_keyword() {
        let err = DictionarySet::from_value(json!({"a": ["ok", ""]})).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("empty keyword"));
    }

    #[test]
    fn test_from_value_rejects_reserved_and_empty_names() {
        assert!(DictionarySet::from_value(json!({"Tags": ["x"]})).is_err());
        assert!(DictionarySet::from_value(json!({"": ["x"]})).is_err());
    }

    #[test]
    fn test_from_json_parse_failure_is_configuration_error() {
        let err = DictionarySet::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("failed to parse JSON"));
    }

    #[test]
    fn test_to_json_pretty_round_trip() {
        let set = DictionarySet::builtin();
        let text = set.to_json_pretty().unwrap();
        assert!(text.starts_with("{\n    \"urgency_marketing\": [\n        \""));
        assert_eq!(DictionarySet::from_json(&text).unwrap(), set);
    }

    #[test]
    fn test_store_load_failure_keeps_previous_state() {
        let mut store = DictionaryStore::new();
        store.load_json(r#"{"custom": ["sale"]}"#).unwrap();

        let result = store.load_json(r#"{"broken": "#);
        assert!(result.is_err());
        assert_eq!(store.current().category_names().collect::<Vec<_>>(), vec!["custom"]);

        let result = store.load_value(json!({"custom": [1]}));
        assert!(result.is_err());
        assert!(store.current().get("custom").unwrap().keywords.contains("sale"));
    }

    #[test]
    fn test_store_reset_restores_builtin() {
        let mut store = DictionaryStore::new();
        store.load_json(r#"{"other": ["x"]}"#).unwrap();
        store.reset();
        assert_eq!(store.current(), &DictionarySet::builtin());
    }
}
