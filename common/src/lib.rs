//! Keyword Tagger Common Library
//!
//! 辞書ストア・分類器・表データ型（CLIから利用するコア部分）

pub mod dataset;
pub mod dictionary;
pub mod classifier;
pub mod error;

pub use dataset::{CellValue, Dataset};
pub use dictionary::{Category, DictionarySet, DictionaryStore, TAGS_COLUMN};
pub use classifier::{classify, classify_with_progress, matched_categories, ClassificationSummary, Classifier};
pub use error::{Error, Result};
