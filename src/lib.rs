//! Keyword Tagger
//!
//! キーワード辞書でテキスト列を分類し、タグ列・カテゴリ列を付与したCSV/Excelを出力する。

pub mod cli;
pub mod config;
pub mod dictionary_editor;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod preview;
pub mod reader;
