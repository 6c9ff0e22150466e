//! 入力データ読み込みモジュール
//!
//! 拡張子で形式を判定し、`Dataset` に変換する。
//! 読み込みに失敗した場合は部分的なデータを返さない。

mod delimited;
mod spreadsheet;

use crate::error::{Result, TaggerError};
use keyword_tagger_common::Dataset;
use std::path::Path;

/// 入力ファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
    Spreadsheet,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "txt" => Ok(InputFormat::Csv),
            "tsv" | "tab" => Ok(InputFormat::Tsv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(InputFormat::Spreadsheet),
            _ => Err(TaggerError::UnsupportedFormat(format!(
                "{} (csv/tsv/xlsx/xls/ods)",
                path.display()
            ))),
        }
    }
}

pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(TaggerError::FileNotFound(path.display().to_string()));
    }

    let format = InputFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), ?format, "reading dataset");

    let dataset = match format {
        InputFormat::Csv => delimited::read_delimited(path, b',')?,
        InputFormat::Tsv => delimited::read_delimited(path, b'\t')?,
        InputFormat::Spreadsheet => spreadsheet::read_first_sheet(path)?,
    };

    tracing::debug!(rows = dataset.len(), columns = dataset.columns().len(), "dataset loaded");
    Ok(dataset)
}
