pub mod delimited;
pub mod excel;

use crate::error::{Result, TaggerError};
use keyword_tagger_common::Dataset;
use std::path::{Path, PathBuf};

/// 出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Excel,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "xlsx" => Ok(OutputFormat::Excel),
            _ => Err(TaggerError::UnsupportedFormat(format!(
                "{} (csv/xlsx)",
                path.display()
            ))),
        }
    }
}

/// 出力先を決定する
///
/// 未指定なら入力ファイルと同じフォルダに `file_name` で出力。
/// ディレクトリ指定ならその中に `file_name` で出力。
pub fn resolve_output_path(input: &Path, output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => {
            let parent = input.parent().unwrap_or_else(|| Path::new("."));
            parent.join(file_name)
        }
    }
}

pub fn export_dataset(dataset: &Dataset, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match OutputFormat::from_path(output_path)? {
        OutputFormat::Csv => delimited::write_csv(dataset, output_path)?,
        OutputFormat::Excel => excel::write_excel(dataset, output_path)?,
    }

    tracing::debug!(path = %output_path.display(), rows = dataset.len(), "dataset exported");
    Ok(())
}
