//! CSV出力
//!
//! 列順はデータセットの列順そのまま（元の列 → Tags → カテゴリ列）。

use crate::error::{Result, TaggerError};
use csv::Writer;
use keyword_tagger_common::Dataset;
use std::path::Path;

pub fn write_csv(dataset: &Dataset, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)
        .map_err(|e| TaggerError::Export(format!("{}: {}", output_path.display(), e)))?;
    write_csv_to(dataset, file)
}

pub fn write_csv_to<W: std::io::Write>(dataset: &Dataset, target: W) -> Result<()> {
    let mut writer = Writer::from_writer(target);

    writer
        .write_record(dataset.columns())
        .map_err(|e| TaggerError::Export(format!("CSV書き込みエラー: {}", e)))?;

    for row in dataset.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.to_text()))
            .map_err(|e| TaggerError::Export(format!("CSV書き込みエラー: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TaggerError::Export(format!("CSV書き込みエラー: {}", e)))?;
    Ok(())
}
