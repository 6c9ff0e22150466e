//! Excel出力
//!
//! 真偽値・数値はセルの型を保ったまま書き込む。
//! 欠損値（NaNを含む）は空セルのまま残す。

use crate::error::{Result, TaggerError};
use keyword_tagger_common::{CellValue, Dataset};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

const SHEET_NAME: &str = "classified";

pub fn write_excel(dataset: &Dataset, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    fill_worksheet(worksheet, dataset).map_err(excel_error)?;

    workbook.save(output_path).map_err(excel_error)?;
    Ok(())
}

fn fill_worksheet(worksheet: &mut Worksheet, dataset: &Dataset) -> std::result::Result<(), XlsxError> {
    worksheet.set_name(SHEET_NAME)?;
    let header_format = Format::new().set_bold();

    for (col, name) in dataset.columns().iter().enumerate() {
        let col = col_index(col)?;
        worksheet.write_string_with_format(0, col, name, &header_format)?;
    }

    for (i, row) in dataset.rows().iter().enumerate() {
        let row_idx = u32::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, cell) in row.iter().enumerate() {
            let col = col_index(col)?;
            if cell.is_empty() {
                continue;
            }
            match cell {
                CellValue::Empty => {}
                CellValue::Text(s) => {
                    worksheet.write_string(row_idx, col, s)?;
                }
                CellValue::Integer(v) => {
                    worksheet.write_number(row_idx, col, *v as f64)?;
                }
                CellValue::Float(v) => {
                    worksheet.write_number(row_idx, col, *v)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row_idx, col, *b)?;
                }
            }
        }
    }

    Ok(())
}

fn col_index(col: usize) -> std::result::Result<u16, XlsxError> {
    u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)
}

fn excel_error(e: XlsxError) -> TaggerError {
    TaggerError::Export(format!("Excel生成エラー: {}", e))
}
