use crate::error::{Result, TaggerError};
use calamine::{open_workbook_auto, Data, Reader};
use keyword_tagger_common::{CellValue, Dataset};
use std::path::Path;

/// 先頭シートを読み込む（1行目をヘッダとする）
pub fn read_first_sheet(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| TaggerError::InputRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TaggerError::InputRead("シートがありません".into()))?
        .map_err(|e| TaggerError::InputRead(format!("シートを読み込めません: {}", e)))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| TaggerError::InputRead("ヘッダ行がありません".into()))?;

    let columns: Vec<String> = header.iter().map(|c| to_cell(c).to_text()).collect();
    let mut dataset = Dataset::new(columns);

    for row in rows {
        dataset.push_row(row.iter().map(to_cell).collect());
    }

    Ok(dataset)
}

fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(_) => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}
