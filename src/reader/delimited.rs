use crate::error::{Result, TaggerError};
use csv::{ReaderBuilder, StringRecord};
use keyword_tagger_common::{CellValue, Dataset};
use std::path::Path;

/// 区切り文字形式（CSV/TSV）を読み込む
///
/// 空セルは欠損値、それ以外はテキストとして扱う。
/// 列数が揃わない行があればエラー。
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .map_err(|e| TaggerError::InputRead(format!("{}: {}", path.display(), e)))?;
    parse_delimited(file, delimiter)
}

pub fn parse_delimited<R: std::io::Read>(source: R, delimiter: u8) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| TaggerError::InputRead(format!("ヘッダ行を読み込めません: {}", e)))?
        .clone();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(TaggerError::InputRead("ヘッダ行がありません".into()));
    }

    let mut dataset = Dataset::new(headers.iter().map(|h| h.to_string()).collect());

    for (index, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| TaggerError::InputRead(format!("{}行目を解析できません: {}", index + 2, e)))?;
        dataset.push_row(to_cells(&record));
    }

    Ok(dataset)
}

fn to_cells(record: &StringRecord) -> Vec<CellValue> {
    record
        .iter()
        .map(|field| {
            if field.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(field.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let data = "id,Statement\n1,Hurry now\n2,\n3,\"Quoted, with comma\"\n";
        let ds = parse_delimited(data.as_bytes(), b',').unwrap();

        assert_eq!(ds.columns(), &["id", "Statement"]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.get(1, "Statement"), Some(&CellValue::Empty));
        assert_eq!(
            ds.get(2, "Statement"),
            Some(&CellValue::Text("Quoted, with comma".into()))
        );
    }

    #[test]
    fn test_parse_tsv() {
        let data = "Statement\tsource\nVIP access\tweb\n";
        let ds = parse_delimited(data.as_bytes(), b'\t').unwrap();
        assert_eq!(ds.get(0, "source"), Some(&CellValue::Text("web".into())));
    }

    #[test]
    fn test_parse_header_only() {
        let ds = parse_delimited("Statement\n".as_bytes(), b',').unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.columns(), &["Statement"]);
    }

    #[test]
    fn test_parse_empty_input_fails() {
        let result = parse_delimited("".as_bytes(), b',');
        assert!(matches!(result, Err(TaggerError::InputRead(_))));
    }

    #[test]
    fn test_parse_ragged_rows_fails() {
        let data = "a,b\n1,2\n1,2,3\n";
        let result = parse_delimited(data.as_bytes(), b',');
        assert!(matches!(result, Err(TaggerError::InputRead(_))));
    }

    #[test]
    fn test_parse_invalid_utf8_fails() {
        let data: &[u8] = b"Statement\n\xff\xfe bad\n";
        let result = parse_delimited(data, b',');
        assert!(matches!(result, Err(TaggerError::InputRead(_))));
    }
}
