//! 分類処理の統合テスト
//!
//! 入力ファイル → 分類 → 出力ファイル の一連の流れを検証

use keyword_tagger::error::TaggerError;
use keyword_tagger::export;
use keyword_tagger::pipeline::{classify_file, ClassifyOptions};
use keyword_tagger::reader;
use keyword_tagger_common::CellValue;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn options(input: &Path, output: Option<PathBuf>, dictionary: Option<PathBuf>) -> ClassifyOptions {
    ClassifyOptions {
        input: input.to_path_buf(),
        output,
        dictionary,
        text_column: "Statement".to_string(),
        output_file_name: "classified_data.csv".to_string(),
        show_progress: false,
    }
}

const SAMPLE_CSV: &str = "id,Statement\n\
1,LIMITED TIME offer\n\
2,Hurry! VIP members get in first\n\
3,The weather is nice today\n\
4,\n";

/// CSV入力 → CSV出力（列順・値）
#[test]
fn test_classify_csv_to_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("input.csv");
    std::fs::write(&input, SAMPLE_CSV).unwrap();

    let outcome = classify_file(&options(&input, None, None)).expect("分類に失敗");

    assert_eq!(outcome.output_path, dir.path().join("classified_data.csv"));
    assert_eq!(outcome.summary.total_records, 4);
    assert_eq!(outcome.summary.untagged_records, 2);

    let written = std::fs::read_to_string(&outcome.output_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "id,Statement,Tags,urgency_marketing,exclusive_marketing");
    assert_eq!(lines[1], "1,LIMITED TIME offer,urgency_marketing,True,False");
    assert_eq!(
        lines[2],
        "2,Hurry! VIP members get in first,\"urgency_marketing, exclusive_marketing\",True,True"
    );
    assert_eq!(lines[3], "3,The weather is nice today,,False,False");
    assert_eq!(lines[4], "4,,,False,False");
}

/// 出力を再分類しても結果が変わらない
#[test]
fn test_classify_output_again_is_stable() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("input.csv");
    std::fs::write(&input, SAMPLE_CSV).unwrap();

    let first = classify_file(&options(&input, None, None)).unwrap();
    let second_out = dir.path().join("second.csv");
    let second = classify_file(&options(&first.output_path, Some(second_out.clone()), None)).unwrap();

    assert_eq!(first.dataset.columns(), second.dataset.columns());
    let first_text = std::fs::read_to_string(&first.output_path).unwrap();
    let second_text = std::fs::read_to_string(&second_out).unwrap();
    assert_eq!(first_text, second_text);
}

/// テキスト列がない場合は出力しない
#[test]
fn test_missing_text_column_produces_no_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("input.csv");
    std::fs::write(&input, "id,text\n1,hurry\n").unwrap();

    let result = classify_file(&options(&input, None, None));

    assert!(matches!(
        result,
        Err(TaggerError::Common(keyword_tagger_common::Error::Schema { .. }))
    ));
    assert!(!dir.path().join("classified_data.csv").exists());
}

/// 不正な辞書ファイルは分類前にエラー
#[test]
fn test_invalid_dictionary_produces_no_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("input.csv");
    let dict = dir.path().join("dict.json");
    std::fs::write(&input, SAMPLE_CSV).unwrap();
    std::fs::write(&dict, "{ \"broken\": [").unwrap();

    let result = classify_file(&options(&input, None, Some(dict)));

    assert!(matches!(
        result,
        Err(TaggerError::Common(keyword_tagger_common::Error::Configuration(_)))
    ));
    assert!(!dir.path().join("classified_data.csv").exists());
}

/// カスタム辞書のカテゴリ順が出力列順になる
#[test]
fn test_custom_dictionary_column_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("input.csv");
    let dict = dir.path().join("dict.json");
    std::fs::write(&input, "Statement\nFree shipping on every order\n").unwrap();
    std::fs::write(&dict, r#"{"shipping": ["free shipping"], "pricing": ["discount"]}"#).unwrap();

    let outcome = classify_file(&options(&input, None, Some(dict))).unwrap();

    assert_eq!(outcome.dataset.columns(), &["Statement", "Tags", "shipping", "pricing"]);
    assert_eq!(outcome.dataset.get(0, "Tags"), Some(&CellValue::Text("shipping".into())));
    assert_eq!(outcome.dataset.get(0, "pricing"), Some(&CellValue::Bool(false)));
}

/// 読み込めない入力はInputReadエラー
#[test]
fn test_malformed_csv_is_input_read_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("input.csv");
    std::fs::write(&input, "id,Statement\n1,ok\n2,too,many,fields\n").unwrap();

    let result = classify_file(&options(&input, None, None));

    assert!(matches!(result, Err(TaggerError::InputRead(_))));
    assert!(!dir.path().join("classified_data.csv").exists());
}

/// 未対応の出力形式は読み込み前にエラー
#[test]
fn test_unsupported_output_format() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("input.csv");
    std::fs::write(&input, SAMPLE_CSV).unwrap();

    let result = classify_file(&options(&input, Some(dir.path().join("out.pdf")), None));
    assert!(matches!(result, Err(TaggerError::UnsupportedFormat(_))));
}

/// Excel出力 → 再読み込みで真偽値セルを保持
#[test]
fn test_classify_to_excel_and_read_back() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("input.csv");
    let output = dir.path().join("result.xlsx");
    std::fs::write(&input, SAMPLE_CSV).unwrap();

    classify_file(&options(&input, Some(output.clone()), None)).expect("Excel出力に失敗");
    assert!(output.exists(), "Excelファイルが作成されていない");

    let reloaded = reader::read_dataset(&output).expect("Excel読み込みに失敗");
    assert_eq!(
        reloaded.columns(),
        &["id", "Statement", "Tags", "urgency_marketing", "exclusive_marketing"]
    );
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.get(1, "exclusive_marketing"), Some(&CellValue::Bool(true)));
    assert_eq!(reloaded.get(2, "urgency_marketing"), Some(&CellValue::Bool(false)));
}

/// Excel入力を分類できる
#[test]
fn test_classify_excel_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let source = dir.path().join("source.xlsx");

    let mut ds = keyword_tagger_common::Dataset::new(vec!["Statement".into(), "score".into()]);
    ds.push_row(vec!["Private sale this weekend".into(), CellValue::Float(4.5)]);
    ds.push_row(vec![CellValue::Empty, CellValue::Integer(2)]);
    export::export_dataset(&ds, &source).unwrap();

    let output = dir.path().join("out.csv");
    let outcome = classify_file(&options(&source, Some(output), None)).unwrap();

    assert_eq!(
        outcome.dataset.get(0, "Tags"),
        Some(&CellValue::Text("exclusive_marketing".into()))
    );
    assert_eq!(outcome.dataset.get(1, "Tags"), Some(&CellValue::Text(String::new())));
}
