//! 分類処理の一括実行
//!
//! 読み込み → 辞書準備 → 分類 → 出力 を順に行う。
//! いずれかの段階で失敗した場合、出力ファイルは作成しない。

use crate::dictionary_editor;
use crate::error::Result;
use crate::export;
use crate::reader;
use indicatif::{ProgressBar, ProgressStyle};
use keyword_tagger_common::{classify_with_progress, ClassificationSummary, Dataset, DictionarySet};
use std::path::PathBuf;

/// 分類オプション
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
    pub text_column: String,
    pub output_file_name: String,
    pub show_progress: bool,
}

/// 分類結果
#[derive(Debug)]
pub struct ClassifyOutcome {
    pub dataset: Dataset,
    pub dictionaries: DictionarySet,
    pub summary: ClassificationSummary,
    pub output_path: PathBuf,
}

pub fn classify_file(options: &ClassifyOptions) -> Result<ClassifyOutcome> {
    let output_path = export::resolve_output_path(
        &options.input,
        options.output.as_deref(),
        &options.output_file_name,
    );
    // 形式は読み込み前に確認する
    export::OutputFormat::from_path(&output_path)?;

    println!("[1/3] 入力ファイルを読み込み中...");
    let mut dataset = reader::read_dataset(&options.input)?;
    println!("✔ {}件のレコードを読み込み\n", dataset.len());

    let store = dictionary_editor::load_store(options.dictionary.as_deref())?;
    let dictionaries = store.current().clone();

    println!("[2/3] 分類中... (テキスト列: {})", options.text_column);
    let summary = classify_dataset(&mut dataset, &dictionaries, &options.text_column, options.show_progress)?;
    println!("✔ 分類完了\n");

    println!("[3/3] 結果を保存中...");
    export::export_dataset(&dataset, &output_path)?;
    println!("✔ 出力: {}", output_path.display());

    Ok(ClassifyOutcome {
        dataset,
        dictionaries,
        summary,
        output_path,
    })
}

fn classify_dataset(
    dataset: &mut Dataset,
    dictionaries: &DictionarySet,
    text_column: &str,
    show_progress: bool,
) -> Result<ClassificationSummary> {
    let progress = if show_progress {
        let pb = ProgressBar::new(dataset.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len}") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = classify_with_progress(dataset, dictionaries, text_column, |done, _| {
        progress.set_position(done as u64)
    });
    progress.finish_and_clear();

    Ok(result?)
}
