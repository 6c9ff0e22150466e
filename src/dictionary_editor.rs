//! 辞書ファイルの表示・編集モジュール
//!
//! 辞書はJSONファイルとして保持し、編集は `$EDITOR` で行う。
//! 読み込みに失敗した編集内容はファイルに書き込まない。

use crate::error::{Result, TaggerError};
use dialoguer::{Confirm, Editor};
use keyword_tagger_common::{DictionarySet, DictionaryStore};
use std::path::Path;

/// 辞書ストアを用意する（ファイル指定なしはデフォルト辞書）
pub fn load_store(path: Option<&Path>) -> Result<DictionaryStore> {
    let mut store = DictionaryStore::new();

    if let Some(path) = path {
        if !path.exists() {
            return Err(TaggerError::FileNotFound(path.display().to_string()));
        }
        store.load_file(path)?;
        tracing::debug!(path = %path.display(), "dictionaries loaded");
    }

    Ok(store)
}

/// 辞書をJSONファイルに保存
pub fn save_dictionaries(dictionaries: &DictionarySet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut json = dictionaries.to_json_pretty()?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}

/// 辞書をJSONで表示
pub fn show(path: Option<&Path>) -> Result<()> {
    let store = load_store(path)?;
    println!("{}", store.current().to_json_pretty()?);
    Ok(())
}

/// 辞書の概要（カテゴリごとのキーワード数）を表示
pub fn print_overview(dictionaries: &DictionarySet) {
    for category in dictionaries.categories() {
        println!("  {}: {}語", category.name, category.keywords.len());
    }
}

/// 辞書ファイルを検証
pub fn check(path: &Path) -> Result<()> {
    let store = load_store(Some(path))?;
    println!("✔ 辞書は有効です: {}", path.display());
    print_overview(store.current());
    Ok(())
}

/// デフォルト辞書で上書き
pub fn reset(path: &Path) -> Result<()> {
    let mut store = DictionaryStore::new();
    store.reset();
    save_dictionaries(store.current(), path)?;
    println!("✔ デフォルト辞書に戻しました: {}", path.display());
    print_overview(store.current());
    Ok(())
}

/// エディタで辞書を編集
///
/// ファイルが存在しなければデフォルト辞書から編集を始める。
/// 既存ファイルが不正な場合はファイルの内容をそのまま開く。
pub fn edit(path: &Path) -> Result<()> {
    let (mut store, mut text) = edit_source(path)?;

    loop {
        let edited = Editor::new()
            .extension(".json")
            .edit(&text)
            .map_err(|e| TaggerError::Prompt(e.to_string()))?;

        let Some(edited) = edited else {
            println!("変更はありません");
            return Ok(());
        };

        match store.load_json(&edited) {
            Ok(()) => break,
            Err(e) => {
                eprintln!("✗ {}", e);
                let retry = Confirm::new()
                    .with_prompt("再編集しますか?")
                    .default(true)
                    .interact()
                    .map_err(|e| TaggerError::Prompt(e.to_string()))?;

                if !retry {
                    println!("辞書は変更されていません");
                    return Ok(());
                }
                text = edited;
            }
        }
    }

    save_dictionaries(store.current(), path)?;
    println!("✔ 辞書を更新しました: {}", path.display());
    print_overview(store.current());
    Ok(())
}

/// 編集開始時の辞書ストアとエディタに渡すテキスト
fn edit_source(path: &Path) -> Result<(DictionaryStore, String)> {
    let mut store = DictionaryStore::new();

    if !path.exists() {
        println!("辞書ファイルがないため、デフォルト辞書から編集します");
        let text = store.current().to_json_pretty()?;
        return Ok((store, text));
    }

    let raw = std::fs::read_to_string(path)?;
    match store.load_json(&raw) {
        Ok(()) => {
            let text = store.current().to_json_pretty()?;
            Ok((store, text))
        }
        Err(keyword_tagger_common::Error::Configuration(reason)) => {
            eprintln!("⚠ 現在の辞書ファイルは不正です: {}", reason);
            Ok((store, raw))
        }
        Err(e) => Err(e.into()),
    }
}
