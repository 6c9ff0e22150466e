use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error(transparent)]
    Common(#[from] keyword_tagger_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("入力ファイルの読み込みに失敗: {0}")]
    InputRead(String),

    #[error("未対応のファイル形式: {0}")]
    UnsupportedFormat(String),

    #[error("出力エラー: {0}")]
    Export(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaggerError>;
