use crate::error::{Result, TaggerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 分類対象のデフォルト列名
pub const DEFAULT_TEXT_COLUMN: &str = "Statement";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 分類対象のテキスト列
    pub text_column: String,
    /// プレビュー表示する行数
    pub preview_rows: usize,
    /// 出力ファイル名（出力先省略時）
    pub output_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_column: DEFAULT_TEXT_COLUMN.into(),
            preview_rows: 10,
            output_file_name: "classified_data.csv".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TaggerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("keyword-tagger").join("config.json"))
    }

    pub fn set_text_column(&mut self, column: String) -> Result<()> {
        if column.trim().is_empty() {
            return Err(TaggerError::Config("列名が空です".into()));
        }
        self.text_column = column;
        self.save()
    }

    pub fn set_preview_rows(&mut self, rows: usize) -> Result<()> {
        self.preview_rows = rows;
        self.save()
    }
}
