//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 辞書設定が不正（パース失敗・形式不一致）
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 必須カラムがデータセットに存在しない
    #[error("Schema error: column '{column}' not found (available: {})", available.join(", "))]
    Schema {
        column: String,
        available: Vec<String>,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_configuration() {
        let error = Error::Configuration("expected a JSON object".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Configuration error: expected a JSON object");
    }

    #[test]
    fn test_error_display_schema() {
        let error = Error::Schema {
            column: "Statement".to_string(),
            available: vec!["id".to_string(), "text".to_string()],
        };
        let display = format!("{}", error);
        assert_eq!(
            display,
            "Schema error: column 'Statement' not found (available: id, text)"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }
}
