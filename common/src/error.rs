//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// 一覧取得の失敗理由
///
/// 画面の状態として保持するため `Clone` / `PartialEq` を実装する。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// リクエスト送信失敗（接続不可など）
    #[error("request failed: {0}")]
    Request(String),

    /// 2xx以外のステータス
    #[error("server responded with status {0}")]
    Status(u16),

    /// JSONとして読めない、またはレポートの形式が不正
    #[error("malformed response: {0}")]
    Malformed(String),

    /// JSONだが `{ "reports": [...] }` ではない
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("api_base が空です".to_string());
        assert_eq!(format!("{}", error), "Config error: api_base が空です");
    }

    #[test]
    fn test_fetch_error_is_transparent() {
        let error: Error = FetchError::Status(503).into();
        assert_eq!(format!("{}", error), "server responded with status 503");
        assert!(matches!(error, Error::Fetch(FetchError::Status(503))));
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Request("connection refused".into()).to_string(),
            "request failed: connection refused"
        );
        assert!(FetchError::UnexpectedShape("array".into())
            .to_string()
            .starts_with("unexpected response shape"));
    }
}
