//! 接続先・遷移先の設定

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 一覧APIのデフォルト接続先
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:3001";

/// クライアント設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// APIのベースURL
    pub api_base: String,
    /// 一覧取得のパス
    pub reports_path: String,
    /// 新規作成ページ
    pub create_page: String,
    /// 詳細ページ
    pub detail_page: String,
    /// 選択中レポートIDを渡すCookie名
    pub selection_cookie: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            reports_path: "/report".into(),
            create_page: "/SignUp".into(),
            detail_page: "/project".into(),
            selection_cookie: "projectID".into(),
        }
    }
}

impl ClientConfig {
    /// ベースURLだけ差し替えた設定
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// 一覧取得のURL
    ///
    /// ```
    /// use inspection_history_common::ClientConfig;
    ///
    /// let config = ClientConfig::default();
    /// assert_eq!(config.reports_url(), "http://127.0.0.1:3001/report");
    /// ```
    pub fn reports_url(&self) -> String {
        join_url(&self.api_base, &self.reports_path)
    }

    /// 設定値の検査
    pub fn validate(&self) -> Result<()> {
        let base = self.api_base.trim();
        if base.is_empty() {
            return Err(Error::Config("api_base が空です".into()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_base は http:// または https:// で始めてください: {}",
                base
            )));
        }
        if self.selection_cookie.is_empty()
            || self
                .selection_cookie
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '=' | ';' | ','))
        {
            return Err(Error::Config(format!(
                "Cookie名が不正です: {:?}",
                self.selection_cookie
            )));
        }
        Ok(())
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim();
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.reports_url(), "http://127.0.0.1:3001/report");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reports_url_joins_slashes() {
        let config = ClientConfig::default().with_api_base("http://inspect.local:8080/");
        assert_eq!(config.reports_url(), "http://inspect.local:8080/report");

        let config = ClientConfig {
            reports_path: "api/report".into(),
            ..ClientConfig::default().with_api_base("http://inspect.local")
        };
        assert_eq!(config.reports_url(), "http://inspect.local/api/report");
    }

    #[test]
    fn test_validate_rejects_bad_base() {
        assert!(ClientConfig::default().with_api_base("").validate().is_err());
        assert!(ClientConfig::default()
            .with_api_base("127.0.0.1:3001")
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_cookie_name() {
        let config = ClientConfig {
            selection_cookie: "project id".into(),
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_base":"https://reports.example"}"#).unwrap();
        assert_eq!(config.api_base, "https://reports.example");
        assert_eq!(config.reports_path, "/report");
        assert_eq!(config.selection_cookie, "projectID");
    }
}
