use crate::error::{HistoryError, Result};
use inspection_history_common::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `api_base` を上書きする環境変数
pub const API_BASE_ENV: &str = "INSPECTION_API_BASE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| HistoryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("inspection-history").join("config.json"))
    }

    /// 実際に使う接続設定
    ///
    /// 優先順位: `--api-base` > 環境変数 > 設定ファイル
    pub fn resolve_client(&self, api_base_flag: Option<&str>) -> Result<ClientConfig> {
        let env_base = std::env::var(API_BASE_ENV).ok();
        let client = resolve_api_base(self.client.clone(), api_base_flag, env_base.as_deref());
        client.validate()?;
        Ok(client)
    }

    pub fn set_api_base(&mut self, api_base: String) -> Result<()> {
        let candidate = self.client.clone().with_api_base(api_base);
        candidate.validate()?;
        self.client = candidate;
        Ok(())
    }
}

fn resolve_api_base(client: ClientConfig, flag: Option<&str>, env: Option<&str>) -> ClientConfig {
    match flag.or(env).map(str::trim).filter(|s| !s.is_empty()) {
        Some(base) => client.with_api_base(base),
        None => client,
    }
}
