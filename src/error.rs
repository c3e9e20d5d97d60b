use inspection_history_common::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("レポート一覧の取得に失敗: {0}")]
    Fetch(#[from] FetchError),

    #[error("レポートが見つかりません: id={0}")]
    ReportNotFound(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    Client(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<inspection_history_common::Error> for HistoryError {
    fn from(e: inspection_history_common::Error) -> Self {
        match e {
            inspection_history_common::Error::Fetch(f) => HistoryError::Fetch(f),
            inspection_history_common::Error::Json(j) => HistoryError::JsonParse(j),
            other => HistoryError::Config(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;
