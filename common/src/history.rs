//! 点検履歴ページの表示状態
//!
//! 取得結果を1つのスロットで保持する。読み込み中/取得済み/失敗を
//! 明示的な状態として持ち、空配列と失敗を区別する。

use crate::error::FetchError;
use crate::types::Report;

/// 履歴ページの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HistoryState {
    /// 初期状態（取得待ち）
    #[default]
    Loading,
    /// 最後に成功した取得結果（到着順）
    Loaded {
        reports: Vec<Report>,
        /// 取得済みの後に失敗した再取得の理由
        warning: Option<FetchError>,
    },
    /// 一度も成功していない状態での失敗
    Failed(FetchError),
}

impl HistoryState {
    /// 取得結果を反映する
    ///
    /// 成功時は一覧を置き換える（追加はしない）。取得済みの状態での失敗は
    /// 一覧を残したまま警告として保持する。
    pub fn apply(&mut self, result: Result<Vec<Report>, FetchError>) {
        *self = match (std::mem::take(self), result) {
            (_, Ok(reports)) => HistoryState::Loaded {
                reports,
                warning: None,
            },
            (HistoryState::Loaded { reports, .. }, Err(e)) => HistoryState::Loaded {
                reports,
                warning: Some(e),
            },
            (_, Err(e)) => HistoryState::Failed(e),
        };
    }

    /// 再試行を開始する（失敗状態からのみ）
    ///
    /// # Returns
    /// 読み込み中へ遷移した場合は `true`
    pub fn begin_retry(&mut self) -> bool {
        if matches!(self, HistoryState::Failed(_)) {
            *self = HistoryState::Loading;
            true
        } else {
            false
        }
    }

    /// 表示する行（到着順の逆）
    pub fn rows(&self) -> Vec<&Report> {
        match self {
            HistoryState::Loaded { reports, .. } => reports.iter().rev().collect(),
            _ => Vec::new(),
        }
    }

    /// 表示すべきエラー
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            HistoryState::Failed(e) => Some(e),
            HistoryState::Loaded { warning, .. } => warning.as_ref(),
            HistoryState::Loading => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, HistoryState::Loading)
    }

    /// 取得済みで件数0
    pub fn is_empty_result(&self) -> bool {
        matches!(self, HistoryState::Loaded { reports, .. } if reports.is_empty())
    }
}

/// 履歴ページのコントローラ
///
/// マウント時の取得は1回だけ。再試行は失敗状態かつ取得中でないときのみ。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryController {
    state: HistoryState,
    mounted: bool,
    in_flight: bool,
    requests: u32,
}

impl HistoryController {
    /// マウント時に呼ぶ。取得を開始すべきなら `true`
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.start()
    }

    /// 再試行ボタン。取得を開始すべきなら `true`
    pub fn retry(&mut self) -> bool {
        if self.in_flight || !self.state.begin_retry() {
            return false;
        }
        self.start()
    }

    /// 取得完了
    pub fn finish(&mut self, result: Result<Vec<Report>, FetchError>) {
        self.in_flight = false;
        self.state.apply(result);
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// 発行した取得の回数
    pub fn requests(&self) -> u32 {
        self.requests
    }

    fn start(&mut self) -> bool {
        self.in_flight = true;
        self.requests += 1;
        true
    }
}
