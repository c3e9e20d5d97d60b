//! ページ遷移と選択レポートの受け渡し
//!
//! 詳細ページへは Cookie とクエリパラメータの両方でIDを渡す。
//! Cookie は遷移より先に書き込む。

use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::ReportId;

/// 遷移先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// 新規レポート作成
    NewReport,
    /// レポート詳細
    ReportDetail(ReportId),
}

impl Destination {
    /// 遷移先のパス
    pub fn path(&self, config: &ClientConfig) -> String {
        match self {
            Destination::NewReport => config.create_page.clone(),
            Destination::ReportDetail(id) => format!(
                "{}?{}={}",
                config.detail_page,
                config.selection_cookie,
                urlencoding::encode(id.as_str())
            ),
        }
    }
}

/// ブラウザ側の操作
///
/// WASMでは `document.cookie` と `window.open`、テストでは記録用の実装を使う。
pub trait Navigator {
    /// `document.cookie` に書き込む値（`name=value; path=/`）を保存
    fn store_selection(&self, cookie: &str) -> Result<()>;

    /// 新しいビューでパスを開く
    fn open(&self, path: &str) -> Result<()>;
}

/// 選択レポートIDのCookie文字列
///
/// ```
/// use inspection_history_common::{selection_cookie, ClientConfig, ReportId};
///
/// let cookie = selection_cookie(&ClientConfig::default(), &ReportId::new("42"));
/// assert_eq!(cookie, "projectID=42; path=/");
/// ```
pub fn selection_cookie(config: &ClientConfig, id: &ReportId) -> String {
    format!(
        "{}={}; path=/",
        config.selection_cookie,
        urlencoding::encode(id.as_str())
    )
}

/// 行の「表示」ボタン: IDを保存してから詳細ページを開く
pub fn open_report_detail<N: Navigator + ?Sized>(
    navigator: &N,
    config: &ClientConfig,
    id: &ReportId,
) -> Result<()> {
    navigator.store_selection(&selection_cookie(config, id))?;
    navigator.open(&Destination::ReportDetail(id.clone()).path(config))
}

/// ページの「追加」ボタン: 作成ページを開く
pub fn open_new_report<N: Navigator + ?Sized>(navigator: &N, config: &ClientConfig) -> Result<()> {
    navigator.open(&Destination::NewReport.path(config))
}
