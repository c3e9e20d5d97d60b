//! ブラウザ操作（Cookie保存・新規ビューでの遷移）

use inspection_history_common::{Error, Navigator, Result};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Window};

/// `document.cookie` と `window.open` を使う Navigator
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn store_selection(&self, cookie: &str) -> Result<()> {
        let document = window()?
            .document()
            .ok_or_else(|| Error::Navigation("document が取得できません".into()))?;
        let html: HtmlDocument = document
            .dyn_into()
            .map_err(|_| Error::Navigation("HTMLドキュメントではありません".into()))?;
        html.set_cookie(cookie)
            .map_err(|e| Error::Navigation(format!("Cookie保存失敗: {:?}", e)))
    }

    fn open(&self, path: &str) -> Result<()> {
        window()?
            .open_with_url(path)
            .map(|_| ())
            .map_err(|e| Error::Navigation(format!("ページを開けません: {:?}", e)))
    }
}

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Navigation("window が取得できません".into()))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use inspection_history_common::{selection_cookie, ClientConfig, ReportId};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document_cookie() -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn wasm_store_selection_writes_cookie() {
        let cookie = selection_cookie(&ClientConfig::default(), &ReportId::new("42"));
        BrowserNavigator
            .store_selection(&cookie)
            .expect("Cookie保存失敗");

        assert!(document_cookie()
            .split("; ")
            .any(|pair| pair == "projectID=42"));
    }
}
