//! 点検レポート一覧API
//!
//! `GET {api_base}/report` を1回だけ呼ぶ。タイムアウト・リトライはしない。

use inspection_history_common::{parse_report_list, FetchError, Report};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 一覧取得
///
/// # Arguments
/// * `url` - 一覧APIのURL（`ClientConfig::reports_url`）
///
/// # Returns
/// 到着順のレポート一覧。失敗理由は `FetchError` で区別する。
pub async fn fetch_reports(url: &str) -> Result<Vec<Report>, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(request_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(request_error)?;

    let window = web_sys::window()
        .ok_or_else(|| FetchError::Request("window が取得できません".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(request_error)?;
    let resp: Response = resp_value.dyn_into().map_err(request_error)?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(request_error)?)
        .await
        .map_err(|e| FetchError::Malformed(js_message(&e)))?;
    let body = text
        .as_string()
        .ok_or_else(|| FetchError::Malformed("レスポンスが文字列ではありません".to_string()))?;

    parse_report_list(&body)
}

fn request_error(value: JsValue) -> FetchError {
    FetchError::Request(js_message(&value))
}

/// JS例外からメッセージを取り出す
fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn wasm_unreachable_endpoint_is_request_error() {
        let result = fetch_reports("http://127.0.0.1:9/report").await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }
}
