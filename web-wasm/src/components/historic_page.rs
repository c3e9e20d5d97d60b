//! 点検履歴ページ
//!
//! マウント時に一覧APIを1回だけ呼び、結果を `HistoryController` に反映する。
//! 取得失敗はコンソールに出力し、画面にもエラーを表示する。

use gloo::console;
use inspection_history_common::{
    open_new_report, open_report_detail, ClientConfig, HistoryController, HistoryState, ReportId,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::fetch_reports;
use crate::browser::BrowserNavigator;
use crate::components::{report_table::ReportTable, status_banner::StatusBanner};

#[component]
pub fn HistoricPage(config: ClientConfig) -> impl IntoView {
    let (page, set_page) = signal(HistoryController::default());

    // 一覧取得
    let load = {
        let reports_url = config.reports_url();
        move || {
            let url = reports_url.clone();
            spawn_local(async move {
                let result = fetch_reports(&url).await;
                match &result {
                    Ok(reports) => console::log!(format!("点検レポート取得: {}件", reports.len())),
                    Err(e) => console::error!(format!("点検レポート取得失敗: {}", e)),
                }
                // ページ破棄後に届いた結果は捨てる
                let _ = set_page.try_update(|page| page.finish(result));
            });
        }
    };

    // 再試行ハンドラ（失敗状態のときのみ）
    let on_retry = {
        let load = load.clone();
        move |_: ()| {
            let mut started = false;
            set_page.update(|page| started = page.retry());
            if started {
                load();
            }
        }
    };

    // 行の表示ボタン
    let on_view = {
        let config = config.clone();
        move |id: ReportId| {
            console::log!(format!("レポート選択: {}", id));
            if let Err(e) = open_report_detail(&BrowserNavigator, &config, &id) {
                console::error!(format!("詳細ページを開けません: {}", e));
            }
        }
    };

    // 新規作成ボタン
    let on_create = move |_| {
        if let Err(e) = open_new_report(&BrowserNavigator, &config) {
            console::error!(format!("作成ページを開けません: {}", e));
        }
    };

    let mut started = false;
    set_page.update(|page| started = page.mount());
    if started {
        load();
    }

    view! {
        <section class="history-card">
            <h1 class="history-title">"Histórico de inspeções"</h1>

            {move || {
                let on_retry = on_retry.clone();
                page.with(|page| {
                    let state = page.state();
                    state.error().cloned().map(|error| {
                        let retryable = matches!(state, HistoryState::Failed(_));
                        view! { <StatusBanner error=error retryable=retryable on_retry=on_retry /> }
                    })
                })
            }}

            {move || {
                let on_view = on_view.clone();
                page.with(|page| {
                    let state = page.state();
                    if state.is_loading() {
                        view! { <p class="text-muted">"Carregando inspeções..."</p> }.into_any()
                    } else if state.is_empty_result() {
                        view! { <p class="text-muted">"Nenhuma inspeção registrada"</p> }.into_any()
                    } else {
                        let rows = state.rows().into_iter().cloned().collect::<Vec<_>>();
                        view! { <ReportTable rows=rows on_view=on_view /> }.into_any()
                    }
                })
            }}

            <button class="btn btn-primary add-report" on:click=on_create>
                "Adicionar projeto"
            </button>
        </section>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn unreachable_config() -> ClientConfig {
        ClientConfig::default().with_api_base("http://127.0.0.1:9")
    }

    fn container() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let div: web_sys::HtmlElement = document
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        document.body().unwrap().append_child(&div).unwrap();
        div
    }

    #[wasm_bindgen_test]
    async fn wasm_unreachable_endpoint_shows_failed_banner() {
        let parent = container();
        let config = unreachable_config();
        let _handle = leptos::mount::mount_to(parent.clone(), move || {
            view! { <HistoricPage config=config /> }
        });

        assert!(parent.inner_html().contains("Carregando"));
        TimeoutFuture::new(1_000).await;

        let html = parent.inner_html();
        assert!(html.contains("status-banner"));
        assert!(html.contains("Tentar novamente"));
        assert!(!html.contains("Carregando"));
    }

    #[wasm_bindgen_test]
    async fn wasm_unmount_before_fetch_resolves() {
        let parent = container();
        let config = unreachable_config();
        let handle = leptos::mount::mount_to(parent.clone(), move || {
            view! { <HistoricPage config=config /> }
        });
        drop(handle);

        // 破棄後に取得が失敗で完了しても描画されない
        TimeoutFuture::new(1_000).await;
        assert!(!parent.inner_html().contains("status-banner"));
    }
}
