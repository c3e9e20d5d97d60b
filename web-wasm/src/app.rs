//! メインアプリケーションコンポーネント

use inspection_history_common::ClientConfig;
use leptos::prelude::*;
use crate::components::{header::Header, historic_page::HistoricPage};

/// ビルド時の `INSPECTION_API_BASE` を反映した設定
pub fn page_config() -> ClientConfig {
    match option_env!("INSPECTION_API_BASE") {
        Some(base) if !base.trim().is_empty() => ClientConfig::default().with_api_base(base),
        _ => ClientConfig::default(),
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = page_config();
    if let Err(e) = config.validate() {
        gloo::console::error!(format!("設定エラー: {}", e));
    }

    view! {
        <div class="container">
            <Header />
            <HistoricPage config=config />
        </div>
    }
}
