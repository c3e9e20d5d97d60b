//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Inspeções"</h1>
            <nav class="header-nav">
                <a href="/">"Início"</a>
                <a href="/historic" class="active">"Histórico"</a>
            </nav>
        </header>
    }
}
