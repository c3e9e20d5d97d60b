//! 取得エラー表示コンポーネント

use inspection_history_common::FetchError;
use leptos::prelude::*;

/// エラー種別ごとの表示文言
fn headline(error: &FetchError) -> &'static str {
    match error {
        FetchError::Request(_) => "Não foi possível conectar ao servidor de relatórios",
        FetchError::Status(_) => "O servidor de relatórios respondeu com erro",
        FetchError::Malformed(_) | FetchError::UnexpectedShape(_) => {
            "Resposta inválida do servidor de relatórios"
        }
    }
}

#[component]
pub fn StatusBanner<F>(error: FetchError, retryable: bool, on_retry: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="status-banner error" role="alert">
            <strong>{headline(&error)}</strong>
            <p class="text-muted">{error.to_string()}</p>
            {retryable.then(|| {
                let on_retry = on_retry.clone();
                view! {
                    <button class="btn btn-secondary btn-small" on:click=move |_| on_retry(())>
                        "Tentar novamente"
                    </button>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_per_kind() {
        assert!(headline(&FetchError::Request("x".into())).contains("conectar"));
        assert!(headline(&FetchError::Status(500)).contains("erro"));
        assert_eq!(
            headline(&FetchError::Malformed("x".into())),
            headline(&FetchError::UnexpectedShape("x".into()))
        );
    }
}
