//! 点検レポート一覧テーブル

use inspection_history_common::{Report, ReportId};
use leptos::prelude::*;

/// 完了状態のバッジ（クラス, 文言）
fn status_badge(report: &Report) -> (&'static str, &'static str) {
    if report.is_finished {
        ("badge badge-done", "finalizada")
    } else {
        ("badge badge-open", "em andamento")
    }
}

/// 一覧テーブル
///
/// `rows` は表示順（到着順の逆）で渡す。
#[component]
pub fn ReportTable<F>(rows: Vec<Report>, on_view: F) -> impl IntoView
where
    F: Fn(ReportId) + 'static + Clone + Send,
{
    view! {
        <div class="report-table-wrap">
            <table class="report-table">
                <thead>
                    <tr>
                        <th>"Nome da Inspeção"</th>
                        <th>"Opção de área"</th>
                        <th>"Responsável"</th>
                        <th>"Visualizar"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|report| {
                        let on_view = on_view.clone();
                        let id = report.id.clone();
                        let (badge_class, badge_text) = status_badge(&report);
                        view! {
                            <tr>
                                <td>
                                    <span class="report-name">{report.report_name.clone()}</span>
                                    <span class=badge_class>{badge_text}</span>
                                </td>
                                <td>{report.area_label()}</td>
                                <td>{report.operator_label().to_string()}</td>
                                <td>
                                    <button
                                        class="btn btn-primary btn-circle"
                                        title="Visualizar"
                                        on:click=move |_| on_view(id.clone())
                                    >
                                        "+"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
