//! 端末向けの一覧・詳細表示

use chrono::{DateTime, Local, NaiveDateTime};
use inspection_history_common::Report;

const HEADERS: [&str; 4] = ["ID", "Nome da Inspeção", "Opção de área", "Responsável"];

/// 一覧テーブル（`rows` は表示順で渡す）
pub fn render_table(rows: &[&Report]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.report_name.clone(),
                r.area_label(),
                r.operator_label().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}

/// 1件の詳細表示
pub fn render_detail(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", report.report_name));
    out.push_str(&format!("  ID: {}\n", report.id));
    out.push_str(&format!("  Opção de área: {}\n", report.area_label()));
    out.push_str(&format!("  Responsável: {}\n", report.operator_label()));
    out.push_str(&format!(
        "  Média de gás: {}\n",
        report
            .gas_avg
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".into())
    ));
    out.push_str(&format!("  Criado em: {}\n", format_timestamp(report.created_at.as_deref())));
    out.push_str(&format!(
        "  Atualizado em: {}\n",
        format_timestamp(report.updated_at.as_deref())
    ));
    out.push_str(&format!(
        "  Status: {}\n",
        if report.is_finished { "finalizada" } else { "em andamento" }
    ));
    out
}

/// ISO-8601 をローカル時刻で表示（解釈できなければそのまま）
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".into();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
    }
    // タイムゾーンなし（サーバー設定によってはこちら）
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspection_history_common::parse_report_list;

    fn sample() -> Vec<Report> {
        parse_report_list(
            r#"{"reports":[
                {"id":1,"reportName":"Galpão","typePlace":2,"operator":"Ana"},
                {"id":2,"reportName":"Tanque de óleo","operator":null,"isFinished":1,
                 "gasAvg":3.456,"createdAt":"2024-05-01T10:00:00"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_table_columns_and_order() {
        let reports = sample();
        let rows: Vec<&Report> = reports.iter().rev().collect();
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].contains("Responsável"));
        assert!(lines[2].starts_with("2 "));
        assert!(lines[2].contains("Tanque de óleo"));
        assert!(lines[3].starts_with("1 "));
        assert!(lines[3].ends_with("Ana"));
    }

    #[test]
    fn test_render_empty_table_has_header_only() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_render_detail() {
        let reports = sample();
        let detail = render_detail(&reports[1]);
        assert!(detail.starts_with("Tanque de óleo\n"));
        assert!(detail.contains("Média de gás: 3.46"));
        assert!(detail.contains("Criado em: 2024-05-01 10:00"));
        assert!(detail.contains("Atualizado em: -"));
        assert!(detail.contains("Status: finalizada"));
    }

    #[test]
    fn test_format_timestamp_fallbacks() {
        assert_eq!(format_timestamp(None), "-");
        assert_eq!(format_timestamp(Some("")), "-");
        assert_eq!(format_timestamp(Some("ontem")), "ontem");
        assert_eq!(
            format_timestamp(Some("2024-05-01T10:00:00.123456")),
            "2024-05-01 10:00"
        );
    }
}
