//! 一覧APIレスポンスパーサー
//!
//! 受け付ける形は `{ "reports": Report[] }` のみ。
//! トップレベル配列など他の形は `UnexpectedShape` として扱い、
//! 空の一覧として黙って描画することはしない。

use crate::error::FetchError;
use crate::types::{Report, ReportList};
use serde_json::Value;

/// 一覧レスポンスをパース
///
/// # Arguments
/// * `body` - レスポンスボディ（JSON文字列）
///
/// # Returns
/// * `Ok(Vec<Report>)` - 到着順のレポート一覧
/// * `Err(FetchError::Malformed)` - JSONとして不正、またはレポートの項目が不正
/// * `Err(FetchError::UnexpectedShape)` - `reports` 配列を持つオブジェクトではない
///
/// # Examples
/// ```
/// use inspection_history_common::parse_report_list;
///
/// let body = r#"{"reports":[{"id":1,"reportName":"Galpão"}]}"#;
/// let reports = parse_report_list(body).unwrap();
/// assert_eq!(reports[0].report_name, "Galpão");
/// ```
pub fn parse_report_list(body: &str) -> Result<Vec<Report>, FetchError> {
    let value: Value = serde_json::from_str(body.trim())
        .map_err(|e| FetchError::Malformed(format!("JSONパースエラー: {}", e)))?;

    match &value {
        Value::Object(map) => match map.get("reports") {
            Some(Value::Array(_)) => {}
            Some(other) => {
                return Err(FetchError::UnexpectedShape(format!(
                    "`reports` must be an array, got {}",
                    kind_of(other)
                )))
            }
            None => {
                return Err(FetchError::UnexpectedShape(
                    "missing `reports` field".to_string(),
                ))
            }
        },
        other => {
            return Err(FetchError::UnexpectedShape(format!(
                "expected an object with `reports`, got {}",
                kind_of(other)
            )))
        }
    }

    let list: ReportList = serde_json::from_value(value)
        .map_err(|e| FetchError::Malformed(format!("レポート項目が不正: {}", e)))?;
    Ok(list.reports)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reports_keeps_arrival_order() {
        let body = r#"{"reports":[
            {"id":1,"reportName":"A"},
            {"id":2,"reportName":"B"},
            {"id":3,"reportName":"C"}
        ]}"#;
        let reports = parse_report_list(body).unwrap();
        let names: Vec<_> = reports.iter().map(|r| r.report_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_empty_reports() {
        let reports = parse_report_list(r#"{"reports":[]}"#).unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{"reports":[{"id":1,"reportName":"A"}],"total":1}"#;
        assert_eq!(parse_report_list(body).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_bare_array_is_unexpected_shape() {
        let body = r#"[{"id":1,"reportName":"A"},{"id":2,"reportName":"B"}]"#;
        let err = parse_report_list(body).unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedShape(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_parse_missing_reports_field() {
        let err = parse_report_list(r#"{"items":[]}"#).unwrap_err();
        assert_eq!(
            err,
            FetchError::UnexpectedShape("missing `reports` field".to_string())
        );
    }

    #[test]
    fn test_parse_reports_not_array() {
        let err = parse_report_list(r#"{"reports":null}"#).unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedShape(_)));
    }

    #[test]
    fn test_parse_invalid_json_is_malformed() {
        let err = parse_report_list("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_parse_invalid_report_is_malformed() {
        let err = parse_report_list(r#"{"reports":[{"id":1}]}"#).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_parse_matches_report_list_schema() {
        let body = r#"{"reports":[{"id":1,"reportName":"A","typePlace":2},{"id":"b","reportName":"B"}]}"#;
        let list: ReportList = serde_json::from_str(body).unwrap();
        assert_eq!(parse_report_list(body).unwrap(), list.reports);
    }
}
