//! レポート型定義
//!
//! 一覧APIのレスポンスをそのまま受ける型:
//! - ReportList: `{ "reports": [...] }` 全体
//! - Report: 1件の点検レポート
//! - ReportId: サーバー採番のID（数値/文字列どちらでも受ける）

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// レポートID
///
/// サーバーは整数で返すが、Cookieやクエリでは文字列として扱うため
/// 文字列表現に正規化して保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReportId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<i64> for ReportId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ReportId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Ok(n.into()),
            RawId::Text(s) if s.trim().is_empty() => {
                Err(serde::de::Error::custom("report id must not be empty"))
            }
            RawId::Text(s) => Ok(Self(s)),
        }
    }
}

/// エリア種別（typePlace）
///
/// バックエンドは整数コード、古いデータは文字列ラベルを返す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaType {
    Code(i64),
    Label(String),
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaType::Code(code) => write!(f, "{}", code),
            AreaType::Label(label) => f.write_str(label),
        }
    }
}

/// 点検レポート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,

    pub report_name: String,

    #[serde(default)]
    pub type_place: Option<AreaType>,

    #[serde(default)]
    pub operator: Option<String>,

    /// ガス濃度平均
    #[serde(default)]
    pub gas_avg: Option<f64>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_finished: bool,
}

impl Report {
    /// 表示用エリア種別（未設定は "-"）
    pub fn area_label(&self) -> String {
        self.type_place
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    /// 表示用担当者名（未設定は "-"）
    pub fn operator_label(&self) -> &str {
        match self.operator.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "-",
        }
    }
}

/// 一覧APIのレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportList {
    pub reports: Vec<Report>,
}

/// isFinished: 0/1 の整数、bool、null を受ける
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<RawFlag>::deserialize(deserializer)? {
        Some(RawFlag::Bool(b)) => b,
        Some(RawFlag::Int(n)) => n != 0,
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_from_backend_row() {
        let report: Report = serde_json::from_value(json!({
            "id": 42,
            "reportName": "Galpão 3",
            "typePlace": 2,
            "operator": "Ana",
            "gasAvg": 12.5,
            "createdAt": "2024-05-01T10:00:00+00:00",
            "updatedAt": null,
            "isFinished": 1
        }))
        .unwrap();

        assert_eq!(report.id, ReportId::new("42"));
        assert_eq!(report.report_name, "Galpão 3");
        assert_eq!(report.area_label(), "2");
        assert_eq!(report.operator_label(), "Ana");
        assert_eq!(report.gas_avg, Some(12.5));
        assert!(report.updated_at.is_none());
        assert!(report.is_finished);
    }

    #[test]
    fn test_report_minimal_fields() {
        let report: Report =
            serde_json::from_value(json!({ "id": "7", "reportName": "Tanque" })).unwrap();

        assert_eq!(report.id.as_str(), "7");
        assert_eq!(report.area_label(), "-");
        assert_eq!(report.operator_label(), "-");
        assert!(!report.is_finished);
    }

    #[test]
    fn test_area_type_label() {
        let report: Report = serde_json::from_value(json!({
            "id": 1,
            "reportName": "x",
            "typePlace": "Espaço confinado"
        }))
        .unwrap();
        assert_eq!(report.area_label(), "Espaço confinado");
    }

    #[test]
    fn test_blank_operator_shows_dash() {
        let report: Report = serde_json::from_value(json!({
            "id": 1,
            "reportName": "x",
            "operator": "   "
        }))
        .unwrap();
        assert_eq!(report.operator_label(), "-");
    }

    #[test]
    fn test_is_finished_accepts_bool() {
        let report: Report = serde_json::from_value(json!({
            "id": 1,
            "reportName": "x",
            "isFinished": true
        }))
        .unwrap();
        assert!(report.is_finished);
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = serde_json::from_value::<Report>(json!({ "id": "", "reportName": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_name_rejected() {
        let result = serde_json::from_value::<Report>(json!({ "id": 1 }));
        assert!(result.is_err());
    }
}
