//! 点検レポート一覧APIクライアント

use crate::error::{HistoryError, Result};
use inspection_history_common::{parse_report_list, ClientConfig, FetchError, Report, ReportId};
use std::time::Duration;

pub struct ReportClient {
    http: reqwest::Client,
    reports_url: String,
}

impl ReportClient {
    pub fn new(config: &ClientConfig, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| HistoryError::Client(e.to_string()))?;

        Ok(Self {
            http,
            reports_url: config.reports_url(),
        })
    }

    pub fn reports_url(&self) -> &str {
        &self.reports_url
    }

    /// 一覧取得（到着順）
    pub async fn fetch_reports(&self) -> std::result::Result<Vec<Report>, FetchError> {
        tracing::debug!(url = %self.reports_url, "fetching reports");

        let response = self
            .http
            .get(&self.reports_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "report listing returned an error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Malformed(format!("ボディ読み込み失敗: {}", e)))?;

        let reports = parse_report_list(&body)?;
        tracing::debug!(count = reports.len(), "reports received");
        Ok(reports)
    }

    /// IDで1件取得（一覧から探す）
    pub async fn find_report(&self, id: &ReportId) -> Result<Report> {
        let reports = self.fetch_reports().await?;
        reports
            .into_iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| HistoryError::ReportNotFound(id.to_string()))
    }
}
