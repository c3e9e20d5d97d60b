//! バックエンドAPI呼び出し

pub mod reports;

pub use reports::fetch_reports;
