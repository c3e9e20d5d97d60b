//! Inspection History Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod parser;
pub mod history;
pub mod navigation;
pub mod config;

pub use types::{Report, ReportId, ReportList};
pub use error::{Error, FetchError, Result};
pub use parser::parse_report_list;
pub use history::{HistoryController, HistoryState};
pub use navigation::{Destination, Navigator, open_new_report, open_report_detail, selection_cookie};
pub use config::ClientConfig;
