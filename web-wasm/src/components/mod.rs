//! 画面コンポーネント

pub mod header;
pub mod historic_page;
pub mod report_table;
pub mod status_banner;
