//! 点検レポート履歴ツール（CLI）

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigator;
pub mod table;
