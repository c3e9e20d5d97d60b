//! tracing 初期化
//!
//! 優先順位: `INSPECTION_LOG` > `RUST_LOG` > `--verbose`/`--quiet` > warn

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "INSPECTION_LOG";

pub fn default_level(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// stderr へ出力する subscriber を登録（2回目以降は無視）
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet).as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false, false), Level::WARN);
        assert_eq!(default_level(true, false), Level::DEBUG);
        assert_eq!(default_level(false, true), Level::ERROR);
        assert_eq!(default_level(true, true), Level::DEBUG);
    }
}
