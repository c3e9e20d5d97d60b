//! 端末向けの Navigator（`open` コマンド用）

use inspection_history_common::{Error, Navigator, Result};
use std::cell::RefCell;
use std::io::Write;

/// Cookie と遷移先URLを順に書き出すだけの Navigator
pub struct PrintNavigator<W: Write> {
    out: RefCell<W>,
}

impl PrintNavigator<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> PrintNavigator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_line(&self, label: &str, value: &str) -> Result<()> {
        writeln!(self.out.borrow_mut(), "{}: {}", label, value)
            .map_err(|e| Error::Navigation(format!("出力失敗: {}", e)))
    }
}

impl<W: Write> Navigator for PrintNavigator<W> {
    fn store_selection(&self, cookie: &str) -> Result<()> {
        self.write_line("Cookie", cookie)
    }

    fn open(&self, path: &str) -> Result<()> {
        self.write_line("URL", path)
    }
}
