use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "inspection-history")]
#[command(about = "点検レポート履歴の閲覧ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// エラーのみ出力
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub api_base: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// レポート一覧を新しい順に表示
    List {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// レポート1件の詳細を表示
    Show {
        /// レポートID
        #[arg(required = true)]
        id: String,
    },

    /// 詳細ページのURLと選択Cookieを表示
    Open {
        /// レポートID
        #[arg(required = true)]
        id: String,
    },

    /// 設定管理
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_api_base: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
