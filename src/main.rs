use clap::Parser;
use inspection_history::{cli, client, config, error, logging, table};
use inspection_history::navigator::PrintNavigator;
use inspection_history_common::{open_report_detail, HistoryState, ReportId};
use cli::{Cli, Commands};
use client::ReportClient;
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let config = Config::load()?;

    match cli.command {
        Commands::List { json } => {
            let client_config = config.resolve_client(cli.api_base.as_deref())?;
            let client = ReportClient::new(&client_config, config.timeout_seconds)?;

            let mut history = HistoryState::default();
            let result = client.fetch_reports().await;
            if let Err(e) = &result {
                tracing::error!(url = client.reports_url(), error = %e, "failed to load reports");
            }
            history.apply(result);

            if let HistoryState::Failed(e) = history {
                return Err(e.into());
            }

            let rows = history.rows();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("Nenhuma inspeção registrada");
            } else {
                print!("{}", table::render_table(&rows));
                println!("\n{}件", rows.len());
            }
        }

        Commands::Show { id } => {
            let client_config = config.resolve_client(cli.api_base.as_deref())?;
            let client = ReportClient::new(&client_config, config.timeout_seconds)?;

            let report = client.find_report(&ReportId::new(id)).await?;
            print!("{}", table::render_detail(&report));
        }

        Commands::Open { id } => {
            let client_config = config.resolve_client(cli.api_base.as_deref())?;
            let id = ReportId::new(id);

            open_report_detail(&PrintNavigator::stdout(), &client_config, &id)?;
        }

        Commands::Config { set_api_base, show } => {
            let mut config = config;

            if let Some(base) = set_api_base {
                config.set_api_base(base)?;
                config.save()?;
                println!("✔ APIのベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ベースURL: {}", config.client.api_base);
                println!("  一覧URL: {}", config.client.reports_url());
                println!("  作成ページ: {}", config.client.create_page);
                println!("  詳細ページ: {}", config.client.detail_page);
                println!("  Cookie名: {}", config.client.selection_cookie);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                if let Ok(base) = std::env::var(config::API_BASE_ENV) {
                    println!("  ({} で上書き中: {})", config::API_BASE_ENV, base);
                }
            }
        }
    }

    Ok(())
}
