// src/main.rs
use clap::Parser;
use crossterm::{execute, terminal::SetTitle};
use koora_teletext::cli::Args;
use koora_teletext::commands::{
    handle_config_update_command, handle_fixture_command, handle_list_config_command,
    handle_list_mirrored_command, handle_once_command, handle_version_command, resolve_start_date,
};
use koora_teletext::config::Config;
use koora_teletext::data_fetcher::FootballApi;
use koora_teletext::error::AppError;
use koora_teletext::logging::setup_logging;
use koora_teletext::ui::{InteractiveOptions, run_interactive_ui};
use std::io::stdout;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must outlive every log call so buffered lines are flushed.
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.version {
        return handle_version_command().await;
    }

    if args.list_config {
        return handle_list_config_command().await;
    }

    if args.new_api_key.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
    {
        return handle_config_update_command(&args).await;
    }

    if args.list_mirrored {
        let config = Config::load_without_prompt().await?;
        return handle_list_mirrored_command(&config).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let api = FootballApi::from_config(&config)?;

    if let Some(fixture_id) = args.fixture {
        return handle_fixture_command(fixture_id, args.lang, &api).await;
    }

    if args.once || args.debug || args.sync_matches {
        return handle_once_command(&args, &config, &api).await;
    }

    let (date, tab) = resolve_start_date(&args)?;
    execute!(stdout(), SetTitle("KOORA TELETEXT"))?;

    run_interactive_ui(
        api,
        InteractiveOptions {
            language: args.lang,
            tab,
            date,
            priority_league_ids: config.priority_league_ids,
        },
    )
    .await
}
