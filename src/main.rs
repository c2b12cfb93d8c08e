//! artscout - Entry Point

use artscout::app::App;
use artscout::catalog::ArtsyClient;
use artscout::model::AppError;
use artscout::view::{ColorConfig, Palette};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// artscout - search artists and browse their details in the terminal
#[derive(Parser, Debug)]
#[command(name = "artscout")]
#[command(version)]
#[command(about = "Terminal browser for the Artsy artist catalog")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API root URL (overrides config file and ARTSCOUT_API_BASE)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Results requested per search (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Minimum query length in characters
    #[arg(long)]
    pub min_query_chars: Option<usize>,

    /// Submit this query on startup
    #[arg(short, long)]
    pub search: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = artscout::config::load_config_with_precedence(args.config.clone())?;
        let merged = artscout::config::merge_config(config_file);
        let with_env = artscout::config::apply_env_overrides(merged);
        artscout::config::apply_cli_overrides(
            with_env,
            args.api_base.clone(),
            args.limit.map(|n| n as usize),
            args.min_query_chars,
        )
        .validate()?
    };

    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = artscout::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let credentials = config.credentials().ok_or_else(|| {
        AppError::Catalog(
            "missing credentials: set client_id and client_secret in the config file \
             or ARTSCOUT_CLIENT_ID / ARTSCOUT_CLIENT_SECRET"
                .to_string(),
        )
    })?;

    let client = ArtsyClient::new(&config.api_base_url, credentials, config.result_limit)
        .map_err(|e| AppError::Catalog(e.to_string()))?;

    let app = App::new(Arc::new(client), config.min_query_chars);
    let palette = Palette::with_color_config(ColorConfig::from_env_and_args(args.no_color));

    artscout::view::run(app, palette, args.search).await?;

    Ok(())
}
