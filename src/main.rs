use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use siv_checker::config::{self, AppConfig, AssetPaths, Secrets};
use siv_checker::LookupMode;

/// Serve the plate lookup page.
#[derive(Debug, Parser)]
#[command(name = "siv-checker", version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = config::DEFAULT_BIND)]
    bind: String,

    /// Secrets file holding AUTOWAYS_TOKEN / AUTOWAYS_BASE
    #[arg(long, default_value = config::DEFAULT_SECRETS_PATH)]
    secrets: PathBuf,

    /// Directory containing images/ and fonts/
    #[arg(long, default_value = config::DEFAULT_ASSETS_DIR)]
    assets: PathBuf,

    /// Answer every search with a canned record instead of calling the registry
    #[arg(long)]
    fixture: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("Starting siv-checker");

    let mode = if args.fixture { LookupMode::Fixture } else { LookupMode::Live };
    let assets = AssetPaths::under(&args.assets);
    // An unreadable secrets file halts the page the same way a missing token does.
    let config = match Secrets::load(&args.secrets) {
        Ok(secrets) => AppConfig::new(args.bind, assets, mode, secrets.with_env()),
        Err(e) => {
            error!("{}", e);
            AppConfig {
                bind: args.bind,
                assets,
                lookup: Err(e.to_string()),
            }
        }
    };

    siv_checker::server::run(&config)?;
    info!("Exiting siv-checker");
    Ok(())
}
