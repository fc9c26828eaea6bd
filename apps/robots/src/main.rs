use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    load_settings, HistoryRouter, IndexController, IndexViewModel, ReqwestHttpGet,
};
use shared::domain::RobotId;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Loads the robots index from a server and optionally opens a robot's
/// detail route.
#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the robots backend; overrides config and environment.
    #[arg(long)]
    server_url: Option<String>,
    /// Client config file; defaults to ./client.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Robot identifier whose detail route should be opened.
    #[arg(long)]
    details: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    info!(server_url = %settings.server_url, "loading robots index");

    let http = Arc::new(ReqwestHttpGet::new(
        &settings.server_url,
        settings.request_timeout(),
    )?);
    let router = Arc::new(HistoryRouter::starting_at("robots"));
    let mut controller =
        IndexController::new(http, router.clone(), IndexViewModel::new(), &settings);

    let count = controller
        .loaded()
        .await
        .context("failed to load robot list")?;
    println!("Loaded {count} robot(s)");
    for robot in controller.view().robots.get().unwrap_or_default() {
        match robot.id() {
            Some(id) => println!("  {id}: {}", serde_json::to_string(robot.as_value())?),
            None => println!("  -: {}", serde_json::to_string(robot.as_value())?),
        }
    }

    if let Some(id) = args.details {
        controller.details(RobotId::from(id));
        if let Some(path) = router.current_path() {
            println!("Navigated to {path}");
        }
    }

    Ok(())
}
