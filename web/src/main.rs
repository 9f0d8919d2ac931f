//! `todo-web` binary.
//!
//! # Design
//! Loads `.env`, the optional TOML file and environment overrides, installs
//! logging, then serves the page until the process is stopped. A missing or
//! invalid API root stops startup with an error.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use todo_core::TodoService;
use todo_web::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "todo-web", version, about = "Web front-end for a remote todo API")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    config.logging.init();

    let service = TodoService::connect(&config.api).context("invalid API client configuration")?;
    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to listen on {}", config.listen_addr))?;

    info!(addr = %config.listen_addr, api = %config.api.base_url, "todo web front-end listening");
    todo_web::serve(listener, todo_web::router(service)).await?;
    Ok(())
}
