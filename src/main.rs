use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cinemas::app::AppContext;
use cinemas::cli::{commands, Cli, Commands};
use cinemas::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(workers) = cli.workers {
        config.fetch.workers = workers;
    }
    if let Commands::Serve { address, port } = &cli.command {
        if let Some(address) = address {
            config.server.address = address.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }

    init_tracing(config.log_file.as_deref())?;

    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::List => {
            commands::list_movies(&ctx).await?;
        }
        Commands::Show { id } => {
            commands::show_movie(&ctx, id).await?;
        }
        Commands::Serve { .. } => {
            commands::serve(&ctx).await?;
        }
    }

    Ok(())
}

fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(file_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Ok(())
}
