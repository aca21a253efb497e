pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cinemas")]
#[command(about = "Today's cinema schedule ranked by catalog rating", long_about = None)]
pub struct Cli {
    /// Number of movies enriched concurrently (overrides the config file)
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,

    /// Config file (default: ~/.config/cinemas/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print today's movies sorted by rating
    List,
    /// Print a single movie as JSON
    Show {
        /// Schedule ID of the movie
        id: i64,
    },
    /// Run the web front-end
    Serve {
        /// Address to bind (overrides the config file)
        #[arg(long)]
        address: Option<String>,

        /// Port to bind (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
