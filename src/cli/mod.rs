pub mod commands;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "dinodex")]
#[command(about = "Dinodex - dinosaur catalog admin API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create tables if needed and serve the HTTP API (default)")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides DINODEX_PORT / PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Create the database tables")]
    Migrate,

    #[command(about = "Load seed rows from a JSON file")]
    Seed {
        #[arg(long, help = "Seed file (defaults to DINODEX_SEED_FILE or data/seeders.json)")]
        file: Option<std::path::PathBuf>,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    tracing::info!(environment = ?config.environment, "configuration loaded");

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::handle(config, port).await,
        Commands::Migrate => commands::database::migrate(&config).await,
        Commands::Seed { file } => commands::database::seed(&config, file).await,
    }
}
