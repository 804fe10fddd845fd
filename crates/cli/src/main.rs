use anyhow::Result;
use clap::{Parser, Subcommand};
use incident_tracker_core::{database_url_from_env, pool_max_connections_from_env};
use incident_tracker_storage::SqliteStorage;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "incident-tracker")]
#[command(about = "Incident-tracking record editor with deduplicated issue vocabulary", long_about = None)]
struct Cli {
    /// SQLite database URL (defaults to INCIDENT_TRACKER_DATABASE_URL or the local data dir)
    #[arg(short, long, global = true)]
    database: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print rows as JSON
    Rows {
        /// Case-insensitive substring of incident or assignee
        #[arg(short, long)]
        filter: Option<String>,
        /// Exact assignee; repeatable
        #[arg(short, long)]
        assignee: Vec<String>,
    },
    /// Print the identified-issue vocabulary as JSON
    Issues,
}

/// Create the parent directory of a file-backed SQLite URL.
pub(crate) fn ensure_db_dir(database_url: &str) -> Result<()> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .map(|p| p.split('?').next().unwrap_or(p));
    if let Some(path) = path.filter(|p| !p.is_empty() && !p.starts_with(":memory:")) {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }
    Ok(())
}

pub(crate) async fn open_storage(database: Option<String>) -> Result<SqliteStorage> {
    let url = database.unwrap_or_else(database_url_from_env);
    ensure_db_dir(&url)?;
    tracing::debug!(url = %url, "opening database");
    Ok(SqliteStorage::new(&url, pool_max_connections_from_env()).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(cli.database, port, host).await?,
        Commands::Rows { filter, assignee } => {
            commands::inspect::rows(cli.database, filter, assignee).await?;
        },
        Commands::Issues => commands::inspect::issues(cli.database).await?,
    }

    Ok(())
}
