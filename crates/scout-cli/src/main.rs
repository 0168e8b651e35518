mod render;
mod session;

use clap::{Parser, Subcommand};

use crate::session::SearchSession;

const DEFAULT_SERVER: &str = "http://localhost:3001";

#[derive(Debug, Parser)]
#[command(name = "scout-cli")]
#[command(about = "Find Clash of Clans strategies from Reddit and YouTube")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for strategies
    Search {
        query: String,
        #[arg(long, env = "SCOUT_SERVER_URL", default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Check that the search server is up
    Health {
        #[arg(long, env = "SCOUT_SERVER_URL", default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search { query, server }) => run_search(&server, &query).await,
        Some(Commands::Health { server }) => run_health(&server).await,
        None => {
            println!("{}", render::render_session(&SearchSession::new(DEFAULT_SERVER)?));
            Ok(())
        }
    }
}

async fn run_search(server: &str, query: &str) -> anyhow::Result<()> {
    let mut session = SearchSession::new(server)?;
    eprintln!("{}", render::LOADING);
    session.search_strategies(query).await;

    let view = render::render_session(&session);
    if let Some(failure) = session.error() {
        eprint!("{view}");
        anyhow::bail!("search failed: {failure}");
    }
    print!("{view}");
    Ok(())
}

async fn run_health(server: &str) -> anyhow::Result<()> {
    let session = SearchSession::new(server)?;
    let status = session.health().await?;
    println!("server status: {status}");
    Ok(())
}

#[cfg(test)]
mod tests;
