// hyperapi/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug hyperapi list ... to see every dispatched route
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let connection = cli.connection;

    match cli.command {
        Commands::Routes => commands::routes::execute(&connection)?,
        Commands::List { project } => commands::list::execute(&connection, project).await?,
        Commands::Get { project, model } => {
            commands::get::execute(&connection, project, model).await?
        }
        Commands::Generated { project, model } => {
            commands::generated::execute(&connection, project, model).await?
        }
        Commands::Publish {
            project,
            model,
            generated,
        } => commands::publish::execute(&connection, project, model, generated).await?,
        Commands::Create {
            project,
            dataset,
            target,
            params,
        } => commands::create::execute(&connection, project, dataset, target, params).await?,
    }

    Ok(())
}
