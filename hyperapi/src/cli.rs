// hyperapi/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hyperapi")]
#[command(about = "Client for the HyperCube automated model API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Directory holding hyperapi.yaml
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// API base url (overrides the configuration file)
    #[arg(long, global = true, env = "HYPERAPI_URL")]
    pub url: Option<String>,

    /// Bearer token
    #[arg(long, global = true, env = "HYPERAPI_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🗺️  Lists the registered API routes
    Routes,

    /// 📋 Lists the automated models of a project
    List {
        #[arg(long)]
        project: String,
    },

    /// 🔍 Shows one automated model (raw JSON)
    Get {
        #[arg(long)]
        project: String,
        #[arg(long)]
        model: String,
    },

    /// 🧬 Lists the models generated by an automated model
    Generated {
        #[arg(long)]
        project: String,
        #[arg(long)]
        model: String,
    },

    /// 📢 Publishes a generated model
    Publish {
        #[arg(long)]
        project: String,
        /// The automated model id
        #[arg(long)]
        model: String,
        /// The generated model id
        #[arg(long)]
        generated: String,
    },

    /// 🚀 Starts an automated model search and waits for it
    Create {
        #[arg(long)]
        project: String,
        /// Dataset record (JSON file)
        #[arg(long)]
        dataset: PathBuf,
        /// Target record (JSON file)
        #[arg(long)]
        target: PathBuf,
        /// Model parameters (JSON file)
        #[arg(long)]
        params: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_routes() -> Result<()> {
        let args = Cli::parse_from(["hyperapi", "routes"]);
        match args.command {
            Commands::Routes => Ok(()),
            _ => bail!("Expected Routes command"),
        }
    }

    #[test]
    fn test_cli_parse_publish_with_global_flags() -> Result<()> {
        let args = Cli::parse_from([
            "hyperapi",
            "publish",
            "--project",
            "p",
            "--model",
            "m",
            "--generated",
            "g",
            "--url",
            "http://localhost:8080",
        ]);
        assert_eq!(args.connection.url.as_deref(), Some("http://localhost:8080"));
        match args.command {
            Commands::Publish {
                project,
                model,
                generated,
            } => {
                assert_eq!((project.as_str(), model.as_str(), generated.as_str()), ("p", "m", "g"));
                Ok(())
            }
            _ => bail!("Expected Publish command"),
        }
    }

    #[test]
    fn test_cli_parse_create() -> Result<()> {
        let args = Cli::parse_from([
            "hyperapi",
            "create",
            "--project",
            "p",
            "--dataset",
            "d.json",
            "--target",
            "t.json",
            "--params",
            "params.json",
        ]);
        match args.command {
            Commands::Create { dataset, .. } => {
                assert_eq!(dataset.to_string_lossy(), "d.json");
                Ok(())
            }
            _ => bail!("Expected Create command"),
        }
    }
}
