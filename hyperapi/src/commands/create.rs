// hyperapi/src/commands/create.rs
//
// USE CASE: Start an automated model search and wait for it.

use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use hyperapi_core::CreateOutcome;
use hyperapi_core::domain::model::{Dataset, ModelParams, Target};

use crate::cli::ConnectionArgs;

fn read_json(path: &Path) -> anyhow::Result<Value> {
    debug!(?path, "Reading JSON record");
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {:?}", path))
}

pub async fn execute(
    connection: &ConnectionArgs,
    project: String,
    dataset: PathBuf,
    target: PathBuf,
    params: PathBuf,
) -> anyhow::Result<()> {
    let dataset = Dataset::from_json(read_json(&dataset)?)?;
    let target: Target = serde_json::from_value(read_json(&target)?)
        .with_context(|| format!("Invalid target record in {:?}", target))?;
    let params: ModelParams = serde_json::from_value(read_json(&params)?)
        .with_context(|| format!("Invalid model parameters in {:?}", params))?;

    let client = super::connect(connection)?;

    println!(
        "🚀 Starting automated model on '{}' (target '{}')...",
        dataset.name, target.name
    );
    let start = std::time::Instant::now();

    match client
        .automated_models(project)
        .create(&dataset, &target, &params)
        .await?
    {
        CreateOutcome::Created(model) => {
            println!("\n{}", model);
            println!("\n✨ SUCCESS! Automated model ready in {:.2?}", start.elapsed());
        }
        CreateOutcome::Rejected(rejection) => {
            info!(field = rejection.field, "Automated model not started");
            println!("⚠️  {}", rejection);
        }
    }
    Ok(())
}
