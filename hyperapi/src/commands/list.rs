// hyperapi/src/commands/list.rs
//
// USE CASE: List the automated models of a project.

use tracing::info;

use crate::cli::ConnectionArgs;

pub async fn execute(connection: &ConnectionArgs, project: String) -> anyhow::Result<()> {
    let client = super::connect(connection)?;
    info!(%project, "Listing automated models");
    let models = client.automated_models(project).filter().await?;

    if models.is_empty() {
        println!("No automated model in this project.");
        return Ok(());
    }

    for model in &models {
        println!("{}\n", model);
    }
    println!("📋 {} automated models", models.len());
    Ok(())
}
