// hyperapi/src/commands/publish.rs
//
// USE CASE: Publish a generated model.

use tracing::info;

use crate::cli::ConnectionArgs;

pub async fn execute(
    connection: &ConnectionArgs,
    project: String,
    model: String,
    generated: String,
) -> anyhow::Result<()> {
    let client = super::connect(connection)?;
    info!(%project, automodel = %model, %generated, "Publishing generated model");
    let json = client
        .automated_models(project)
        .publish(&model, &generated)
        .await?;
    println!("📢 Model {} published", generated);
    super::print_json(&json)
}
