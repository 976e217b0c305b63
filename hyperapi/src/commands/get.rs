// hyperapi/src/commands/get.rs
//
// USE CASE: Fetch one automated model.

use crate::cli::ConnectionArgs;

pub async fn execute(connection: &ConnectionArgs, project: String, model: String) -> anyhow::Result<()> {
    let client = super::connect(connection)?;
    let json = client.automated_models(project).get_by_id(&model).await?;
    super::print_json(&json)
}
