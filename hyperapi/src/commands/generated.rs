// hyperapi/src/commands/generated.rs
//
// USE CASE: List the models an automated model search produced.

use crate::cli::ConnectionArgs;

pub async fn execute(connection: &ConnectionArgs, project: String, model: String) -> anyhow::Result<()> {
    let client = super::connect(connection)?;
    let json = client
        .automated_models(project)
        .get_generated_models(&model)
        .await?;
    super::print_json(&json)
}
