// hyperapi/src/commands/routes.rs
//
// USE CASE: Print the route table the client dispatches against.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use tracing::info;

use hyperapi_core::domain::routes::RouteRegistry;

use crate::cli::ConnectionArgs;

pub fn execute(connection: &ConnectionArgs) -> anyhow::Result<()> {
    // No configuration at all is fine: the table is then printed unchecked.
    let api_version = match super::resolve_optional_config(connection)? {
        Some(config) => config.api_version,
        None => {
            info!("No client configuration, skipping the server version check");
            None
        }
    };
    let registry = RouteRegistry::standard(api_version.as_deref())?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Route", "Method", "Path", "Parameters"]);

    for route in registry.routes() {
        let params = route
            .path_params()
            .iter()
            .map(|(name, kind)| format!("{}: {}", name, kind))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            route.name().to_string(),
            route.method().to_string(),
            route.path_template().to_string(),
            params,
        ]);
    }

    println!("🗺️  {} routes registered", registry.len());
    println!("{table}");
    Ok(())
}
