//! Backend API command handlers

use crate::cli::commands::ApiAction;
use crate::error::Result;
use crate::output::{json_output, print_info, table_output};
use coffee_common::{ApiRoute, ConfigHandle, FrontendConfig};
use serde_json::{json, Value};

/// Handle backend API commands
pub fn handle_api(action: ApiAction, config: &ConfigHandle, json: bool) -> Result<()> {
    match action {
        ApiAction::Routes { id } => {
            let routes = ApiRoute::all(id);

            if json {
                json_output(&route_listing(config.get(), &routes)?)?;
            } else {
                print_info(&format!("Backend: {}", config.get().api_server_url()));
                println!("{}", table_output::render_routes(config.get(), &routes)?);
            }
        }
    }

    Ok(())
}

/// Routes as JSON objects; `permission` is null for public routes
pub fn route_listing(config: &FrontendConfig, routes: &[ApiRoute]) -> Result<Vec<Value>> {
    routes
        .iter()
        .map(|route| {
            Ok(json!({
                "method": route.method(),
                "url": config.route_url(route)?.as_str(),
                "permission": route.permission(),
            }))
        })
        .collect()
}
