//! Table formatting for CLI output

use coffee_common::{ApiRoute, ConfigurationError, FrontendConfig};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Permission")]
    permission: String,
}

fn settings_table(entries: Vec<(&'static str, String)>) -> String {
    let rows: Vec<SettingRow> = entries
        .into_iter()
        .map(|(key, value)| SettingRow {
            key: key.to_string(),
            value,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Every field of the record as a key/value table
pub fn render_config(config: &FrontendConfig) -> String {
    settings_table(config.entries())
}

/// Derived Auth0 endpoints as a key/value table
pub fn render_auth_endpoints(config: &FrontendConfig) -> String {
    settings_table(config.auth().endpoints())
}

/// Backend routes with absolute URLs
pub fn render_routes(
    config: &FrontendConfig,
    routes: &[ApiRoute],
) -> Result<String, ConfigurationError> {
    let rows = routes
        .iter()
        .map(|route| {
            Ok(RouteRow {
                method: route.method().to_string(),
                url: config.route_url(route)?.to_string(),
                permission: route.permission().unwrap_or("public").to_string(),
            })
        })
        .collect::<Result<Vec<_>, ConfigurationError>>()?;

    let mut table = Table::new(rows);
    table.with(Style::modern());
    Ok(table.to_string())
}
