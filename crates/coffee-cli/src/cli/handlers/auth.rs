//! Identity provider command handlers

use crate::cli::commands::AuthAction;
use crate::error::Result;
use crate::output::{json_output, print_link, table_output};
use coffee_common::ConfigHandle;
use serde_json::json;

/// Handle identity provider commands
pub fn handle_auth(action: AuthAction, config: &ConfigHandle, json: bool) -> Result<()> {
    let auth = config.get().auth();

    match action {
        AuthAction::Endpoints => {
            if json {
                let endpoints: serde_json::Map<String, serde_json::Value> = auth
                    .endpoints()
                    .into_iter()
                    .map(|(name, url)| (name.to_string(), url.into()))
                    .collect();
                json_output(&endpoints)?;
            } else {
                println!("{}", table_output::render_auth_endpoints(config.get()));
            }
        }
        AuthAction::LoginLink { callback_path } => {
            let link = auth.login_link(&callback_path)?;
            if json {
                json_output(&json!({ "login_link": link.as_str() }))?;
            } else {
                print_link("Login", link.as_str());
            }
        }
        AuthAction::LogoutLink => {
            let link = auth.logout_link()?;
            if json {
                json_output(&json!({ "logout_link": link.as_str() }))?;
            } else {
                print_link("Logout", link.as_str());
            }
        }
    }

    Ok(())
}
