//! Configuration command handlers

use crate::cli::commands::{ConfigAction, ExportFormat};
use crate::error::{CliError, Result};
use crate::output::{json_output, print_error, print_success, table_output};
use coffee_common::{load, ConfigSelection, ConfigurationError, FrontendConfig};
use serde_json::json;
use std::path::Path;
use tracing::{debug, info};

/// Handle configuration management commands
pub async fn handle_config(
    action: ConfigAction,
    selection: &ConfigSelection,
    json: bool,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = load(selection)?;
            if json {
                json_output(&config)?;
            } else {
                println!("{}", table_output::render_config(&config));
            }
        }
        ConfigAction::Get { key } => {
            let value = load(selection)?.lookup(&key)?;
            if json {
                json_output(&json!({ key: value }))?;
            } else {
                println!("{value}");
            }
        }
        ConfigAction::Validate => return handle_validate(selection, json),
        ConfigAction::Export { format, output } => {
            let rendered = render_export(&load(selection)?, format)?;
            match output {
                Some(path) => {
                    write_export(&path, &rendered).await?;
                    print_success(&format!("Configuration written to {}", path.display()));
                }
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}

/// Validate the selected record, reporting every violation
fn handle_validate(selection: &ConfigSelection, json: bool) -> Result<()> {
    let violations = match load(selection).and_then(|config| config.validate()) {
        Ok(()) => Vec::new(),
        Err(ConfigurationError::Invalid { violations }) => violations,
        Err(e) => return Err(e.into()),
    };

    if json {
        json_output(&json!({
            "valid": violations.is_empty(),
            "violations": violations,
        }))?;
    } else if violations.is_empty() {
        print_success("Configuration is valid");
    } else {
        for violation in &violations {
            print_error(violation);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed(violations.len()))
    }
}

/// Serialize a record in the requested file format
pub fn render_export(config: &FrontendConfig, format: ExportFormat) -> Result<String> {
    let rendered = match format {
        ExportFormat::Toml => config.to_toml()?,
        ExportFormat::Json => format!("{}\n", config.to_json()?),
    };
    Ok(rendered)
}

/// Write an exported record, creating parent directories as needed
pub async fn write_export(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing configuration to: {}", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, contents).await?;

    info!("Configuration exported successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_common::Environment;

    #[test]
    fn test_json_export_ends_with_newline() {
        let config = FrontendConfig::for_environment(Environment::Staging);
        let rendered = render_export(&config, ExportFormat::Json).unwrap();

        assert!(rendered.ends_with("}\n"));
        let parsed: FrontendConfig = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_preset_succeeds() {
        let selection = ConfigSelection::new(Some(Environment::Production), None);
        assert!(handle_validate(&selection, true).is_ok());
    }
}
