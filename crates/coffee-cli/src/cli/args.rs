use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use coffee_common::{load, ConfigHandle, ConfigSelection, Environment};
use std::path::PathBuf;
use tracing::debug;

/// Coffee CLI - Inspect the Coffee Shop frontend configuration
#[derive(Parser, Debug)]
#[command(
    name = "coffee",
    author = "Coffee Shop Team",
    version,
    about = "Coffee CLI - Inspect the Coffee Shop frontend configuration",
    long_about = "Inspect, validate and export the configuration the Coffee Shop frontend is built with.

The active record is the compiled-in preset for the selected environment, or a
complete record file. Selection comes from --env/--config, then COFFEE_ENV and
COFFEE_CONFIG, then the development preset.

CONFIGURATION:
  coffee config show                 # Show the active record
  coffee config get auth.clientId    # Print one value
  coffee config validate             # Check every field
  coffee config export -o env.toml   # Write a complete record file

AUTHENTICATION:
  coffee auth endpoints              # Auth0 domain, issuer, JWKS
  coffee auth login-link             # Link that starts a login

BACKEND:
  coffee api routes                  # Routes, URLs and permissions"
)]
pub struct Args {
    /// Environment preset (development, staging, production)
    #[arg(short, long, global = true)]
    pub env: Option<Environment>,

    /// Complete record file (TOML or JSON) to use instead of a preset
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Resolve which record to activate: flags win over environment variables
    pub fn selection(&self) -> Result<ConfigSelection> {
        let selection = ConfigSelection::from_env_with_overrides(self.env, self.config.clone())?;
        debug!("Configuration selection: {:?}", selection);
        Ok(selection)
    }

    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let selection = self.selection()?;

        match self.command {
            Commands::Config { action } => {
                handlers::config::handle_config(action, &selection, self.json).await
            }
            Commands::Auth { action } => {
                let config = ConfigHandle::new(load(&selection)?);
                handlers::auth::handle_auth(action, &config, self.json)
            }
            Commands::Api { action } => {
                let config = ConfigHandle::new(load(&selection)?);
                handlers::api::handle_api(action, &config, self.json)
            }
        }
    }
}
