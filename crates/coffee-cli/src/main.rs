//! Main entry point for the Coffee CLI

use clap::Parser;
use coffee_cli::cli::Args;
use color_eyre::eyre::{eyre, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    let binary_name = env!("CARGO_BIN_NAME").replace('-', "_");
    let default_filter = format!("{binary_name}=warn,coffee_cli=warn,coffee_common=warn");
    coffee_common::logging::init_logging(&args.verbosity, &default_filter)
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    Ok(args.run().await?)
}
