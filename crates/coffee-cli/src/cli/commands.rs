use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the active frontend configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show identity provider settings derived from the configuration
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Show backend routes reachable through the configured API URL
    Api {
        #[command(subcommand)]
        action: ApiAction,
    },
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the active configuration
    Show,

    /// Get a single configuration value
    Get {
        /// Configuration key (e.g. apiServerUrl, auth.clientId)
        key: String,
    },

    /// Check that every field is present and well formed
    Validate,

    /// Write the active configuration as a complete record file
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Toml)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Record file formats
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Toml,
    Json,
}

/// Identity provider actions
#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Show the Auth0 domain, issuer and endpoints
    Endpoints,

    /// Print the link that starts a login
    LoginLink {
        /// Path appended to the callback URL
        #[arg(long, default_value = "")]
        callback_path: String,
    },

    /// Print the link that ends the Auth0 session
    LogoutLink,
}

/// Backend API actions
#[derive(Subcommand, Debug)]
pub enum ApiAction {
    /// List routes with their absolute URLs and required permissions
    Routes {
        /// Drink id used for routes that take one
        #[arg(long, default_value_t = 1)]
        id: u64,
    },
}
