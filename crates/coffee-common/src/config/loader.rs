//! Resolution of the active record
//!
//! Selection settings come from the process environment (`COFFEE_ENV`,
//! `COFFEE_CONFIG`) and may be overridden by the caller. The result is a
//! single complete record: either a compiled-in preset or the whole contents
//! of one file. Nothing is layered on top of it.

use super::FrontendConfig;
use crate::environment::Environment;
use crate::error::ConfigurationError;
use figment::{
    providers::{Env, Format, Json, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of the environment variables read by [`ConfigSelection::from_env`]
pub const ENV_PREFIX: &str = "COFFEE_";

/// Which record to activate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSelection {
    /// Explicit environment, `None` falls back to development
    pub environment: Option<Environment>,

    /// Complete record file replacing the preset
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSelection {
    env: Option<String>,
    config: Option<PathBuf>,
}

impl ConfigSelection {
    pub fn new(environment: Option<Environment>, config_path: Option<PathBuf>) -> Self {
        Self {
            environment,
            config_path,
        }
    }

    /// Read `COFFEE_ENV` and `COFFEE_CONFIG`
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_env_with_overrides(None, None)
    }

    /// Read `COFFEE_ENV` and `COFFEE_CONFIG`, letting explicit values win.
    ///
    /// `COFFEE_ENV` is only parsed when no environment is given, so a bad
    /// variable cannot block an explicit choice.
    pub fn from_env_with_overrides(
        environment: Option<Environment>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ConfigurationError> {
        let raw: RawSelection = Figment::new()
            .merge(Env::prefixed(ENV_PREFIX).only(&["env", "config"]))
            .extract()?;

        let environment = match environment {
            Some(environment) => Some(environment),
            None => raw
                .env
                .as_deref()
                .map(str::parse::<Environment>)
                .transpose()?,
        };

        Ok(Self {
            environment,
            config_path: config_path.or(raw.config),
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment.unwrap_or_default()
    }
}

/// Resolve the record for a selection
pub fn load(selection: &ConfigSelection) -> Result<FrontendConfig, ConfigurationError> {
    let Some(path) = &selection.config_path else {
        let environment = selection.environment();
        info!("Using compiled-in {} configuration", environment);
        return Ok(FrontendConfig::for_environment(environment));
    };

    let config = load_from_file(path)?;

    if let Some(environment) = selection.environment {
        if environment.is_production() != config.production() {
            return Err(ConfigurationError::EnvironmentMismatch {
                environment: environment.to_string(),
                expected: environment.is_production(),
                actual: config.production(),
            });
        }
    }

    info!("Using configuration from {}", path.display());
    Ok(config)
}

/// Read a complete record from a TOML or JSON file and validate it
pub fn load_from_file(path: &Path) -> Result<FrontendConfig, ConfigurationError> {
    debug!("Loading configuration from: {}", path.display());

    if !path.exists() {
        return Err(ConfigurationError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let figment = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Figment::new().merge(Json::file(path)),
        _ => Figment::new().merge(Toml::file(path)),
    };

    let config: FrontendConfig = figment.extract()?;
    config.validate()?;

    debug!("Successfully loaded configuration");
    Ok(config)
}
