//! Frontend configuration record
//!
//! One [`FrontendConfig`] is active per process. It is either one of the
//! compiled-in presets or a complete record read from a file, and it is never
//! merged with another record or patched field by field.

pub mod api;
pub mod auth;
pub mod loader;
pub mod presets;
pub mod validation;

pub use api::ApiRoute;
pub use auth::AuthSettings;

use crate::environment::Environment;
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

/// Deployment parameters consumed by the frontend.
///
/// Fields are private: a record is built once and only read afterwards.
/// Serialized names follow the frontend's camelCase shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrontendConfig {
    /// Build/deployment mode flag
    production: bool,

    /// Absolute base URL of the backend API
    api_server_url: String,

    /// Identity provider settings
    auth: AuthSettings,
}

impl FrontendConfig {
    pub fn new(production: bool, api_server_url: impl Into<String>, auth: AuthSettings) -> Self {
        Self {
            production,
            api_server_url: api_server_url.into(),
            auth,
        }
    }

    /// Compiled-in record for an environment
    pub fn for_environment(environment: Environment) -> Self {
        presets::preset(environment)
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth(&self) -> &AuthSettings {
        &self.auth
    }

    /// Get a single value by dotted key.
    ///
    /// Keys use the serialized names (`auth.clientId`); snake_case aliases
    /// (`auth.client_id`) are accepted as well.
    pub fn lookup(&self, key: &str) -> Result<String, ConfigurationError> {
        let value = match key {
            "production" => self.production.to_string(),
            "apiServerUrl" | "api_server_url" => self.api_server_url.clone(),
            "auth.domainPrefix" | "auth.domain_prefix" => self.auth.domain_prefix().to_string(),
            "auth.audience" => self.auth.audience().to_string(),
            "auth.clientId" | "auth.client_id" => self.auth.client_id().to_string(),
            "auth.callbackUrl" | "auth.callback_url" => self.auth.callback_url().to_string(),
            _ => {
                return Err(ConfigurationError::UnknownKey {
                    key: key.to_string(),
                })
            }
        };
        Ok(value)
    }

    /// All fields as `(key, value)` pairs, in declaration order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("production", self.production.to_string()),
            ("apiServerUrl", self.api_server_url.clone()),
            ("auth.domainPrefix", self.auth.domain_prefix().to_string()),
            ("auth.audience", self.auth.audience().to_string()),
            ("auth.clientId", self.auth.client_id().to_string()),
            ("auth.callbackUrl", self.auth.callback_url().to_string()),
        ]
    }

    /// Absolute URL of a backend route, joined onto `apiServerUrl`.
    ///
    /// A path on the base URL is kept: `http://host/api` + `/drinks` gives
    /// `http://host/api/drinks`.
    pub fn route_url(&self, route: &ApiRoute) -> Result<Url, ConfigurationError> {
        let mut base = Url::parse(&self.api_server_url).map_err(|e| {
            ConfigurationError::Invalid {
                violations: vec![format!("apiServerUrl is not a valid URL: {e}")],
            }
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(route.path().trim_start_matches('/'))
            .map_err(|e| ConfigurationError::Invalid {
                violations: vec![format!("cannot build URL for {}: {e}", route.path())],
            })
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigurationError::parse(format!("Failed to serialize config: {e}")))
    }

    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigurationError::parse(format!("Failed to serialize config: {e}")))
    }
}

/// Shared, read-only handle to the active record.
///
/// Built once at startup and passed to every consumer explicitly. Clones share
/// the same allocation.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    inner: Arc<FrontendConfig>,
}

impl ConfigHandle {
    pub fn new(config: FrontendConfig) -> Self {
        Self {
            inner: Arc::new(config),
        }
    }

    pub fn from_environment(environment: Environment) -> Self {
        Self::new(FrontendConfig::for_environment(environment))
    }

    /// The active record
    pub fn get(&self) -> &FrontendConfig {
        &self.inner
    }

    /// Whether two handles point at the same record
    pub fn ptr_eq(&self, other: &ConfigHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<FrontendConfig> for ConfigHandle {
    fn from(config: FrontendConfig) -> Self {
        Self::new(config)
    }
}
