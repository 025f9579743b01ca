//! Authentication settings and the Auth0 endpoints derived from them

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Suffix Auth0 appends to a tenant prefix
pub const AUTH0_DOMAIN_SUFFIX: &str = "auth0.com";

/// Identity provider settings for the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthSettings {
    /// Auth0 tenant prefix, e.g. `dev-plt5dax5.us`
    domain_prefix: String,

    /// API identifier issued tokens are valid for
    audience: String,

    /// Public client ID of the registered application
    client_id: String,

    /// Where Auth0 redirects after login
    callback_url: String,
}

impl AuthSettings {
    pub fn new(
        domain_prefix: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            domain_prefix: domain_prefix.into(),
            audience: audience.into(),
            client_id: client_id.into(),
            callback_url: callback_url.into(),
        }
    }

    pub fn domain_prefix(&self) -> &str {
        &self.domain_prefix
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Full tenant domain, without scheme
    pub fn domain(&self) -> String {
        format!("{}.{}", self.domain_prefix, AUTH0_DOMAIN_SUFFIX)
    }

    /// Token issuer as it appears in the `iss` claim
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain())
    }

    pub fn authorize_url(&self) -> String {
        format!("https://{}/authorize", self.domain())
    }

    /// Link that starts the implicit login flow.
    ///
    /// `callback_path` is appended verbatim to `callbackUrl` to form the
    /// redirect target (e.g. `/tabs/user-page`).
    pub fn login_link(&self, callback_path: &str) -> Result<Url, ConfigurationError> {
        let mut link = parse_endpoint(&self.authorize_url())?;
        link.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair(
                "redirect_uri",
                &format!("{}{}", self.callback_url, callback_path),
            );
        Ok(link)
    }

    /// Link that clears the Auth0 session and returns to the app
    pub fn logout_link(&self) -> Result<Url, ConfigurationError> {
        let mut link = parse_endpoint(&format!("https://{}/v2/logout", self.domain()))?;
        link.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", &self.callback_url);
        Ok(link)
    }

    /// Derived endpoints, in display order
    pub fn endpoints(&self) -> Vec<(&'static str, String)> {
        vec![
            ("domain", self.domain()),
            ("issuer", self.issuer()),
            ("jwks", self.jwks_url()),
            ("authorize", self.authorize_url()),
        ]
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigurationError> {
    Url::parse(raw).map_err(|e| ConfigurationError::Invalid {
        violations: vec![format!("auth endpoint {raw} is not a valid URL: {e}")],
    })
}
