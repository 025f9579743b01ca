//! Record invariants

use super::FrontendConfig;
use crate::error::ConfigurationError;
use url::Url;

impl FrontendConfig {
    /// Check every field, reporting all violations together
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut violations = Vec::new();
        let auth = self.auth();

        check_absolute_url("apiServerUrl", self.api_server_url(), &mut violations);
        check_domain_prefix(auth.domain_prefix(), &mut violations);
        check_not_empty("auth.audience", auth.audience(), &mut violations);
        check_not_empty("auth.clientId", auth.client_id(), &mut violations);
        check_absolute_url("auth.callbackUrl", auth.callback_url(), &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::Invalid { violations })
        }
    }
}

fn check_not_empty(field: &str, value: &str, violations: &mut Vec<String>) -> bool {
    if value.trim().is_empty() {
        violations.push(format!("{field} must not be empty"));
        return false;
    }
    true
}

fn check_absolute_url(field: &str, value: &str, violations: &mut Vec<String>) {
    if !check_not_empty(field, value, violations) {
        return;
    }
    match Url::parse(value) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            violations.push(format!(
                "{field} must use http or https, got '{}'",
                url.scheme()
            ));
        }
        Ok(url) if url.host_str().map_or(true, str::is_empty) => {
            violations.push(format!("{field} must include a host"));
        }
        Ok(_) => {}
        Err(e) => violations.push(format!("{field} is not an absolute URL: {e}")),
    }
}

fn check_domain_prefix(value: &str, violations: &mut Vec<String>) {
    if !check_not_empty("auth.domainPrefix", value, violations) {
        return;
    }
    if value.contains("://") || value.contains('/') || value.chars().any(char::is_whitespace) {
        violations.push(format!(
            "auth.domainPrefix must be a bare tenant prefix, got '{value}'"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthSettings;
    use crate::environment::Environment;

    fn violations(config: &FrontendConfig) -> Vec<String> {
        match config.validate() {
            Err(ConfigurationError::Invalid { violations }) => violations,
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_presets_are_valid() {
        for env in Environment::ALL {
            FrontendConfig::for_environment(env).validate().unwrap();
        }
    }

    #[test]
    fn test_reports_every_violation() {
        let config = FrontendConfig::new(
            false,
            "",
            AuthSettings::new(" ", "", "", "http://localhost:8100"),
        );
        let found = violations(&config);
        assert_eq!(found.len(), 4);
        assert!(found.iter().any(|v| v.starts_with("apiServerUrl")));
        assert!(found.iter().any(|v| v.starts_with("auth.domainPrefix")));
        assert!(found.iter().any(|v| v.starts_with("auth.audience")));
        assert!(found.iter().any(|v| v.starts_with("auth.clientId")));
    }

    #[test]
    fn test_rejects_relative_and_non_http_urls() {
        let config = FrontendConfig::new(
            false,
            "localhost",
            AuthSettings::new("dev.us", "coffee", "client", "ftp://localhost:8100"),
        );
        let found = violations(&config);
        assert_eq!(found.len(), 2);
        assert!(found[0].contains("apiServerUrl"));
        assert!(found[1].contains("http or https"));
    }

    #[test]
    fn test_domain_prefix_must_not_be_a_url() {
        let config = FrontendConfig::new(
            false,
            "http://localhost:5000",
            AuthSettings::new(
                "https://dev.us.auth0.com",
                "coffee",
                "client",
                "http://localhost:8100",
            ),
        );
        let found = violations(&config);
        assert_eq!(found.len(), 1);
        assert!(found[0].contains("bare tenant prefix"));
    }
}
