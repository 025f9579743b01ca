//! Compiled-in records, one per environment
//!
//! Staging and production carry placeholder values. Replace them with the
//! tenant and hosts of the actual deployment before building for it.

use super::{AuthSettings, FrontendConfig};
use crate::environment::Environment;

/// Audience registered for the Coffee Shop API
pub const API_AUDIENCE: &str = "coffee";

pub fn preset(environment: Environment) -> FrontendConfig {
    match environment {
        Environment::Development => development(),
        Environment::Staging => staging(),
        Environment::Production => production(),
    }
}

fn development() -> FrontendConfig {
    FrontendConfig::new(
        false,
        "http://localhost:5000",
        AuthSettings::new(
            "dev-plt5dax5.us",
            API_AUDIENCE,
            "iY5g4NUrB7AjOuaopcOfjmL8SJk3Kjz2",
            "http://localhost:8100",
        ),
    )
}

fn staging() -> FrontendConfig {
    FrontendConfig::new(
        false,
        "https://api.staging.coffee-shop.example",
        AuthSettings::new(
            "coffee-shop-staging.us",
            API_AUDIENCE,
            "staging-client-id",
            "https://staging.coffee-shop.example",
        ),
    )
}

fn production() -> FrontendConfig {
    FrontendConfig::new(
        true,
        "https://api.coffee-shop.example",
        AuthSettings::new(
            "coffee-shop.us",
            API_AUDIENCE,
            "production-client-id",
            "https://coffee-shop.example",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_flag_follows_environment() {
        for env in Environment::ALL {
            assert_eq!(preset(env).production(), env.is_production());
        }
    }

    #[test]
    fn test_every_preset_targets_the_same_audience() {
        for env in Environment::ALL {
            assert_eq!(preset(env).auth().audience(), API_AUDIENCE);
        }
    }
}
