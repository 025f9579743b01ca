//! # Coffee Common
//!
//! Environment-scoped configuration shared by the Coffee Shop frontend tooling.
//!
//! The frontend needs a handful of deployment parameters: where the backend API
//! lives and how to reach the Auth0 tenant that issues its tokens. This crate
//! models them as one immutable [`FrontendConfig`] record per [`Environment`],
//! selected once at process start and handed to consumers through a
//! [`ConfigHandle`].
//!
//! ```
//! use coffee_common::{ConfigHandle, Environment};
//!
//! let config = ConfigHandle::from_environment(Environment::Development);
//! assert_eq!(config.get().api_server_url(), "http://localhost:5000");
//! assert_eq!(config.get().auth().audience(), "coffee");
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod logging;

pub use config::{
    loader::{load, ConfigSelection},
    ApiRoute, AuthSettings, ConfigHandle, FrontendConfig,
};
pub use environment::Environment;
pub use error::ConfigurationError;
