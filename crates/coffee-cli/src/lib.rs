//! # Coffee CLI
//!
//! Operator tool for the Coffee Shop frontend configuration.
//!
//! It resolves the active record the same way the frontend build does
//! (environment tag or complete record file) and lets you:
//! - show, query, validate and export the record
//! - print the Auth0 endpoints and login link derived from it
//! - list the backend routes the frontend calls

pub mod cli;
pub mod error;
pub mod output;

pub use cli::*;
pub use error::*;
