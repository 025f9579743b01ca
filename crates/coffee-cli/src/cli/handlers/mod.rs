//! Command handlers for the Coffee CLI

pub mod api;
pub mod auth;
pub mod config;
