//! Argument parsing and command handling tests for the coffee CLI

use clap::Parser;
use coffee_cli::cli::handlers;
use coffee_cli::{ApiAction, Args, AuthAction, CliError, Commands, ConfigAction, ExportFormat};
use coffee_common::config::loader::load_from_file;
use coffee_common::{
    ApiRoute, AuthSettings, ConfigHandle, ConfigSelection, Environment, FrontendConfig,
};
use serial_test::serial;

fn record_with(api_server_url: &str, domain_prefix: &str) -> ConfigHandle {
    ConfigHandle::new(FrontendConfig::new(
        false,
        api_server_url,
        AuthSettings::new(domain_prefix, "coffee", "client", "http://localhost:8100"),
    ))
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let args = Args::try_parse_from([
        "coffee", "config", "show", "--env", "prod", "--json", "-vv",
    ])
    .expect("Failed to parse args");

    assert_eq!(args.env, Some(Environment::Production));
    assert!(args.json);
    assert!(matches!(
        args.command,
        Commands::Config {
            action: ConfigAction::Show
        }
    ));
}

#[test]
fn test_parse_rejects_unknown_environment() {
    let result = Args::try_parse_from(["coffee", "--env", "qa", "config", "show"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_export_options() {
    let args = Args::try_parse_from([
        "coffee", "config", "export", "--format", "json", "-o", "out/env.json",
    ])
    .unwrap();

    match args.command {
        Commands::Config {
            action: ConfigAction::Export { format, output },
        } => {
            assert_eq!(format, ExportFormat::Json);
            assert_eq!(output.unwrap().to_str(), Some("out/env.json"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
#[serial]
fn test_flags_override_selection() {
    let args = Args::try_parse_from([
        "coffee", "-e", "staging", "-c", "/tmp/frontend.toml", "api", "routes",
    ])
    .unwrap();

    let selection = args.selection().unwrap();
    assert_eq!(selection.environment(), Environment::Staging);
    assert_eq!(
        selection.config_path.as_deref().and_then(|p| p.to_str()),
        Some("/tmp/frontend.toml")
    );
}

#[tokio::test]
async fn test_export_writes_loadable_record() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("production.toml");

    let selection = ConfigSelection::new(Some(Environment::Production), None);
    handlers::config::handle_config(
        ConfigAction::Export {
            format: ExportFormat::Toml,
            output: Some(path.clone()),
        },
        &selection,
        false,
    )
    .await
    .expect("Failed to export config");

    let loaded = load_from_file(&path).expect("Failed to load exported config");
    assert_eq!(loaded, FrontendConfig::for_environment(Environment::Production));
}

#[tokio::test]
async fn test_validate_reports_failure_for_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
production = false
apiServerUrl = ""

[auth]
domainPrefix = "dev.us"
audience = ""
clientId = "client"
callbackUrl = "http://localhost:8100"
"#,
    )
    .unwrap();

    let selection = ConfigSelection::new(None, Some(path));
    let err = handlers::config::handle_config(ConfigAction::Validate, &selection, true)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::ValidationFailed(2)));
}

#[tokio::test]
async fn test_get_unknown_key_fails() {
    let selection = ConfigSelection::new(Some(Environment::Development), None);
    let err = handlers::config::handle_config(
        ConfigAction::Get {
            key: "auth.secret".to_string(),
        },
        &selection,
        false,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::Config(_)));
}

#[test]
#[serial]
fn test_env_flag_wins_over_bad_variable() {
    std::env::set_var("COFFEE_ENV", "qa");
    let args = Args::try_parse_from(["coffee", "--env", "prod", "config", "show"]).unwrap();
    let selection = args.selection();
    std::env::remove_var("COFFEE_ENV");

    assert_eq!(selection.unwrap().environment(), Environment::Production);
}

#[test]
#[serial]
fn test_bad_variable_fails_without_flag() {
    std::env::set_var("COFFEE_ENV", "qa");
    let args = Args::try_parse_from(["coffee", "config", "show"]).unwrap();
    let selection = args.selection();
    std::env::remove_var("COFFEE_ENV");

    assert!(matches!(selection, Err(CliError::Config(_))));
}

#[test]
fn test_auth_commands_succeed_for_presets() {
    for env in Environment::ALL {
        let config = ConfigHandle::from_environment(env);
        for json in [false, true] {
            handlers::auth::handle_auth(AuthAction::Endpoints, &config, json).unwrap();
            handlers::auth::handle_auth(
                AuthAction::LoginLink {
                    callback_path: "/tabs/user-page".to_string(),
                },
                &config,
                json,
            )
            .unwrap();
            handlers::auth::handle_auth(AuthAction::LogoutLink, &config, json).unwrap();
        }
    }
}

#[test]
fn test_login_link_with_malformed_domain_prefix_fails() {
    let config = record_with("http://localhost:5000", "dev tenant");

    let err = handlers::auth::handle_auth(
        AuthAction::LoginLink {
            callback_path: String::new(),
        },
        &config,
        true,
    )
    .unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

#[test]
fn test_api_routes_succeed_in_both_formats() {
    let config = ConfigHandle::from_environment(Environment::Development);
    handlers::api::handle_api(ApiAction::Routes { id: 4 }, &config, false).unwrap();
    handlers::api::handle_api(ApiAction::Routes { id: 4 }, &config, true).unwrap();
}

#[test]
fn test_route_listing_json() {
    let config = FrontendConfig::for_environment(Environment::Development);
    let listing = handlers::api::route_listing(&config, &ApiRoute::all(4)).unwrap();

    assert_eq!(listing.len(), 6);
    assert_eq!(listing[1]["method"], "GET");
    assert_eq!(listing[1]["url"], "http://localhost:5000/drinks");
    assert!(listing[1]["permission"].is_null());
    assert_eq!(listing[4]["method"], "PATCH");
    assert_eq!(listing[4]["url"], "http://localhost:5000/drinks/4");
    assert_eq!(listing[4]["permission"], "patch:drinks");
}

#[test]
fn test_api_routes_with_invalid_server_url_fails() {
    let config = record_with("not a url", "dev.us");

    for json in [false, true] {
        let err = handlers::api::handle_api(ApiAction::Routes { id: 1 }, &config, json)
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
