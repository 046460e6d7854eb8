//! Serve command configuration tests

use schema_validator::cli::CliError;
use schema_validator::cli::commands::serve::{ServeArgs, resolve_config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_cli_serve_flags_override_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[server]\naddress = \"127.0.0.1\"\nport = 9000").unwrap();
    file.flush().unwrap();

    let config = resolve_config(&ServeArgs {
        port: Some(9100),
        config: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(config.server.address, "127.0.0.1");
    assert_eq!(config.server.port, 9100);
}

#[test]
fn test_cli_serve_assets_dir_must_exist() {
    let result = resolve_config(&ServeArgs {
        assets_dir: Some("/definitely/not/a/dir".into()),
        ..Default::default()
    });
    assert!(matches!(result, Err(CliError::InvalidArgument(_))));
}

#[test]
fn test_cli_serve_assets_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = resolve_config(&ServeArgs {
        assets_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(config.assets.directory.as_deref(), Some(dir.path()));
}

#[test]
fn test_cli_serve_rejects_bad_address() {
    let result = resolve_config(&ServeArgs {
        address: Some("not-an-ip".to_string()),
        ..Default::default()
    });
    assert!(matches!(result, Err(CliError::ConfigError(_))));
}

#[test]
fn test_cli_serve_missing_config_file() {
    let result = resolve_config(&ServeArgs {
        config: Some("/definitely/not/here.toml".into()),
        ..Default::default()
    });
    assert!(matches!(result, Err(CliError::ConfigError(_))));
}
