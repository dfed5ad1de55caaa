//! Unit tests for CLI argument parsing

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_generate_command_batch_mode() {
    let cli = Cli::try_parse_from(["siteforge-gen", "generate", "--config", "site.yaml"]).unwrap();

    match cli.command {
        Commands::Generate {
            config,
            strict_tokens,
            no_legacy_tokens,
            skip_provisioning,
            ..
        } => {
            assert_eq!(config.unwrap().to_string_lossy(), "site.yaml");
            assert!(!strict_tokens);
            assert!(!no_legacy_tokens);
            assert!(!skip_provisioning);
        }
        _ => panic!("expected Generate command"),
    }
}

#[test]
fn test_generate_command_interactive_mode_has_no_config() {
    let cli = Cli::try_parse_from(["siteforge-gen", "generate", "--skip-provisioning"]).unwrap();

    match cli.command {
        Commands::Generate { config, .. } => assert!(config.is_none()),
        _ => panic!("expected Generate command"),
    }
}

#[test]
fn test_generate_command_with_all_flags() {
    let cli = Cli::try_parse_from([
        "siteforge-gen",
        "generate",
        "--config",
        "site.json",
        "--template-root",
        "tpl",
        "--output-root",
        "out",
        "--assets-root",
        "assets",
        "--db",
        "store.db",
        "--backend-url",
        "http://api.local",
        "--admin-email",
        "a@b.c",
        "--admin-password",
        "secret",
        "--strict-tokens",
        "--no-legacy-tokens",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            template_root,
            output_root,
            assets_root,
            db,
            backend_url,
            admin_email,
            admin_password,
            strict_tokens,
            no_legacy_tokens,
            ..
        } => {
            assert_eq!(template_root.unwrap().to_string_lossy(), "tpl");
            assert_eq!(output_root.unwrap().to_string_lossy(), "out");
            assert_eq!(assets_root.unwrap().to_string_lossy(), "assets");
            assert_eq!(db.unwrap().to_string_lossy(), "store.db");
            assert_eq!(backend_url.unwrap(), "http://api.local");
            assert_eq!(admin_email.unwrap(), "a@b.c");
            assert_eq!(admin_password.unwrap(), "secret");
            assert!(strict_tokens);
            assert!(no_legacy_tokens);
        }
        _ => panic!("expected Generate command"),
    }
}

#[test]
fn test_validate_command() {
    let cli = Cli::try_parse_from(["siteforge-gen", "validate", "--config", "site.yaml"]).unwrap();
    match cli.command {
        Commands::Validate { config } => {
            assert_eq!(config.to_string_lossy(), "site.yaml");
        }
        _ => panic!("expected Validate command"),
    }
}

#[test]
fn test_provision_command_requires_password() {
    let err = Cli::try_parse_from(["siteforge-gen", "provision", "--config", "site.yaml"]);
    assert!(err.is_err());

    let cli = Cli::try_parse_from([
        "siteforge-gen",
        "provision",
        "--config",
        "site.yaml",
        "--admin-password",
        "secret",
    ])
    .unwrap();
    match cli.command {
        Commands::Provision { admin_password, .. } => assert_eq!(admin_password, "secret"),
        _ => panic!("expected Provision command"),
    }
}
