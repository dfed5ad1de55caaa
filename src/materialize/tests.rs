#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::resolve_config;
use crate::tokens::TokenMap;
use serde_json::json;
use std::fs;
use std::path::Path;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn small_token_map() -> TokenMap {
    let mut map = TokenMap::new();
    map.insert("COMPANY_NAME".to_string(), "Acme".to_string());
    map.insert("PRIMARY_COLOR".to_string(), "#111111".to_string());
    map
}

#[test]
fn test_copy_skips_excluded_directories_at_any_depth() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let dest = dest.path().join("out");

    write(&src.path().join("index.html"), "<html></html>");
    write(&src.path().join("node_modules/pkg/index.js"), "x");
    write(&src.path().join("src/deep/node_modules/pkg/a.js"), "x");
    write(&src.path().join("src/app.js"), "app");
    write(&src.path().join(".git/HEAD"), "ref");
    write(&src.path().join(".next/cache.bin"), "c");

    let stats = copy_template_tree(src.path(), &dest).unwrap();
    assert_eq!(stats.files_copied, 2);
    assert!(dest.join("index.html").is_file());
    assert!(dest.join("src/app.js").is_file());
    assert!(!dest.join("node_modules").exists());
    assert!(!dest.join("src/deep/node_modules").exists());
    assert!(!dest.join(".git").exists());
    assert!(!dest.join(".next").exists());

    // Nothing named after an excluded directory anywhere under the output.
    for entry in walkdir::WalkDir::new(&dest) {
        let entry = entry.unwrap();
        if entry.file_type().is_dir() {
            let name = entry.file_name().to_str().unwrap();
            assert!(!EXCLUDED_DIRS.contains(&name), "excluded dir {name} in output");
        }
    }
}

#[test]
fn test_copy_preserves_binary_files_byte_for_byte() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let dest = dest.path().join("out");

    let bytes: Vec<u8> = (0u8..=255).collect();
    fs::write(src.path().join("blob.png"), &bytes).unwrap();

    copy_template_tree(src.path(), &dest).unwrap();
    assert_eq!(fs::read(dest.join("blob.png")).unwrap(), bytes);
}

#[cfg(unix)]
#[test]
fn test_copy_skips_dangling_symlink() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let dest = dest.path().join("out");

    write(&src.path().join("real.txt"), "real");
    std::os::unix::fs::symlink(src.path().join("missing.txt"), src.path().join("broken.txt"))
        .unwrap();

    let stats = copy_template_tree(src.path(), &dest).unwrap();
    assert_eq!(stats.files_copied, 1);
    assert_eq!(stats.entries_skipped, 1);
    assert!(!dest.join("broken.txt").exists());
}

#[test]
fn test_substitute_round_trip_both_grammars() {
    let tokens = small_token_map();
    let mut report = SubstitutionReport::default();
    let input = "Welcome to {{COMPANY_NAME}}, color __PRIMARY_COLOR__, keep {{UNKNOWN_TOKEN}}";
    let output = substitute_str(input, &tokens, &SubstitutionOptions::default(), &mut report);
    assert_eq!(output, "Welcome to Acme, color #111111, keep {{UNKNOWN_TOKEN}}");
    assert_eq!(report.legacy_hits, 1);
    assert!(report.unresolved.contains("UNKNOWN_TOKEN"));
}

#[test]
fn test_substitute_allows_inner_whitespace() {
    let tokens = small_token_map();
    let mut report = SubstitutionReport::default();
    let output = substitute_str(
        "{{ COMPANY_NAME }} and {{COMPANY_NAME}}",
        &tokens,
        &SubstitutionOptions::default(),
        &mut report,
    );
    assert_eq!(output, "Acme and Acme");
}

#[test]
fn test_legacy_grammar_can_be_disabled() {
    let tokens = small_token_map();
    let mut report = SubstitutionReport::default();
    let options = SubstitutionOptions {
        legacy_tokens: false,
        ..SubstitutionOptions::default()
    };
    let output = substitute_str("__COMPANY_NAME__", &tokens, &options, &mut report);
    assert_eq!(output, "__COMPANY_NAME__");
    assert_eq!(report.legacy_hits, 0);
}

#[test]
fn test_tree_substitution_counts_only_changed_files() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("index.html"), "<h1>{{COMPANY_NAME}}</h1>");
    write(&dir.path().join("static.css"), "body { margin: 0; }");
    write(&dir.path().join("logo.png"), "not a real png but binary-ish");

    let report = substitute_tree(
        dir.path(),
        &small_token_map(),
        &SubstitutionOptions::default(),
    )
    .unwrap();

    // png is not on the allowlist; css visited but unchanged.
    assert_eq!(report.files_visited, 2);
    assert_eq!(report.files_modified, 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("index.html")).unwrap(),
        "<h1>Acme</h1>"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("static.css")).unwrap(),
        "body { margin: 0; }"
    );
}

#[test]
fn test_tree_substitution_strict_mode_lists_unresolved() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("a.html"), "{{MISSING_B}} {{MISSING_A}}");

    let options = SubstitutionOptions {
        strict: true,
        ..SubstitutionOptions::default()
    };
    match substitute_tree(dir.path(), &small_token_map(), &options) {
        Err(crate::error::GenerateError::UnresolvedTokens(names)) => {
            assert_eq!(names, vec!["MISSING_A".to_string(), "MISSING_B".to_string()]);
        }
        other => panic!("expected UnresolvedTokens, got {other:?}"),
    }
}

#[test]
fn test_unresolved_tokens_pass_through_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("a.html"), "{{MISSING_TOKEN}}");

    let report = substitute_tree(
        dir.path(),
        &small_token_map(),
        &SubstitutionOptions::default(),
    )
    .unwrap();
    assert_eq!(report.files_modified, 0);
    assert!(report.unresolved.contains("MISSING_TOKEN"));
    assert_eq!(
        fs::read_to_string(dir.path().join("a.html")).unwrap(),
        "{{MISSING_TOKEN}}"
    );
}

#[test]
fn test_asset_fallback_prefers_industry_specific_image() {
    let assets = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    write(&assets.path().join("plumbing-drain-cleaning.png"), "industry");
    write(&assets.path().join("drain-cleaning.png"), "generic");

    let mut config = resolve_config(&json!({
        "company": {"name": "Acme"},
        "industry": {"slug": "plumbing"},
        "services": [{"name": "Drain Cleaning"}]
    }))
    .unwrap();

    let report = resolve_assets(&mut config, Some(assets.path()), project.path()).unwrap();
    assert_eq!(report.copied, 1);
    assert_eq!(config.services[0].image, "/images/services/drain-cleaning.png");
    assert_eq!(
        fs::read_to_string(
            project
                .path()
                .join("public/images/services/drain-cleaning.png")
        )
        .unwrap(),
        "industry"
    );
}

#[test]
fn test_asset_extension_order_tried_in_sequence() {
    let assets = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    // Only a webp generic candidate exists.
    write(&assets.path().join("drain-cleaning.webp"), "w");

    let mut config = resolve_config(&json!({
        "company": {"name": "Acme"},
        "services": [{"name": "Drain Cleaning"}]
    }))
    .unwrap();

    resolve_assets(&mut config, Some(assets.path()), project.path()).unwrap();
    assert_eq!(config.services[0].image, "/images/services/drain-cleaning.webp");
}

#[test]
fn test_asset_miss_leaves_service_reference_as_configured() {
    let assets = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();

    let mut config = resolve_config(&json!({
        "company": {"name": "Acme"},
        "services": [{"name": "Drain Cleaning"}]
    }))
    .unwrap();

    let report = resolve_assets(&mut config, Some(assets.path()), project.path()).unwrap();
    assert_eq!(report.copied, 0);
    assert_eq!(config.services[0].image, "");
    assert_eq!(report.misses, vec!["service image: drain-cleaning".to_string()]);
}

#[test]
fn test_supplied_logo_is_relocated_and_reference_rewritten() {
    let supplied = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    let logo_path = supplied.path().join("my-logo.svg");
    write(&logo_path, "<svg/>");

    let mut config = resolve_config(&json!({
        "company": {"name": "Acme"},
        "branding": {"logo": logo_path.to_str().unwrap()}
    }))
    .unwrap();

    resolve_assets(&mut config, None, project.path()).unwrap();
    assert_eq!(config.branding.logo, "/images/logo.svg");
    assert!(project.path().join("public/images/logo.svg").is_file());
}

#[test]
fn test_missing_supplied_logo_resets_reference() {
    let project = tempfile::tempdir().unwrap();

    let mut config = resolve_config(&json!({
        "company": {"name": "Acme"},
        "branding": {"logo": "/nonexistent/path/logo.png"}
    }))
    .unwrap();

    let report = resolve_assets(&mut config, None, project.path()).unwrap();
    assert_eq!(config.branding.logo, "");
    assert!(report.misses.iter().any(|m| m.starts_with("logo:")));
}
