use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::model::SiteConfig;
use super::presets;
use crate::error::GenerateError;

static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"[^a-z0-9]+").expect("slug regex is valid")
});

/// Deep structural merge of `overlay` into `base`.
///
/// Objects recurse key by key; every other value (scalars and lists alike)
/// replaces the base value wholesale. List replacement is deliberate: a user
/// document that supplies three services gets exactly those three, never a
/// union with the preset catalog.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_val) if base_val.is_object() && overlay_val.is_object() => {
                        deep_merge(base_val, overlay_val);
                    }
                    _ => {
                        base_map.insert(key.clone(), overlay_val.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Derive a URL/filesystem-safe slug from a human-readable name.
///
/// Lowercases, collapses every run of non-alphanumeric characters to a
/// single hyphen, and trims leading/trailing hyphens:
/// `"Acme Plumbing & Sons!"` → `"acme-plumbing-sons"`.
pub fn derive_slug(name: &str) -> String {
    NON_ALNUM_RUN
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Load a configuration document from disk, selecting the parser by file
/// extension (`.yaml`/`.yml` → YAML, anything else → JSON).
pub fn load_config_document(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config document {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let value = if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))?
    };
    Ok(value)
}

/// Resolve a partial user configuration into a complete [`SiteConfig`].
///
/// Merge order: embedded defaults, then the industry preset overlay for the
/// configured industry slug, then the user document. Afterwards, a missing
/// `company.slug` is derived from `company.name`; service entries with a
/// name but no slug get one the same way. Fails with
/// [`GenerateError::ConfigValidation`] when no slug can be established or
/// the merged document does not deserialize into the typed model.
pub fn resolve_config(user: &Value) -> Result<SiteConfig, GenerateError> {
    let mut merged = presets::defaults();

    let industry_slug = user
        .pointer("/industry/slug")
        .and_then(Value::as_str)
        .unwrap_or("general");
    if let Some(fragment) = presets::industry_fragment(industry_slug) {
        deep_merge(&mut merged, &fragment);
    }

    deep_merge(&mut merged, user);

    // Slug side effect: derive from the name and re-merge when absent.
    let slug_missing = merged
        .pointer("/company/slug")
        .and_then(Value::as_str)
        .map_or(true, str::is_empty);
    if slug_missing {
        let derived = merged
            .pointer("/company/name")
            .and_then(Value::as_str)
            .map(derive_slug)
            .unwrap_or_default();
        if !derived.is_empty() {
            let patch = serde_json::json!({ "company": { "slug": derived } });
            deep_merge(&mut merged, &patch);
        }
    }

    let has_slug = merged
        .pointer("/company/slug")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty());
    if !has_slug {
        return Err(GenerateError::ConfigValidation(
            "company.slug is required (supply company.slug or company.name)".to_string(),
        ));
    }

    let mut config: SiteConfig = serde_json::from_value(merged)
        .map_err(|e| GenerateError::ConfigValidation(e.to_string()))?;

    for service in &mut config.services {
        if service.slug.is_empty() && !service.name.is_empty() {
            service.slug = derive_slug(&service.name);
        }
    }

    Ok(config)
}
