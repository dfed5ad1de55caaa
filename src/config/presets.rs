//! Embedded preset tables.
//!
//! Industry and default-configuration data live in `presets/*.json` and are
//! parsed once on first access. Keeping them as data assets means adding an
//! industry is a JSON edit, not a code change.

use once_cell::sync::Lazy;
use serde_json::Value;

static DEFAULTS: Lazy<Value> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    serde_json::from_str(include_str!("../../presets/defaults.json"))
        .expect("embedded presets/defaults.json is valid JSON")
});

static INDUSTRIES: Lazy<Value> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    serde_json::from_str(include_str!("../../presets/industries.json"))
        .expect("embedded presets/industries.json is valid JSON")
});

/// The complete default configuration document.
pub(crate) fn defaults() -> Value {
    DEFAULTS.clone()
}

/// Raw preset entry for an industry slug, if one exists.
pub fn industry_preset(slug: &str) -> Option<&'static Value> {
    INDUSTRIES.get(slug)
}

/// Human-readable industry name, falling back to the general preset.
pub fn industry_display_name(slug: &str) -> &'static str {
    preset_str(slug, "display_name").unwrap_or("General Services")
}

/// Default iconography key for an industry slug.
pub fn industry_icon(slug: &str) -> &'static str {
    preset_str(slug, "icon").unwrap_or("briefcase")
}

fn preset_str(slug: &str, key: &str) -> Option<&'static str> {
    industry_preset(slug).and_then(|p| p.get(key)).and_then(Value::as_str)
}

/// Configuration fragment contributed by an industry preset, merged between
/// the defaults and the user document. Lists (services, faq) are taken
/// wholesale; a user document that supplies its own replaces them entirely.
pub(crate) fn industry_fragment(slug: &str) -> Option<Value> {
    let preset = industry_preset(slug)?;
    let mut fragment = serde_json::Map::new();

    let mut industry = serde_json::Map::new();
    industry.insert("slug".into(), Value::String(slug.to_string()));
    if let Some(emergency) = preset.get("emergency_service") {
        industry.insert("emergency_service".into(), emergency.clone());
    }
    fragment.insert("industry".into(), Value::Object(industry));

    if let Some(services) = preset.get("services").and_then(Value::as_array) {
        if !services.is_empty() {
            fragment.insert("services".into(), Value::Array(services.clone()));
        }
    }
    if let Some(faq) = preset.get("faq").and_then(Value::as_array) {
        if !faq.is_empty() {
            fragment.insert("faq".into(), Value::Array(faq.clone()));
        }
    }

    Some(Value::Object(fragment))
}
