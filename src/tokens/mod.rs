//! # Token Map Compiler
//!
//! Flattens a resolved [`SiteConfig`] into the flat substitution table used
//! by the materializer.
//!
//! Two classes of entries:
//!
//! 1. **Auto-derived** - produced by recursively walking the configuration.
//!    Each leaf gets an uppercase, underscore-joined path key
//!    (`company.name` → `COMPANY_NAME`); list-valued leaves are serialized
//!    once as JSON under a `_JSON`-suffixed key (`services` →
//!    `SERVICES_JSON`).
//! 2. **Aliases** - a fixed table of template-facing names that do not map
//!    1:1 onto a config path. Aliases are installed after the walk and win
//!    on key collision, so the template's placeholder vocabulary never
//!    depends on the config's internal nesting. Every alias rule supplies
//!    its own default, so no known placeholder is left unresolvable by an
//!    absent optional field.
//!
//! The map is a `BTreeMap`, so compiling the same resolved configuration
//! twice yields byte-identical output.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::{industry_display_name, industry_icon, SiteConfig};

#[cfg(test)]
mod tests;

/// Flat token name → replacement value table.
pub type TokenMap = BTreeMap<String, String>;

/// Compile the full token map for a resolved configuration.
pub fn compile_token_map(config: &SiteConfig) -> TokenMap {
    let mut map = TokenMap::new();

    // Generic walk first; serde_json fails only on non-string map keys,
    // which the typed model cannot produce.
    if let Ok(value) = serde_json::to_value(config) {
        flatten("", &value, &mut map);
    }
    apply_aliases(config, &mut map);
    map
}

fn flatten(prefix: &str, value: &Value, map: &mut TokenMap) {
    match value {
        Value::Object(fields) => {
            for (key, val) in fields {
                let path = if prefix.is_empty() {
                    key.to_uppercase()
                } else {
                    format!("{prefix}_{}", key.to_uppercase())
                };
                flatten(&path, val, map);
            }
        }
        Value::Array(items) => {
            // Deterministic serialization: same value → same string.
            let serialized = serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string());
            map.insert(format!("{prefix}_JSON"), serialized);
        }
        Value::String(s) => {
            map.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            map.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            map.insert(prefix.to_string(), b.to_string());
        }
        Value::Null => {
            map.insert(prefix.to_string(), String::new());
        }
    }
}

/// Fixed alias table re-deriving the template's placeholder vocabulary.
fn apply_aliases(config: &SiteConfig, map: &mut TokenMap) {
    let company = &config.company;
    let industry_slug = config.industry.slug.as_str();
    let industry_name = industry_display_name(industry_slug);
    let city = non_empty(&company.city, &config.service_area.primary_city);

    let aliases: Vec<(&str, String)> = vec![
        ("COMPANY_NAME", or_default(&company.name, "Your Company")),
        ("COMPANY_PHONE", or_default(&company.phone, "(555) 555-5555")),
        ("COMPANY_EMAIL", or_default(&company.email, "info@example.com")),
        ("ADDRESS_FULL", full_address(config)),
        ("LICENSE_NUMBER", or_default(&company.license, "Licensed & Insured")),
        ("YEARS_IN_BUSINESS", company.years_in_business.to_string()),
        ("SITE_URL", format!("https://www.{}.com", company.slug)),
        ("SEO_TITLE", seo_title(config, industry_name, &city)),
        ("SEO_DESCRIPTION", seo_description(config, industry_name, &city)),
        ("SEO_KEYWORDS", seo_keywords(config, industry_name, &city)),
        ("INDUSTRY_NAME", industry_name.to_string()),
        ("INDUSTRY_ICON", industry_icon(industry_slug).to_string()),
        ("SERVICE_AREAS", service_areas(config, &city)),
        ("HERO_HEADLINE", hero_headline(config, &city)),
        ("PRIMARY_COLOR", or_default(&config.branding.primary_color, "#1d4ed8")),
        ("SECONDARY_COLOR", or_default(&config.branding.secondary_color, "#0f172a")),
        ("ACCENT_COLOR", or_default(&config.branding.accent_color, "#f59e0b")),
        ("LOGO_URL", or_default(&config.branding.logo, "/images/logo.png")),
        ("FAVICON_URL", or_default(&config.branding.favicon, "/favicon.ico")),
        ("EMERGENCY_BANNER", emergency_banner(config)),
        ("RATING_DISPLAY", rating_display(config)),
        ("REVIEWS_URL", or_default(&config.reviews.url, "#reviews")),
        ("CHAT_WIDGET", config.ghl.chat_widget.clone()),
        ("CALENDAR_EMBED", config.ghl.calendar_embed.clone()),
        ("FORM_EMBED", config.ghl.form_embed.clone()),
    ];

    // Installed after the generic walk; aliases always win on collision.
    for (name, value) in aliases {
        map.insert(name.to_string(), value);
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn non_empty(first: &str, second: &str) -> String {
    if first.is_empty() {
        second.to_string()
    } else {
        first.to_string()
    }
}

fn full_address(config: &SiteConfig) -> String {
    let c = &config.company;
    let mut parts: Vec<String> = Vec::new();
    if !c.street.is_empty() {
        parts.push(c.street.clone());
    }
    if !c.city.is_empty() {
        parts.push(c.city.clone());
    }
    let state_zip = [c.state.as_str(), c.zip.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if !state_zip.is_empty() {
        parts.push(state_zip);
    }
    parts.join(", ")
}

fn seo_title(config: &SiteConfig, industry_name: &str, city: &str) -> String {
    if !config.seo.title.is_empty() {
        return config.seo.title.clone();
    }
    let name = or_default(&config.company.name, "Your Company");
    if city.is_empty() {
        format!("{name} | {industry_name}")
    } else {
        format!("{name} | {industry_name} in {city}")
    }
}

fn seo_description(config: &SiteConfig, industry_name: &str, city: &str) -> String {
    if !config.seo.description.is_empty() {
        return config.seo.description.clone();
    }
    let name = or_default(&config.company.name, "Your Company");
    if city.is_empty() {
        format!("{name} provides trusted {industry_name} services. Contact us today for a free estimate.",
                industry_name = industry_name.to_lowercase())
    } else {
        format!("{name} provides trusted {industry_name} services in {city} and surrounding areas. Contact us today for a free estimate.",
                industry_name = industry_name.to_lowercase())
    }
}

fn seo_keywords(config: &SiteConfig, industry_name: &str, city: &str) -> String {
    if !config.seo.keywords.is_empty() {
        return config.seo.keywords.join(", ");
    }
    let industry = industry_name.to_lowercase();
    if city.is_empty() {
        industry
    } else {
        format!("{industry}, {industry} {city}, {city}", city = city.to_lowercase())
    }
}

fn service_areas(config: &SiteConfig, city: &str) -> String {
    if !config.service_area.areas.is_empty() {
        return config.service_area.areas.join(", ");
    }
    if !city.is_empty() {
        return city.to_string();
    }
    "your area".to_string()
}

/// Derived marketing headline taken from the first featured service.
fn hero_headline(config: &SiteConfig, city: &str) -> String {
    let featured = config
        .services
        .iter()
        .find(|s| s.featured)
        .or_else(|| config.services.first());
    match featured {
        Some(service) if !service.name.is_empty() => {
            if city.is_empty() {
                format!("Expert {} You Can Count On", service.name)
            } else {
                format!("Expert {} in {city}", service.name)
            }
        }
        _ => "Quality Service You Can Trust".to_string(),
    }
}

fn emergency_banner(config: &SiteConfig) -> String {
    if config.industry.emergency_service {
        "24/7 Emergency Service Available".to_string()
    } else {
        String::new()
    }
}

fn rating_display(config: &SiteConfig) -> String {
    if config.reviews.count == 0 {
        return "5.0".to_string();
    }
    format!("{:.1} ({} reviews)", config.reviews.rating, config.reviews.count)
}
