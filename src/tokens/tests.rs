#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::resolve_config;
use serde_json::json;

fn resolved(user: serde_json::Value) -> SiteConfig {
    resolve_config(&user).unwrap()
}

#[test]
fn test_flatten_builds_uppercase_path_keys() {
    let config = resolved(json!({
        "company": {"name": "Acme", "slug": "acme", "city": "Austin"}
    }));
    let map = compile_token_map(&config);
    assert_eq!(map.get("COMPANY_NAME").unwrap(), "Acme");
    assert_eq!(map.get("COMPANY_CITY").unwrap(), "Austin");
    assert_eq!(map.get("HOURS_SUNDAY").unwrap(), "Closed");
}

#[test]
fn test_array_leaves_get_json_suffix() {
    let config = resolved(json!({
        "company": {"slug": "acme"},
        "service_area": {"areas": ["Austin", "Round Rock"]}
    }));
    let map = compile_token_map(&config);
    let areas: Vec<String> =
        serde_json::from_str(map.get("SERVICE_AREA_AREAS_JSON").unwrap()).unwrap();
    assert_eq!(areas, vec!["Austin", "Round Rock"]);
    assert!(map.contains_key("SERVICES_JSON"));
    assert!(map.contains_key("FAQ_JSON"));
}

#[test]
fn test_numeric_and_bool_leaves_stringified() {
    let config = resolved(json!({
        "company": {"slug": "acme", "years_in_business": 12},
        "industry": {"slug": "plumbing"}
    }));
    let map = compile_token_map(&config);
    assert_eq!(map.get("COMPANY_YEARS_IN_BUSINESS").unwrap(), "12");
    assert_eq!(map.get("INDUSTRY_EMERGENCY_SERVICE").unwrap(), "true");
}

#[test]
fn test_every_alias_present_even_for_minimal_config() {
    let config = resolved(json!({"company": {"name": "Acme"}}));
    let map = compile_token_map(&config);
    for alias in [
        "COMPANY_NAME",
        "COMPANY_PHONE",
        "COMPANY_EMAIL",
        "ADDRESS_FULL",
        "LICENSE_NUMBER",
        "YEARS_IN_BUSINESS",
        "SITE_URL",
        "SEO_TITLE",
        "SEO_DESCRIPTION",
        "SEO_KEYWORDS",
        "INDUSTRY_NAME",
        "INDUSTRY_ICON",
        "SERVICE_AREAS",
        "HERO_HEADLINE",
        "PRIMARY_COLOR",
        "SECONDARY_COLOR",
        "ACCENT_COLOR",
        "LOGO_URL",
        "FAVICON_URL",
        "EMERGENCY_BANNER",
        "RATING_DISPLAY",
        "REVIEWS_URL",
        "CHAT_WIDGET",
        "CALENDAR_EMBED",
        "FORM_EMBED",
    ] {
        assert!(map.contains_key(alias), "missing alias token {alias}");
    }
}

#[test]
fn test_alias_defaults_fill_empty_fields() {
    let config = resolved(json!({"company": {"name": "Acme"}}));
    let map = compile_token_map(&config);
    assert_eq!(map.get("COMPANY_PHONE").unwrap(), "(555) 555-5555");
    assert_eq!(map.get("LOGO_URL").unwrap(), "/images/logo.png");
    assert_eq!(map.get("FAVICON_URL").unwrap(), "/favicon.ico");
    assert_eq!(map.get("SERVICE_AREAS").unwrap(), "your area");
    assert_eq!(map.get("HERO_HEADLINE").unwrap(), "Quality Service You Can Trust");
    assert_eq!(map.get("RATING_DISPLAY").unwrap(), "5.0");
}

#[test]
fn test_aliases_win_over_flattened_paths() {
    // COMPANY_PHONE is produced by both the walk (empty) and the alias
    // table (defaulted); the alias must win.
    let config = resolved(json!({"company": {"name": "Acme"}}));
    let map = compile_token_map(&config);
    assert_eq!(config.company.phone, "");
    assert_eq!(map.get("COMPANY_PHONE").unwrap(), "(555) 555-5555");
}

#[test]
fn test_hero_headline_prefers_featured_service() {
    let config = resolved(json!({
        "company": {"name": "Acme", "city": "Austin"},
        "services": [
            {"name": "Drain Cleaning", "featured": false},
            {"name": "Water Heater Repair", "featured": true}
        ]
    }));
    let map = compile_token_map(&config);
    assert_eq!(map.get("HERO_HEADLINE").unwrap(), "Expert Water Heater Repair in Austin");
}

#[test]
fn test_industry_icon_keyed_by_industry_slug() {
    let config = resolved(json!({
        "company": {"name": "Acme"},
        "industry": {"slug": "hvac"}
    }));
    let map = compile_token_map(&config);
    assert_eq!(map.get("INDUSTRY_ICON").unwrap(), "thermometer");
    assert_eq!(map.get("INDUSTRY_NAME").unwrap(), "Heating & Cooling");
    assert_eq!(map.get("EMERGENCY_BANNER").unwrap(), "24/7 Emergency Service Available");
}

#[test]
fn test_service_area_string_from_list() {
    let config = resolved(json!({
        "company": {"name": "Acme"},
        "service_area": {"areas": ["Austin", "Round Rock", "Cedar Park"]}
    }));
    let map = compile_token_map(&config);
    assert_eq!(map.get("SERVICE_AREAS").unwrap(), "Austin, Round Rock, Cedar Park");
}

#[test]
fn test_compilation_is_deterministic() {
    let config = resolved(json!({
        "company": {"name": "Acme Plumbing", "city": "Austin"},
        "industry": {"slug": "plumbing"},
        "seo": {"keywords": ["plumber", "austin plumber"]}
    }));
    let first = compile_token_map(&config);
    let second = compile_token_map(&config);
    assert_eq!(first, second);

    let first_bytes = serde_json::to_vec(&first).unwrap();
    let second_bytes = serde_json::to_vec(&second).unwrap();
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_site_url_derived_from_slug() {
    let config = resolved(json!({"company": {"name": "Acme Plumbing & Sons!"}}));
    let map = compile_token_map(&config);
    assert_eq!(map.get("SITE_URL").unwrap(), "https://www.acme-plumbing-sons.com");
}
