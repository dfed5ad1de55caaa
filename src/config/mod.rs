//! # Configuration Module
//!
//! Resolves a partial, user-supplied business configuration into a complete,
//! fully defaulted [`SiteConfig`].
//!
//! ## Resolution order
//!
//! 1. Embedded defaults (`presets/defaults.json`)
//! 2. Industry preset overlay for the configured industry slug
//!    (`presets/industries.json`)
//! 3. The user document, deep-merged on top
//!
//! The merge is structural: objects recurse, while scalars and lists replace
//! the default wholesale - lists are never concatenated or element-merged.
//! After merging, a missing `company.slug` is derived from `company.name`
//! when possible; a config that still has no slug fails validation before
//! any I/O happens.
//!
//! Preset tables are data assets, not code: they ship as JSON files embedded
//! at compile time and parsed once on first use.

mod model;
mod presets;
mod resolver;


pub use model::{
    Branding, Company, FaqEntry, GalleryItem, Ghl, Hours, Industry, Reviews, Seo, Service,
    ServiceArea, SiteConfig, Social, Team, Testimonial,
};
pub use presets::{industry_display_name, industry_icon, industry_preset};
pub use resolver::{deep_merge, derive_slug, load_config_document, resolve_config};
