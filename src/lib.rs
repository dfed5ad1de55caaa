//! # siteforge
//!
//! **siteforge** is a multi-tenant marketing-site generator: given a
//! structured business configuration (company identity, branding, industry,
//! service catalog, service area, integrations), it materializes a fully
//! customized copy of a base website template and provisions the backing
//! records - tenant company, admin account, and their association - needed
//! to operate that site.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`config`]** - Configuration resolution: defaults, industry preset
//!   overlay, deep merge, slug derivation, validation
//! - **[`tokens`]** - Token Map compilation: configuration flattening plus
//!   the template-facing alias table
//! - **[`materialize`]** - Template tree copy, asset resolution, and
//!   placeholder substitution
//! - **[`provision`]** - Idempotent tenant/admin/association provisioning
//!   against the relational store
//! - **[`identity`]** - Per-site ULID identity and environment-file output
//! - **[`generator`]** - End-to-end pipeline orchestration
//! - **[`cli`]** - Command-line surface (`siteforge-gen`)
//! - **[`runtime_config`]** - Environment-variable defaults
//!
//! ## Generation Flow
//!
//! ```text
//! Config document → Resolver → Token Map → Template copy (staging)
//!                                        → Asset resolution
//!                                        → Token substitution
//!                                        → .env (SiteId) + site.config.json
//!                                        → atomic rename into place
//!                                        → Store provisioning
//! ```
//!
//! ## Usage
//!
//! ### CLI
//!
//! ```bash
//! siteforge-gen generate --config site.yaml
//! ```
//!
//! ### Programmatic
//!
//! ```rust,ignore
//! use siteforge::generator::{generate_site, GenerateOptions};
//! use siteforge::materialize::SubstitutionOptions;
//!
//! let document = serde_json::json!({
//!     "company": { "name": "Acme Plumbing", "email": "info@acme.example" },
//!     "industry": { "slug": "plumbing" }
//! });
//! let options = GenerateOptions {
//!     template_root: "templates/base-site".into(),
//!     output_root: "generated-sites".into(),
//!     assets_root: None,
//!     backend_url: "http://localhost:4000".into(),
//!     substitution: SubstitutionOptions::default(),
//!     provision: None,
//! };
//! let report = generate_site(&document, &options)?;
//! println!("generated {}", report.project_dir.display());
//! # Ok::<(), siteforge::GenerateError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod identity;
pub mod materialize;
pub mod provision;
pub mod runtime_config;
pub mod tokens;

pub use error::GenerateError;
pub use identity::SiteId;
