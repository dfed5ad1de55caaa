//! # Generator Module
//!
//! End-to-end orchestration of a generation run: resolve the configuration,
//! materialize the template tree, resolve assets, substitute tokens, mint
//! the site identity, and provision the backing records.
//!
//! ## Pipeline
//!
//! ```text
//! user document
//!   → config::resolve_config          (defaults + industry preset + merge)
//!   → materialize::copy_template_tree (into a staging directory)
//!   → materialize::resolve_assets     (logo / favicon / service images)
//!   → tokens::compile_token_map
//!   → materialize::substitute_tree    (both grammars, best effort)
//!   → package manifest rewrite, .env (SiteId), site.config.json
//!   → atomic rename staging → <output-root>/<industry>/<slug>/
//!   → provision::ProvisionStore       (company, admin, association)
//! ```
//!
//! Materialization happens entirely inside a staging directory under the
//! output root; the final path only ever appears via `fs::rename`, which
//! narrows the window between the destination-exists check and the first
//! write to a single atomic operation. Provisioning runs last and is
//! independent of the filesystem steps: its failure leaves the generated
//! files in place and is surfaced distinctly.

mod project;


pub use project::{generate_site, GenerateOptions, GenerateReport, ProvisionRequest};
