//! # CLI Module
//!
//! Command-line surface for the site generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Materialize a site and provision its backing records:
//!
//! ```bash
//! siteforge-gen generate --config site.yaml
//! ```
//!
//! Without `--config`, every configuration field is collected through
//! interactive prompts instead. Defaults for the template root, output
//! root, database, and backend URL come from the environment (see
//! [`crate::runtime_config`]) and can be overridden per-flag.
//!
//! ### `validate`
//!
//! Resolve a configuration document and report the outcome without touching
//! the filesystem or the store:
//!
//! ```bash
//! siteforge-gen validate --config site.yaml
//! ```
//!
//! ### `provision`
//!
//! Run only the store steps from a configuration document:
//!
//! ```bash
//! siteforge-gen provision --config site.yaml --admin-password secret
//! ```
//!
//! Exit code 0 on success; non-zero with a failure summary on stderr for
//! any validation, copy, or provisioning failure. Success is binary - there
//! is no partial-success exit code even when provisioning fails after the
//! files were created.

mod commands;
mod prompts;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
