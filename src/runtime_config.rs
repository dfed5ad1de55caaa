//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for generator defaults. Every
//! value here can be overridden per-invocation by a CLI flag; the environment
//! only supplies defaults for unattended (CI / batch) runs.
//!
//! ## Environment Variables
//!
//! - `SITEFORGE_TEMPLATE_ROOT` - base website template directory
//!   (default: `templates/base-site`)
//! - `SITEFORGE_OUTPUT_ROOT` - root under which generated projects are
//!   written (default: `generated-sites`)
//! - `SITEFORGE_DB_PATH` - SQLite database file for tenant provisioning
//!   (default: `siteforge.db`)
//! - `SITEFORGE_BACKEND_URL` - backend location written into each generated
//!   project's `.env` (default: `http://localhost:4000`)

use std::env;
use std::path::PathBuf;

/// Generator defaults loaded from environment variables.
///
/// Load at startup with [`RuntimeConfig::from_env()`], then layer CLI flag
/// overrides on top.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Base website template directory
    pub template_root: PathBuf,
    /// Root directory for generated projects
    pub output_root: PathBuf,
    /// SQLite database file for provisioning
    pub db_path: PathBuf,
    /// Backend URL embedded in generated environment files
    pub backend_url: String,
}

impl RuntimeConfig {
    /// Load configuration from environment variables, falling back to
    /// built-in defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            template_root: env_path("SITEFORGE_TEMPLATE_ROOT", "templates/base-site"),
            output_root: env_path("SITEFORGE_OUTPUT_ROOT", "generated-sites"),
            db_path: env_path("SITEFORGE_DB_PATH", "siteforge.db"),
            backend_url: env::var("SITEFORGE_BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:4000".to_string()),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
