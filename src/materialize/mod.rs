//! # Template Materialization
//!
//! Reproduces the base website template tree at a new destination and
//! rewrites its placeholders from a compiled [`TokenMap`](crate::tokens::TokenMap).
//!
//! Three passes, in order:
//!
//! 1. **Copy** ([`copy_template_tree`]) - recursive byte-for-byte copy with
//!    a fixed excluded-directory set pruned at any depth. Non-regular
//!    entries are skipped; any other I/O error aborts the run.
//! 2. **Assets** ([`resolve_assets`]) - ordered fallback-chain resolution of
//!    logo/favicon/per-service images into the copied tree's public asset
//!    directories, rewriting configuration references. Misses degrade
//!    gracefully.
//! 3. **Substitute** ([`substitute_tree`]) - rewrites files on the
//!    text-extension allowlist in place. `{{TOKEN}}` is the primary
//!    grammar; `__TOKEN__` is a deprecated compatibility shim that can be
//!    switched off. Unresolved placeholders pass through verbatim unless
//!    strict mode is enabled.

mod assets;
mod copy;
mod substitute;

#[cfg(test)]
mod tests;

pub use assets::{resolve_assets, AssetReport, IMAGE_EXTENSIONS};
pub use copy::{copy_template_tree, CopyStats, EXCLUDED_DIRS};
pub use substitute::{
    substitute_str, substitute_tree, SubstitutionOptions, SubstitutionReport, TEXT_EXTENSIONS,
};
